use crate::domain::ports::AnalyticsTrackerRef;

pub const HOME_PATH: &str = "/home";

/// Serves storefront pages and reports each view to analytics.
pub struct Storefront {
    analytics: AnalyticsTrackerRef,
}

impl Storefront {
    pub fn new(analytics: AnalyticsTrackerRef) -> Self {
        Self { analytics }
    }

    /// Records a page view for [`HOME_PATH`] and returns the page body.
    pub async fn render_home_page(&self) -> String {
        self.analytics.track_page_view(HOME_PATH).await;
        "<div>content</div>".to_string()
    }
}
