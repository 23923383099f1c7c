//! Adapters backed by the host: wall clock, random source and log output.

use crate::domain::calendar::ClockReading;
use crate::domain::ports::{AnalyticsTracker, Clock, SecurityCodeGenerator};
use crate::error::Result;
use async_trait::async_trait;
use chrono::Local;
use rand::Rng;

/// Reads the local wall clock on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockReading {
        Local::now().naive_local()
    }
}

/// Issues uniformly random six-digit codes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl SecurityCodeGenerator for RandomCodeGenerator {
    fn generate_code(&self) -> Result<u32> {
        let code = rand::thread_rng().gen_range(100_000..1_000_000);
        tracing::debug!("generated login code");
        Ok(code)
    }
}

/// Emits one `info` event per page view.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalyticsTracker;

#[async_trait]
impl AnalyticsTracker for TracingAnalyticsTracker {
    async fn track_page_view(&self, path: &str) {
        tracing::info!(path, "page view");
    }
}
