use crate::domain::email::Email;
use crate::domain::ports::{EmailSenderRef, SecurityCodeGeneratorRef};
use crate::error::Result;

/// Body of the message sent to newly registered addresses.
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

/// Handles signup and one-time login code delivery.
///
/// Codes are only issued here; checking a submitted code is not supported.
pub struct AccountGateway {
    email: EmailSenderRef,
    codes: SecurityCodeGeneratorRef,
}

impl AccountGateway {
    pub fn new(email: EmailSenderRef, codes: SecurityCodeGeneratorRef) -> Self {
        Self { email, codes }
    }

    /// Registers `email`, returning `Ok(false)` without side effects when the
    /// address is malformed. Delivery failures are returned as errors.
    pub async fn sign_up(&self, email: &str) -> Result<bool> {
        let Ok(email) = Email::parse(email) else {
            return Ok(false);
        };
        self.email.send(email.as_str(), WELCOME_MESSAGE).await?;
        Ok(true)
    }

    /// Sends a freshly generated code to `email`, the body being the code's decimal text.
    pub async fn login(&self, email: &str) -> Result<()> {
        let code = self.codes.generate_code()?;
        self.email.send(email, &code.to_string()).await
    }
}
