//! Outgoing email delivery.
//!
//! The only implemented provider is `console`, which logs the message instead
//! of delivering it. The provider switch is the seam for a real SMTP or API
//! provider later.

use thiserror::Error;

use crate::config::EmailConfig;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Email sending is disabled")]
    Disabled,

    #[error("Unknown email provider: {0}")]
    UnknownProvider(String),
}

/// A rendered outgoing message.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Email delivery service.
#[derive(Debug, Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Sends a message through the configured provider.
    pub async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        if !self.config.enabled {
            return Err(EmailError::Disabled);
        }

        match self.config.provider.as_str() {
            "console" => {
                tracing::info!(
                    to = %message.to,
                    subject = %message.subject,
                    from = %format!("{} <{}>", self.config.sender_name, self.config.sender_email),
                    "Email dispatched (console provider)"
                );
                tracing::debug!(body = %message.body, "Email body");
                Ok(())
            }
            other => Err(EmailError::UnknownProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(enabled: bool, provider: &str) -> EmailConfig {
        EmailConfig {
            enabled,
            provider: provider.to_string(),
            sender_email: "test@example.com".to_string(),
            sender_name: "Test".to_string(),
        }
    }

    fn message() -> EmailMessage {
        EmailMessage {
            to: "customer@example.com".to_string(),
            subject: "Booking confirmed".to_string(),
            body: "Your booking is confirmed.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_console_provider_sends() {
        let service = EmailService::new(test_config(true, "console"));
        assert!(service.send(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn test_disabled_service_errors() {
        let service = EmailService::new(test_config(false, "console"));
        assert!(matches!(
            service.send(&message()).await,
            Err(EmailError::Disabled)
        ));
    }

    #[tokio::test]
    async fn test_unknown_provider_errors() {
        let service = EmailService::new(test_config(true, "smtp"));
        assert!(matches!(
            service.send(&message()).await,
            Err(EmailError::UnknownProvider(_))
        ));
    }
}
