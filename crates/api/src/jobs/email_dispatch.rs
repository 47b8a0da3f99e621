//! Scheduled-email dispatch job.
//!
//! Finds scheduled emails whose send time has passed, delivers them through
//! the email service, and marks them sent.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use persistence::repositories::ScheduledEmailRepository;
use persistence::Store;

use super::{Job, JobFrequency};
use crate::services::{EmailMessage, EmailService};

pub struct EmailDispatchJob {
    emails: ScheduledEmailRepository,
    service: EmailService,
    frequency: JobFrequency,
}

impl EmailDispatchJob {
    pub fn new(store: Store, service: EmailService, every_minutes: u64) -> Self {
        Self {
            emails: ScheduledEmailRepository::new(store),
            service,
            frequency: JobFrequency::Minutes(every_minutes),
        }
    }
}

#[async_trait]
impl Job for EmailDispatchJob {
    fn name(&self) -> &'static str {
        "email_dispatch"
    }

    fn frequency(&self) -> JobFrequency {
        self.frequency
    }

    async fn run(&self) -> anyhow::Result<()> {
        let now = Utc::now();
        let due = self.emails.list_due(now).await?;

        if due.is_empty() {
            return Ok(());
        }

        info!(count = due.len(), "Dispatching due scheduled emails");

        for email in due {
            let message = EmailMessage {
                to: email.recipient.clone(),
                subject: email.subject.clone(),
                body: email.body.clone(),
            };

            match self.service.send(&message).await {
                Ok(()) => {
                    self.emails.mark_sent(email.id, Utc::now()).await?;
                }
                Err(e) => {
                    // Leave the email scheduled; the next run retries it.
                    warn!(email_id = %email.id, error = %e, "Failed to send scheduled email");
                }
            }
        }

        Ok(())
    }
}
