//! Background jobs.
//!
//! Jobs implement the [`Job`] trait and run on a fixed interval under the
//! [`scheduler::JobScheduler`].

pub mod email_dispatch;
pub mod scheduler;

use async_trait::async_trait;

/// How often a job runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFrequency {
    Minutes(u64),
    Hours(u64),
}

impl JobFrequency {
    pub fn as_duration(&self) -> std::time::Duration {
        match self {
            JobFrequency::Minutes(m) => std::time::Duration::from_secs(m * 60),
            JobFrequency::Hours(h) => std::time::Duration::from_secs(h * 3600),
        }
    }
}

/// A unit of recurring background work.
#[async_trait]
pub trait Job: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Interval between runs.
    fn frequency(&self) -> JobFrequency;

    /// Executes one run of the job.
    async fn run(&self) -> anyhow::Result<()>;
}
