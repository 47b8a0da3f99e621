//! Interval-based job scheduler.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};

use super::Job;

/// Runs registered jobs on their configured intervals until shut down.
pub struct JobScheduler {
    jobs: Vec<Arc<dyn Job>>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl JobScheduler {
    pub fn new() -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            jobs: Vec::new(),
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn register(&mut self, job: Arc<dyn Job>) {
        info!(job = job.name(), "Registered background job");
        self.jobs.push(job);
    }

    /// Spawns one task per registered job. Each task runs the job on its
    /// interval until the shutdown signal fires.
    pub fn start(&self) {
        for job in &self.jobs {
            let job = Arc::clone(job);
            let mut shutdown_rx = self.shutdown_rx.clone();

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(job.frequency().as_duration());
                // The first tick completes immediately; skip it so jobs do not
                // all fire at startup.
                interval.tick().await;

                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            if let Err(e) = job.run().await {
                                error!(job = job.name(), error = %e, "Background job failed");
                            }
                        }
                        _ = shutdown_rx.changed() => {
                            info!(job = job.name(), "Background job stopping");
                            break;
                        }
                    }
                }
            });
        }
    }

    /// Signals all job tasks to stop after their current run.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

impl Default for JobScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobFrequency;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingJob {
        runs: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Job for CountingJob {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn frequency(&self) -> JobFrequency {
            JobFrequency::Minutes(1)
        }

        async fn run(&self) -> anyhow::Result<()> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_shutdown_stops_jobs_before_first_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut scheduler = JobScheduler::new();
        scheduler.register(Arc::new(CountingJob {
            runs: Arc::clone(&runs),
        }));
        scheduler.start();
        scheduler.shutdown();

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
