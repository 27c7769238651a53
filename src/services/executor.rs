use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

pub type JobFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Pluggable executor for the simulated processing job. Once submitted, a
/// job always runs to its terminal write; there is no cancellation, retry,
/// or backpressure.
pub trait JobExecutor: Send + Sync {
    fn submit(&self, job: JobFuture);
}

/// Production simulation: sleep for the configured delay, then process.
/// Stands in for a long-running backend job without a real backend.
pub struct DelayedExecutor {
    delay: Duration,
}

impl DelayedExecutor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl JobExecutor for DelayedExecutor {
    fn submit(&self, job: JobFuture) {
        let delay = self.delay;
        tokio::spawn(async move {
            debug!(delay_ms = delay.as_millis() as u64, "Job scheduled");
            sleep(delay).await;
            job.await;
        });
    }
}

/// Processes as soon as the runtime schedules the task. Used in tests where
/// waiting out the simulated delay would only slow things down.
pub struct ImmediateExecutor;

impl JobExecutor for ImmediateExecutor {
    fn submit(&self, job: JobFuture) {
        tokio::spawn(job);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn immediate_executor_runs_the_job() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        ImmediateExecutor.submit(Box::pin(async move {
            flag.store(true, Ordering::SeqCst);
        }));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn delayed_executor_waits_before_running() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        DelayedExecutor::new(Duration::from_millis(100)).submit(Box::pin(async move {
            flag.store(true, Ordering::SeqCst);
        }));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!ran.load(Ordering::SeqCst));
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(ran.load(Ordering::SeqCst));
    }
}
