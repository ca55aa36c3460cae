use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification backend unavailable: {0}")]
    Unavailable(String),
}

/// Fire-and-forget alert delivery. The evaluator invokes this once per
/// alerting course per pass and ignores the outcome, so implementations may
/// fail freely without disturbing evaluation.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str, timeout_seconds: u64) -> Result<(), NotifyError>;
}

/// Default sink: alerts land in the log stream. Desktop pop-up delivery is a
/// platform concern wired in by the embedding application.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, message: &str, timeout_seconds: u64) -> Result<(), NotifyError> {
        info!(timeout_seconds, "{}: {}", title, message.replace('\n', " | "));
        Ok(())
    }
}

/// Inert sink for wiring paths where delivery does not matter.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _message: &str, _timeout_seconds: u64) -> Result<(), NotifyError> {
        Ok(())
    }
}
