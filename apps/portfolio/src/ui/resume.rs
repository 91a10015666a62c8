use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::content::ResourceSource;

pub const RESUME_PATH: &str = "./assets/kalash-kankaria-resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Kalash-Kankaria-Resume.pdf";
pub const RESUME_UNAVAILABLE_MESSAGE: &str =
    "Resume will be available soon! Please contact me directly.";

/// How long the "not available" notification stays on screen.
pub const NOTIFICATION_DISMISS_AFTER: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub dismiss_after: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResumeOutcome {
    Download { href: String, filename: String },
    Unavailable(Notification),
}

/// Checks whether the resume asset exists before offering it for download.
/// Only the status is requested, bounded by `timeout`; a check that runs out
/// of time counts as unavailable.
#[derive(Clone)]
pub struct ResumeLocator {
    source: Arc<dyn ResourceSource>,
    timeout: Duration,
}

impl ResumeLocator {
    pub fn new(source: Arc<dyn ResourceSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub async fn probe(&self) -> ResumeOutcome {
        let status = match tokio::time::timeout(self.timeout, self.source.status(RESUME_PATH)).await
        {
            Ok(status) => status,
            Err(_) => {
                warn!(
                    "Resume check timed out after {}ms",
                    self.timeout.as_millis()
                );
                return unavailable();
            }
        };
        match status {
            Ok(status) if (200..300).contains(&status) => {
                info!("Resume found, offering download");
                ResumeOutcome::Download {
                    href: RESUME_PATH.to_string(),
                    filename: RESUME_DOWNLOAD_NAME.to_string(),
                }
            }
            Ok(status) => {
                info!("Resume not available (status {status})");
                unavailable()
            }
            Err(e) => {
                warn!("Resume probe failed: {e}");
                unavailable()
            }
        }
    }
}

fn unavailable() -> ResumeOutcome {
    ResumeOutcome::Unavailable(Notification {
        message: RESUME_UNAVAILABLE_MESSAGE.to_string(),
        dismiss_after: NOTIFICATION_DISMISS_AFTER,
    })
}
