use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::models::{ExtractedMessage, Status};
use crate::provider::ProviderAdapter;
use crate::terminal::ExtractionError;

use super::{PaneSource, TmuxPane};

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Capture failed: {0}")]
    Capture(#[from] anyhow::Error),

    #[error("Response not yet available: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Pairs a pane with the provider running in it.
///
/// Each call captures afresh; nothing is remembered between polls.
pub struct PaneMonitor<S: PaneSource = TmuxPane> {
    source: S,
    adapter: ProviderAdapter,
}

impl<S: PaneSource> PaneMonitor<S> {
    pub fn with_source(source: S, adapter: ProviderAdapter) -> Self {
        Self { source, adapter }
    }

    pub async fn status(&self, tail_lines: Option<usize>) -> Result<Status, MonitorError> {
        let capture = self.source.capture(tail_lines).await?;
        let status = self.adapter.get_status(&capture, tail_lines);
        debug!(%status, tail_lines, "status: polled");
        Ok(status)
    }

    pub async fn message(&self) -> Result<ExtractedMessage, MonitorError> {
        let capture = self.source.capture(None).await?;
        Ok(self.adapter.extract_message(&capture)?)
    }

    /// Poll until the status is one of `targets`.
    ///
    /// Returns `Ok(None)` when `timeout` elapses first.
    pub async fn wait_for(
        &self,
        targets: &[Status],
        interval: Duration,
        timeout: Duration,
        tail_lines: Option<usize>,
    ) -> Result<Option<Status>, MonitorError> {
        let deadline = Instant::now() + timeout;
        let mut previous = None;

        loop {
            let status = self.status(tail_lines).await?;
            if previous != Some(status) {
                info!(%status, "wait_for: status changed");
                previous = Some(status);
            }
            if targets.contains(&status) {
                return Ok(Some(status));
            }
            if Instant::now() + interval > deadline {
                return Ok(None);
            }
            sleep(interval).await;
        }
    }
}
