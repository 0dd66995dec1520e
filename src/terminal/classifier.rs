use tracing::debug;

use crate::models::Status;
use crate::patterns::{strip_escapes, tail_offset, PatternCatalog, PatternName};

/// Infers a [`Status`] from a single capture.
///
/// Classification never fails: whatever the capture holds, the caller gets a
/// status to act on. Indicators are checked from most to least urgent:
/// error, pending permission prompt, work in progress, finished response,
/// and finally idle.
#[derive(Debug, Clone, Copy)]
pub struct StatusClassifier<'a> {
    catalog: &'a PatternCatalog,
}

impl<'a> StatusClassifier<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    /// Classify `capture`, looking only at its last `tail_lines` lines when
    /// given.
    pub fn classify(&self, capture: &str, tail_lines: Option<usize>) -> Status {
        let region = match tail_lines {
            Some(n) => &capture[tail_offset(capture, n)..],
            None => capture,
        };

        if strip_escapes(region).trim().is_empty() {
            debug!("classify: empty capture, returning idle");
            return Status::Idle;
        }

        let trailing = self.catalog.trailing_prompt().find(region);
        let boundary = trailing.map_or(region.len(), |m| m.start());

        // Everything up to the last submitted prompt belongs to earlier turns.
        let cycle_start = self
            .catalog
            .lookup(PatternName::IdlePrompt)
            .find_iter(region)
            .take_while(|m| m.start() < boundary)
            .last()
            .map_or(0, |m| m.end().min(boundary));
        let cycle = &region[cycle_start..];

        if self
            .catalog
            .lookup(PatternName::ErrorIndicators)
            .is_match(cycle)
        {
            debug!(cycle_start, "classify: error indicator in current turn");
            return Status::Error;
        }

        if self
            .catalog
            .lookup(PatternName::PermissionPrompt)
            .is_match(cycle)
        {
            debug!(cycle_start, "classify: permission prompt pending");
            return Status::WaitingUserAnswer;
        }

        if trailing.is_none() {
            debug!("classify: no trailing idle prompt, returning processing");
            return Status::Processing;
        }

        if self
            .catalog
            .lookup(PatternName::CompletionMarker)
            .is_match(&region[cycle_start..boundary])
        {
            debug!(cycle_start, boundary, "classify: completion marker before prompt");
            return Status::Completed;
        }

        debug!("classify: idle prompt without new response");
        Status::Idle
    }
}
