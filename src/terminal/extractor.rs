use thiserror::Error;
use tracing::debug;

use crate::models::ExtractedMessage;
use crate::patterns::{strip_escapes, PatternCatalog, PatternName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("No response found: no completion marker in capture")]
    MissingStartMarker,

    #[error("Incomplete response: no idle prompt after the last completion marker")]
    MissingEndMarker,

    #[error("Empty response: nothing between completion marker and idle prompt")]
    EmptyResponse,
}

/// Pulls the newest assistant response out of a capture.
///
/// Boundaries are located in the capture exactly as received. Escape
/// sequences have variable length, so stripping them first would shift every
/// offset after the first one removed; only the selected slice is stripped.
#[derive(Debug, Clone, Copy)]
pub struct ResponseExtractor<'a> {
    catalog: &'a PatternCatalog,
}

impl<'a> ResponseExtractor<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn extract(&self, capture: &str) -> Result<ExtractedMessage, ExtractionError> {
        let start_index = self
            .catalog
            .lookup(PatternName::CompletionMarker)
            .find_iter(capture)
            .last()
            .ok_or(ExtractionError::MissingStartMarker)?
            .end();

        let end_index = self
            .catalog
            .lookup(PatternName::IdlePrompt)
            .find_at(capture, start_index)
            .ok_or(ExtractionError::MissingEndMarker)?
            .start();

        debug!(start_index, end_index, "extract: response boundaries");

        if start_index == end_index {
            return Err(ExtractionError::EmptyResponse);
        }

        let text = strip_escapes(&capture[start_index..end_index])
            .trim()
            .to_string();
        if text.is_empty() {
            return Err(ExtractionError::EmptyResponse);
        }

        Ok(ExtractedMessage {
            text,
            start_index,
            end_index,
        })
    }
}
