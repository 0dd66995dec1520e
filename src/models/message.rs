use serde::{Deserialize, Serialize};

/// The newest assistant response found in a capture.
///
/// `start_index` and `end_index` are byte offsets into the capture as it was
/// received, escape sequences included. `text` is that range with escapes and
/// control characters removed and surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMessage {
    pub text: String,
    pub start_index: usize,
    pub end_index: usize,
}

impl ExtractedMessage {
    /// The raw slice of `capture` this message was taken from.
    ///
    /// Only meaningful for the capture the message was extracted from.
    pub fn raw<'a>(&self, capture: &'a str) -> Option<&'a str> {
        capture.get(self.start_index..self.end_index)
    }
}
