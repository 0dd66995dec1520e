mod classifier;
mod extractor;

pub use classifier::StatusClassifier;
pub use extractor::{ExtractionError, ResponseExtractor};
