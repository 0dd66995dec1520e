use crate::models::{ExtractedMessage, Status};
use crate::patterns::{CatalogError, PatternCatalog};
use crate::terminal::{ExtractionError, ResponseExtractor, StatusClassifier};

use super::{ProviderConfig, ProviderKind};

/// Idle prompt as it appears in raw pipe-pane log files.
pub const IDLE_PROMPT_PATTERN_LOG: &str = r"\x1b\[38;5;13m>\s*\x1b\[39m";

/// A CLI provider bound to one agent profile.
///
/// All supported CLIs print the same output grammar, so a single adapter
/// type serves every [`ProviderKind`]; only the [`ProviderConfig`] differs.
#[derive(Debug, Clone)]
pub struct ProviderAdapter {
    config: ProviderConfig,
    catalog: PatternCatalog,
}

impl ProviderAdapter {
    pub fn new(config: ProviderConfig, profile: &str) -> Result<Self, CatalogError> {
        let catalog = PatternCatalog::new(&config.markers, profile)?;
        Ok(Self { config, catalog })
    }

    pub fn for_kind(kind: ProviderKind, profile: &str) -> Result<Self, CatalogError> {
        Self::new(kind.default_config(), profile)
    }

    pub fn kind(&self) -> ProviderKind {
        self.config.kind
    }

    pub fn profile(&self) -> &str {
        self.catalog.profile()
    }

    pub fn get_status(&self, capture: &str, tail_lines: Option<usize>) -> Status {
        StatusClassifier::new(&self.catalog).classify(capture, tail_lines)
    }

    pub fn extract_message(&self, capture: &str) -> Result<ExtractedMessage, ExtractionError> {
        ResponseExtractor::new(&self.catalog).extract(capture)
    }

    pub fn launch_command(&self) -> String {
        self.config.launch_command_for(self.profile())
    }

    pub fn exit_command(&self) -> &str {
        &self.config.exit_command
    }

    pub fn idle_pattern_for_log(&self) -> &'static str {
        IDLE_PROMPT_PATTERN_LOG
    }
}
