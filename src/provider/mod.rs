mod adapter;
mod kind;

pub use adapter::{ProviderAdapter, IDLE_PROMPT_PATTERN_LOG};
pub use kind::{ProviderConfig, ProviderKind, ProviderOverride};
