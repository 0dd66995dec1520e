//! Status detection and response extraction for AI coding CLIs running in
//! tmux panes.
//!
//! Captures are matched with escape-tolerant patterns so that colour codes
//! and cursor sequences never hide a prompt or marker. Boundaries are found
//! on the raw text and only the selected span is cleaned up.

pub mod config;
pub mod models;
pub mod patterns;
pub mod provider;
pub mod session;
pub mod terminal;

pub use models::{ExtractedMessage, Status};
pub use provider::{ProviderAdapter, ProviderKind};
