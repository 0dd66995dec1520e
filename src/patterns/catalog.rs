use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grammar::{blank, gap, literal};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Missing required literal: {0}")]
    MissingLiteral(&'static str),

    #[error("At least one error indicator is required")]
    NoErrorIndicators,

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Literal text a CLI prints around its responses.
///
/// Only these strings vary between providers; the structure they are
/// embedded in is fixed by [`PatternCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerLiterals {
    pub completion_marker: String,
    pub prompt_glyph: String,
    pub permission_prompt: String,
    pub error_indicators: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternName {
    CompletionMarker,
    IdlePrompt,
    PermissionPrompt,
    ErrorIndicators,
}

impl PatternName {
    pub const ALL: [PatternName; 4] = [
        PatternName::CompletionMarker,
        PatternName::IdlePrompt,
        PatternName::PermissionPrompt,
        PatternName::ErrorIndicators,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternName::CompletionMarker => "completion_marker",
            PatternName::IdlePrompt => "idle_prompt",
            PatternName::PermissionPrompt => "permission_prompt",
            PatternName::ErrorIndicators => "error_indicators",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl std::fmt::Display for PatternName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compiled matchers for one provider and agent profile.
///
/// Every matcher runs against the capture exactly as tmux produced it, escape
/// sequences included, so match offsets are offsets into the raw capture.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    profile: String,
    completion_marker: Regex,
    idle_prompt: Regex,
    trailing_prompt: Regex,
    permission_prompt: Regex,
    error_indicators: Regex,
}

impl PatternCatalog {
    pub fn new(literals: &MarkerLiterals, profile: &str) -> Result<Self, CatalogError> {
        let completion = require(&literals.completion_marker, "completion_marker")?;
        let glyph = require(&literals.prompt_glyph, "prompt_glyph")?;
        let permission = require(&literals.permission_prompt, "permission_prompt")?;
        let profile = require(profile, "agent_profile")?;

        let indicators: Vec<&str> = literals
            .error_indicators
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if indicators.is_empty() {
            return Err(CatalogError::NoErrorIndicators);
        }

        let gap = gap();
        let inline_blank = blank(false);
        let any_blank = blank(true);

        // [profile] 45% !>
        let idle = format!(
            "{}{inline_blank}(?:[0-9]+{gap}%{inline_blank})?(?:!{gap})?{}",
            literal(&format!("[{profile}]")),
            literal(glyph),
        );

        let completion_marker = Regex::new(&format!(
            "(?m)^{gap}{}{inline_blank}",
            literal(completion)
        ))?;
        let idle_prompt = Regex::new(&idle)?;
        let trailing_prompt = Regex::new(&format!("{idle}{any_blank}\\z"))?;

        // Allow this action? ... [y/n/t]: [profile]>
        let choice = r"[^\]\n]*";
        let permission_prompt = Regex::new(&format!(
            r"(?s){}.*?\[{choice}y{choice}/{choice}n{choice}/{choice}t{choice}\]{gap}:{any_blank}{idle}{any_blank}\z",
            literal(permission),
        ))?;

        let alternatives: Vec<String> = indicators.iter().map(|s| literal(s)).collect();
        let error_indicators = Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))?;

        Ok(Self {
            profile: profile.to_string(),
            completion_marker,
            idle_prompt,
            trailing_prompt,
            permission_prompt,
            error_indicators,
        })
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn lookup(&self, name: PatternName) -> &Regex {
        match name {
            PatternName::CompletionMarker => &self.completion_marker,
            PatternName::IdlePrompt => &self.idle_prompt,
            PatternName::PermissionPrompt => &self.permission_prompt,
            PatternName::ErrorIndicators => &self.error_indicators,
        }
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&Regex> {
        PatternName::from_name(name).map(|p| self.lookup(p))
    }

    /// Idle prompt followed only by whitespace and escapes up to the end.
    pub(crate) fn trailing_prompt(&self) -> &Regex {
        &self.trailing_prompt
    }
}

fn require<'a>(value: &'a str, name: &'static str) -> Result<&'a str, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CatalogError::MissingLiteral(name))
    } else {
        Ok(trimmed)
    }
}
