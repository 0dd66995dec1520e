use serde::{Deserialize, Serialize};

use crate::patterns::MarkerLiterals;

const PERMISSION_PROMPT: &str = "Allow this action?";
const EXIT_COMMAND: &str = "/exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    CopilotCli,
    GeminiCli,
    QCli,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::CopilotCli,
        ProviderKind::GeminiCli,
        ProviderKind::QCli,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::CopilotCli => "copilot_cli",
            ProviderKind::GeminiCli => "gemini_cli",
            ProviderKind::QCli => "q_cli",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::CopilotCli => "Copilot CLI",
            ProviderKind::GeminiCli => "Gemini CLI",
            ProviderKind::QCli => "Amazon Q CLI",
        }
    }

    /// Built-in literals for this CLI.
    pub fn default_config(&self) -> ProviderConfig {
        let (launch, error) = match self {
            ProviderKind::CopilotCli => (
                "copilot --agent {profile}",
                "Copilot is having trouble responding right now",
            ),
            ProviderKind::GeminiCli => (
                "gemini-cli chat --agent {profile}",
                "Gemini is having trouble responding right now",
            ),
            ProviderKind::QCli => (
                "q chat --agent {profile}",
                "Amazon Q is having trouble responding right now",
            ),
        };

        ProviderConfig {
            kind: *self,
            markers: MarkerLiterals {
                completion_marker: ">".to_string(),
                prompt_glyph: ">".to_string(),
                permission_prompt: PERMISSION_PROMPT.to_string(),
                error_indicators: vec![error.to_string()],
            },
            launch_command: launch.to_string(),
            exit_command: EXIT_COMMAND.to_string(),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "copilot" | "copilot_cli" => Ok(ProviderKind::CopilotCli),
            "gemini" | "gemini_cli" => Ok(ProviderKind::GeminiCli),
            "q" | "q_cli" => Ok(ProviderKind::QCli),
            _ => Err(format!("unknown provider: {s}")),
        }
    }
}

/// Everything that distinguishes one CLI from another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    #[serde(flatten)]
    pub markers: MarkerLiterals,
    /// Command used to start the CLI; `{profile}` is replaced by the agent
    /// profile name.
    pub launch_command: String,
    pub exit_command: String,
}

/// Partial replacement for a provider's built-in literals, read from config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_marker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_glyph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_indicators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_command: Option<String>,
}

impl ProviderConfig {
    pub fn with_override(mut self, over: &ProviderOverride) -> Self {
        if let Some(v) = &over.completion_marker {
            self.markers.completion_marker = v.clone();
        }
        if let Some(v) = &over.prompt_glyph {
            self.markers.prompt_glyph = v.clone();
        }
        if let Some(v) = &over.permission_prompt {
            self.markers.permission_prompt = v.clone();
        }
        if let Some(v) = &over.error_indicators {
            self.markers.error_indicators = v.clone();
        }
        if let Some(v) = &over.launch_command {
            self.launch_command = v.clone();
        }
        if let Some(v) = &over.exit_command {
            self.exit_command = v.clone();
        }
        self
    }

    pub fn launch_command_for(&self, profile: &str) -> String {
        self.launch_command.replace("{profile}", profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_parses_aliases() {
        assert_eq!("copilot".parse::<ProviderKind>().unwrap(), ProviderKind::CopilotCli);
        assert_eq!("gemini-cli".parse::<ProviderKind>().unwrap(), ProviderKind::GeminiCli);
        assert_eq!("Q_CLI".parse::<ProviderKind>().unwrap(), ProviderKind::QCli);
        assert!("claude".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn provider_kind_round_trips_name() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.as_str().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn defaults_share_grammar_and_differ_in_literals() {
        let configs: Vec<_> = ProviderKind::ALL.iter().map(|k| k.default_config()).collect();
        for config in &configs {
            assert_eq!(config.markers.completion_marker, ">");
            assert_eq!(config.markers.prompt_glyph, ">");
            assert_eq!(config.markers.permission_prompt, "Allow this action?");
            assert_eq!(config.exit_command, "/exit");
        }
        assert_ne!(configs[0].markers.error_indicators, configs[1].markers.error_indicators);
        assert_ne!(configs[1].launch_command, configs[2].launch_command);
    }

    #[test]
    fn launch_command_substitutes_profile() {
        assert_eq!(
            ProviderKind::CopilotCli.default_config().launch_command_for("developer"),
            "copilot --agent developer"
        );
        assert_eq!(
            ProviderKind::GeminiCli.default_config().launch_command_for("developer"),
            "gemini-cli chat --agent developer"
        );
        assert_eq!(
            ProviderKind::QCli.default_config().launch_command_for("reviewer"),
            "q chat --agent reviewer"
        );
    }

    #[test]
    fn override_replaces_only_given_fields() {
        let over = ProviderOverride {
            error_indicators: Some(vec!["rate limited".to_string()]),
            exit_command: Some("/quit".to_string()),
            ..Default::default()
        };
        let config = ProviderKind::CopilotCli.default_config().with_override(&over);
        assert_eq!(config.markers.error_indicators, vec!["rate limited".to_string()]);
        assert_eq!(config.exit_command, "/quit");
        assert_eq!(config.markers.completion_marker, ">");
        assert_eq!(config.launch_command, "copilot --agent {profile}");
    }

    #[test]
    fn provider_config_reads_flat_yaml() {
        let yaml = r#"
kind: q_cli
completion_marker: ">"
prompt_glyph: ">"
permission_prompt: "Allow this action?"
error_indicators:
  - "Amazon Q is having trouble responding right now"
launch_command: "q chat --agent {profile}"
exit_command: "/exit"
"#;
        let config: ProviderConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config, ProviderKind::QCli.default_config());
    }
}
