use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Something that can hand back the current text of an agent's pane.
#[async_trait]
pub trait PaneSource: Send + Sync {
    /// Capture the pane with escape sequences intact. `tail_lines` limits the
    /// capture to the last N lines of history.
    async fn capture(&self, tail_lines: Option<usize>) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneTarget {
    pub session_name: String,
    pub window_name: String,
}

impl PaneTarget {
    pub fn new(session_name: impl Into<String>, window_name: impl Into<String>) -> Self {
        Self {
            session_name: session_name.into(),
            window_name: window_name.into(),
        }
    }

    /// Parse `session:window`; a bare session name targets its active window.
    pub fn parse(target: &str) -> Self {
        match target.split_once(':') {
            Some((session, window)) => Self::new(session, window),
            None => Self::new(target, ""),
        }
    }

    pub fn tmux_target(&self) -> String {
        if self.window_name.is_empty() {
            self.session_name.clone()
        } else {
            format!("{}:{}", self.session_name, self.window_name)
        }
    }
}

impl std::fmt::Display for PaneTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tmux_target())
    }
}

pub struct TmuxPane {
    target: PaneTarget,
}

impl TmuxPane {
    pub fn new(target: PaneTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &PaneTarget {
        &self.target
    }

    pub async fn session_exists(&self) -> bool {
        Command::new("tmux")
            .args(["has-session", "-t", &self.target.session_name])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn capture_args(&self, tail_lines: Option<usize>) -> Vec<String> {
        let start = match tail_lines {
            Some(n) => format!("-{n}"),
            None => "-".to_string(),
        };
        vec![
            "capture-pane".to_string(),
            "-e".to_string(),
            "-p".to_string(),
            "-t".to_string(),
            self.target.tmux_target(),
            "-S".to_string(),
            start,
        ]
    }
}

#[async_trait]
impl PaneSource for TmuxPane {
    async fn capture(&self, tail_lines: Option<usize>) -> Result<String> {
        let output = Command::new("tmux")
            .args(self.capture_args(tail_lines))
            .output()
            .await
            .with_context(|| format!("Failed to capture pane {}", self.target))?;

        if !output.status.success() {
            bail!(
                "tmux capture-pane failed for {}: {}",
                self.target,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_target_parses_session_and_window() {
        let target = PaneTarget::parse("cao-1234:developer-0");
        assert_eq!(target.session_name, "cao-1234");
        assert_eq!(target.window_name, "developer-0");
        assert_eq!(target.tmux_target(), "cao-1234:developer-0");
    }

    #[test]
    fn pane_target_without_window_targets_session() {
        let target = PaneTarget::parse("cao-1234");
        assert_eq!(target.window_name, "");
        assert_eq!(target.to_string(), "cao-1234");
    }

    #[test]
    fn capture_args_keep_escapes_and_full_history() {
        let pane = TmuxPane::new(PaneTarget::new("s", "w"));
        let args = pane.capture_args(None);
        assert_eq!(args, ["capture-pane", "-e", "-p", "-t", "s:w", "-S", "-"]);
    }

    #[test]
    fn capture_args_limit_tail_lines() {
        let pane = TmuxPane::new(PaneTarget::new("s", "w"));
        let args = pane.capture_args(Some(50));
        assert_eq!(args.last().map(String::as_str), Some("-50"));
        assert_eq!(pane.target().session_name, "s");
    }
}
