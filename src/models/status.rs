use serde::{Deserialize, Serialize};

/// Snapshot of what a CLI agent session is doing, inferred from one capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Processing,
    WaitingUserAnswer,
    Completed,
    Error,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Idle,
        Status::Processing,
        Status::WaitingUserAnswer,
        Status::Completed,
        Status::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Processing => "processing",
            Status::WaitingUserAnswer => "waiting_user_answer",
            Status::Completed => "completed",
            Status::Error => "error",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Idle => "○",
            Status::Processing => "◐",
            Status::WaitingUserAnswer => "?",
            Status::Completed => "●",
            Status::Error => "✗",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Status::Idle => "Waiting for input",
            Status::Processing => "Processing",
            Status::WaitingUserAnswer => "Waiting for permission",
            Status::Completed => "Response ready",
            Status::Error => "Error detected",
        }
    }

    /// A turn has ended and the caller should act rather than keep polling.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            Status::Completed | Status::WaitingUserAnswer | Status::Error
        )
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| format!("unknown status: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_default_is_idle() {
        assert_eq!(Status::default(), Status::Idle);
    }

    #[test]
    fn status_symbols_are_unique() {
        let symbols: Vec<_> = Status::ALL.iter().map(|s| s.symbol()).collect();
        let unique: std::collections::HashSet<_> = symbols.iter().collect();
        assert_eq!(symbols.len(), unique.len());
    }

    #[test]
    fn status_parses_its_own_name() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert_eq!(
            "Waiting-User-Answer".parse::<Status>().unwrap(),
            Status::WaitingUserAnswer
        );
        assert!("busy".parse::<Status>().is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&Status::WaitingUserAnswer).unwrap();
        assert_eq!(json, "\"waiting_user_answer\"");
    }

    #[test]
    fn only_turn_ending_statuses_are_settled() {
        assert!(!Status::Idle.is_settled());
        assert!(!Status::Processing.is_settled());
        assert!(Status::WaitingUserAnswer.is_settled());
        assert!(Status::Completed.is_settled());
        assert!(Status::Error.is_settled());
    }
}
