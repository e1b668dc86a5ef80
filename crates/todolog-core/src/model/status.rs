use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a [`TodoItem`](super::TodoItem)
///
/// Items start as `Todo`. Any status may move to any other; only the
/// list-deletion guard cares about which one an item holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// Returned when text is not one of the three wire values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status {0:?}: expected TODO, IN_PROGRESS or DONE")]
pub struct ParseStatusError(pub String);

impl Status {
    /// Every status, in lifecycle order
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Wire/storage value (`TODO`, `IN_PROGRESS`, `DONE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
        }
    }

    /// Human-facing label (`TODO`, `IN PROGRESS`, `DONE`)
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN PROGRESS",
            Status::Done => "DONE",
        }
    }

    /// Whether this status still blocks deletion of the owning list
    pub fn is_open(&self) -> bool {
        !matches!(self, Status::Done)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = ParseStatusError;

    /// Exact match on the wire values; no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(Status::Todo),
            "IN_PROGRESS" => Ok(Status::InProgress),
            "DONE" => Ok(Status::Done),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_todo() {
        assert_eq!(Status::default(), Status::Todo);
    }

    #[test]
    fn test_parse_wire_values() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_parse_rejects_labels_and_case_variants() {
        assert!("IN PROGRESS".parse::<Status>().is_err());
        assert!("done".parse::<Status>().is_err());
        assert!(" TODO".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn test_label_differs_only_for_in_progress() {
        assert_eq!(Status::InProgress.label(), "IN PROGRESS");
        assert_eq!(Status::Todo.label(), Status::Todo.as_str());
        assert_eq!(Status::Done.label(), Status::Done.as_str());
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }
}
