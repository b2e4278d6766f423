//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Maximum task name length, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Completion state of a task.
///
/// Serialized on the wire as the integers `0` (incomplete) and `1`
/// (completed); any other integer is rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    Incomplete,
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Incomplete
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Incomplete),
            1 => Ok(Self::Completed),
            other => Err(format!("invalid task status: {other}")),
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Incomplete => 0,
            TaskStatus::Completed => 1,
        }
    }
}

/// A stored task
///
/// `id` and `created_at` are assigned by the store at creation and never
/// change afterwards. `updated_at` is bumped on every successful update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate for a new task. The store assigns id and timestamps, so a
/// draft cannot carry either.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    pub status: TaskStatus,
}

/// Candidate for updating an existing task. Only `name` and `status` are
/// writable; `id` selects the record.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskUpdate {
    pub id: u64,
    pub name: String,
    pub status: TaskStatus,
}

/// Validate a task name against the field-level rules.
pub fn validate_name(name: &str) -> crate::Result<()> {
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(Error::InvalidData(format!(
            "task name must be 1 to {MAX_NAME_LEN} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_valid_integers() {
        assert_eq!(TaskStatus::try_from(0), Ok(TaskStatus::Incomplete));
        assert_eq!(TaskStatus::try_from(1), Ok(TaskStatus::Completed));
    }

    #[test]
    fn test_status_rejects_unknown_integer() {
        assert!(TaskStatus::try_from(2).is_err());
    }

    #[test]
    fn test_status_serializes_as_integer() {
        let value = serde_json::to_value(TaskStatus::Completed).unwrap();
        assert_eq!(value, serde_json::json!(1));

        let status: TaskStatus = serde_json::from_value(serde_json::json!(0)).unwrap();
        assert_eq!(status, TaskStatus::Incomplete);
    }

    #[test]
    fn test_status_deserialization_rejects_out_of_range() {
        let result: Result<TaskStatus, _> = serde_json::from_value(serde_json::json!(2));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_name_accepts_bounds() {
        assert!(validate_name("buy milk").is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        assert!(matches!(validate_name(""), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_validate_name_rejects_too_long() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(validate_name(&name), Err(Error::InvalidData(_))));
    }
}
