use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of tasks returned by a listing.
pub const LIST_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Open,
    Done,
}

impl Status {
    /// Decodes the integer stored in the `status` column. Anything but 0 is done.
    pub fn from_code(code: i64) -> Self {
        if code == 0 {
            Status::Open
        } else {
            Status::Done
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Status::Open => 0,
            Status::Done => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::Done => "DONE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub status: Status,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} - [{}] {}", self.id, self.status, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::from_code(0), Status::Open);
        assert_eq!(Status::from_code(1), Status::Done);
        assert_eq!(Status::from_code(7), Status::Done);
        assert_eq!(Status::Done.code(), 1);
    }

    #[test]
    fn test_task_line() {
        let task = Task {
            id: 42,
            description: "Pet the cat".to_string(),
            status: Status::Open,
        };
        assert_eq!(task.to_string(), "#42 - [OPEN] Pet the cat");

        let done = Task {
            status: Status::Done,
            ..task
        };
        assert_eq!(done.to_string(), "#42 - [DONE] Pet the cat");
    }
}
