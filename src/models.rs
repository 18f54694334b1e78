//! Frontend Models
//!
//! Data structures held in the widget's in-memory state.

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Text as typed by the user (never blank once stored)
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_open() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task { text: "Walk dog".to_string(), completed: true };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Walk dog", "completed": true }));
    }
}
