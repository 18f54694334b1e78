//! Todo Errors
//!
//! Failures of the state transitions. None of these reach the user;
//! the store helpers log them and leave the state untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("task text is blank")]
    BlankText,

    #[error("task index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(TodoError::BlankText.to_string(), "task text is blank");
        assert_eq!(
            TodoError::IndexOutOfRange { index: 3, len: 1 }.to_string(),
            "task index 3 out of range (len 1)"
        );
    }
}
