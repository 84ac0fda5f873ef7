//! Todo Errors
//!
//! The only failure is addressing a record that is not in the list.

use serde::{Deserialize, Serialize};

/// Result type for list operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoError {
    NotFound(String),
}

impl TodoError {
    pub fn no_id(id: u32) -> Self {
        TodoError::NotFound(format!("todo #{}", id))
    }

    pub fn no_position(index: usize, len: usize) -> Self {
        TodoError::NotFound(format!("position {} (list has {})", index, len))
    }
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for TodoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(TodoError::no_id(7).to_string(), "Not found: todo #7");
        assert_eq!(
            TodoError::no_position(3, 2).to_string(),
            "Not found: position 3 (list has 2)"
        );
    }
}
