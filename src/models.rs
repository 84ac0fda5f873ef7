//! Frontend Models
//!
//! Data structures held by the todo list.

use serde::{Deserialize, Serialize};

/// One todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Assigned by the list on creation, never reused
    pub id: u32,
    pub text: String,
    pub location: String,
    pub is_done: bool,
}

/// A validated form submission, ready to be added to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    pub location: String,
}
