//! UI Components
//!
//! Leptos components rendered by the root container.

mod todo_form;
mod todo_row;

pub use todo_form::TodoForm;
pub use todo_row::TodoRow;
