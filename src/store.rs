//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Created once in the root component; not a global.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::WidgetConfig;
use crate::error::TodoResult;
use crate::models::{NewTodo, TodoRecord};
use crate::todo_list::TodoList;

#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All todos, in insertion order
    pub list: TodoList,
}

impl TodoState {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            list: TodoList::from_seed(&config.seed),
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Append a todo and return its id
pub fn store_add_todo(store: &TodoStore, todo: NewTodo) -> u32 {
    store.list().write().add(todo.text, todo.location)
}

pub fn store_mark_todo(store: &TodoStore, id: u32) -> TodoResult<()> {
    store.list().write().mark(id)
}

pub fn store_remove_todo(store: &TodoStore, id: u32) -> TodoResult<TodoRecord> {
    store.list().write().remove(id)
}

/// Records in display order (tracked)
pub fn store_records(store: &TodoStore) -> Vec<TodoRecord> {
    store.list().with(|list| list.records().to_vec())
}

/// (total, done) counts (tracked)
pub fn store_counts(store: &TodoStore) -> (usize, usize) {
    store.list().with(|list| (list.len(), list.done_count()))
}

/// JSON dump of the list for debug logs (untracked)
pub fn store_snapshot(store: &TodoStore) -> String {
    store
        .list()
        .with_untracked(|list| list.snapshot())
        .unwrap_or_else(|e| format!("<snapshot failed: {}>", e))
}
