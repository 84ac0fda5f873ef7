//! Todo List State
//!
//! Ordered, append-only list of records with mark and remove.
//! Records are addressed by id from the UI; positional variants address
//! the current position in the list.

use serde::{Deserialize, Serialize};

use crate::error::{TodoError, TodoResult};
use crate::models::TodoRecord;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoList {
    records: Vec<TodoRecord>,
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from (text, location) pairs, in order
    pub fn from_seed<'a, I>(seed: I) -> Self
    where
        I: IntoIterator<Item = &'a (String, String)>,
    {
        let mut list = Self::new();
        for (text, location) in seed {
            list.add(text.clone(), location.clone());
        }
        list
    }

    /// Append a new record and return its id
    pub fn add(&mut self, text: String, location: String) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(TodoRecord {
            id,
            text,
            location,
            is_done: false,
        });
        id
    }

    /// Mark a record done. Marking a done record again is a no-op.
    pub fn mark(&mut self, id: u32) -> TodoResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| TodoError::no_id(id))?;
        record.is_done = true;
        Ok(())
    }

    pub fn mark_at(&mut self, index: usize) -> TodoResult<()> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or_else(|| TodoError::no_position(index, len))?;
        record.is_done = true;
        Ok(())
    }

    /// Remove a record; later records shift down one position
    pub fn remove(&mut self, id: u32) -> TodoResult<TodoRecord> {
        let index = self.position_of(id).ok_or_else(|| TodoError::no_id(id))?;
        Ok(self.records.remove(index))
    }

    pub fn remove_at(&mut self, index: usize) -> TodoResult<TodoRecord> {
        if index >= self.records.len() {
            return Err(TodoError::no_position(index, self.records.len()));
        }
        Ok(self.records.remove(index))
    }

    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&TodoRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_done).count()
    }

    /// JSON dump of the records, for debug logging
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }
}
