//! Entry Draft
//!
//! Field values of the entry form and the submit rule.

use crate::models::NewTodo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    /// Task description
    pub value: String,
    pub location: String,
}

impl EntryDraft {
    /// Turn the draft into a new todo.
    ///
    /// An empty description declines the submission and keeps both fields.
    /// An empty location is replaced by `placeholder`. On success both
    /// fields are cleared.
    pub fn submit(&mut self, placeholder: &str) -> Option<NewTodo> {
        if self.value.is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.value);
        let location = match std::mem::take(&mut self.location) {
            l if l.is_empty() => placeholder.to_string(),
            l => l,
        };
        Some(NewTodo { text, location })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo_list::TodoList;

    const PLACEHOLDER: &str = "Anywhere";

    fn draft(value: &str, location: &str) -> EntryDraft {
        EntryDraft {
            value: value.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_empty_location_uses_placeholder() {
        let mut d = draft("Buy milk", "");
        let todo = d.submit(PLACEHOLDER).unwrap();
        assert_eq!(todo.text, "Buy milk");
        assert_eq!(todo.location, PLACEHOLDER);
        assert_eq!(d, EntryDraft::default());

        let mut list = TodoList::new();
        list.add(todo.text, todo.location);
        let record = &list.records()[0];
        assert_eq!(record.text, "Buy milk");
        assert_eq!(record.location, PLACEHOLDER);
        assert!(!record.is_done);
    }

    #[test]
    fn test_location_is_kept() {
        let mut d = draft("Walk", "Park");
        let todo = d.submit(PLACEHOLDER).unwrap();
        assert_eq!(todo.location, "Park");
        assert!(d.location.is_empty());
    }

    #[test]
    fn test_empty_description_is_declined() {
        let mut d = draft("", "Kitchen");
        assert_eq!(d.submit(PLACEHOLDER), None);
        // Fields keep their contents
        assert_eq!(d, draft("", "Kitchen"));
    }

    #[test]
    fn test_only_non_empty_submissions_are_added() {
        let inputs = [("a", ""), ("", "x"), ("b", "y"), ("", ""), ("c", "z")];
        let mut list = TodoList::new();
        for (value, location) in inputs {
            let mut d = draft(value, location);
            if let Some(todo) = d.submit(PLACEHOLDER) {
                list.add(todo.text, todo.location);
            }
        }
        let texts: Vec<&str> = list.records().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(list.records()[0].location, PLACEHOLDER);
    }
}
