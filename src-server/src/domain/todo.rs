//! Todo Entity
//!
//! A single to-do record plus the two request shapes that produce or modify it.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A to-do item as persisted and listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque identifier chosen by the creator
    pub id: String,
    /// Display text
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }
}

impl Entity for Todo {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Create request body
///
/// Clients normally send the full item. A missing `id` gets a random UUID.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    pub fn into_todo(self) -> Todo {
        Todo {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            text: self.text,
            completed: self.completed,
        }
    }
}

/// Partial update body: only the fields present are applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Shallow merge onto `todo`
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(id) = &self.id {
            todo.id = id.clone();
        }
        if let Some(text) = &self.text {
            todo.text = text.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.text.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new("1", "Buy milk");
        assert_eq!(todo.id(), "1");
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_new_todo_keeps_client_id() {
        let body: NewTodo =
            serde_json::from_str(r#"{"id":"42","text":"Call mom","completed":true}"#).unwrap();
        let todo = body.into_todo();
        assert_eq!(todo, Todo { id: "42".into(), text: "Call mom".into(), completed: true });
    }

    #[test]
    fn test_new_todo_without_id_gets_uuid() {
        let body: NewTodo = serde_json::from_str(r#"{"text":"No id"}"#).unwrap();
        let todo = body.into_todo();
        assert!(uuid::Uuid::parse_str(&todo.id).is_ok());
        assert!(!todo.completed);
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut todo = Todo::new("1", "Buy milk");
        let patch: TodoPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        patch.apply(&mut todo);
        assert_eq!(todo.id, "1");
        assert_eq!(todo.text, "Buy milk");
        assert!(todo.completed);
    }

    #[test]
    fn test_patch_echo_omits_absent_fields() {
        let patch = TodoPatch { text: Some("Edited".into()), ..Default::default() };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"text":"Edited"}"#);
        assert!(!patch.is_empty());
        assert!(TodoPatch::default().is_empty());
    }
}
