//! Wire types of the remote kanban todo service.
//!
//! # Design
//! `Todo` mirrors the remote service's record but is defined independently
//! from the mock-server crate; integration tests catch schema drift. The
//! client only serializes these values into request bodies — it never
//! validates them and never decodes response bodies back into them.

use serde::{Deserialize, Serialize};

/// Lifecycle column of a todo on the kanban board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TodoStatus {
    Todo,
    Doing,
    Done,
}

/// A todo item as the remote service defines it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&TodoStatus::Todo).unwrap(), "\"TODO\"");
        assert_eq!(serde_json::to_string(&TodoStatus::Doing).unwrap(), "\"DOING\"");
        assert_eq!(serde_json::to_string(&TodoStatus::Done).unwrap(), "\"DONE\"");
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 3,
            title: "Water plants".to_string(),
            description: "Only the ferns".to_string(),
            status: TodoStatus::Doing,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
