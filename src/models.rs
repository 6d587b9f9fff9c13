//! Task Models
//!
//! Data structures matching the backend's wire format.

use serde::{Deserialize, Serialize};

/// Task entity as returned by the backend.
///
/// Optional fields default to empty/false so partially-filled rows still
/// deserialize and render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "dueDate")]
    pub due_date: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body for POST /tasks.
#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub description: &'a str,
    #[serde(rename = "dueDate")]
    pub due_date: &'a str,
    pub priority: &'a str,
    pub category: &'a str,
}

/// Full-replace body for PUT /tasks/{id}.
///
/// Also serves as the update modal's editable mirror.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub description: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub priority: String,
    pub category: String,
    pub completed: bool,
}

impl TaskUpdate {
    /// Seed the editable mirror from a task's current field values.
    pub fn from_task(task: &Task) -> Self {
        Self {
            description: task.description.clone(),
            due_date: task.due_date.clone(),
            priority: task.priority.clone(),
            category: task.category.clone(),
            completed: task.completed,
        }
    }
}

/// Response body of POST /tasks. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body of PUT /tasks/{id}: the updated task plus an optional
/// server message.
#[derive(Debug, Deserialize)]
pub struct UpdateResponse {
    #[serde(flatten)]
    pub task: Task,
    #[serde(default)]
    pub message: Option<String>,
}

/// Table cell fallback for empty optional fields.
pub fn display_or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Status column label.
pub fn status_label(completed: bool) -> &'static str {
    if completed {
        "Done"
    } else {
        "Pending"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body_wire_format() {
        let body = NewTask {
            description: "Buy milk",
            due_date: "2024-01-01",
            priority: "High",
            category: "",
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "description": "Buy milk",
                "dueDate": "2024-01-01",
                "priority": "High",
                "category": "",
            })
        );
    }

    #[test]
    fn test_sparse_task_gets_defaults() {
        let task: Task = serde_json::from_value(json!({
            "id": "7",
            "description": "Water plants",
        }))
        .unwrap();
        assert_eq!(task.due_date, "");
        assert_eq!(task.priority, "");
        assert_eq!(task.category, "");
        assert!(!task.completed);
    }

    #[test]
    fn test_mirror_seeds_from_sparse_task() {
        let task: Task = serde_json::from_value(json!({
            "id": "7",
            "description": "Water plants",
        }))
        .unwrap();
        let mirror = TaskUpdate::from_task(&task);
        assert_eq!(mirror.description, "Water plants");
        assert_eq!(mirror.due_date, "");
        assert_eq!(mirror.priority, "");
        assert_eq!(mirror.category, "");
        assert!(!mirror.completed);
    }

    #[test]
    fn test_update_body_wire_format() {
        let body = TaskUpdate {
            description: "Buy milk".to_string(),
            due_date: "2024-01-01".to_string(),
            priority: "Low".to_string(),
            category: "Errands".to_string(),
            completed: true,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "description": "Buy milk",
                "dueDate": "2024-01-01",
                "priority": "Low",
                "category": "Errands",
                "completed": true,
            })
        );
    }

    #[test]
    fn test_update_response_flatten() {
        let resp: UpdateResponse = serde_json::from_value(json!({
            "id": "42",
            "description": "Buy milk",
            "dueDate": "2024-01-01",
            "priority": "High",
            "category": "",
            "completed": false,
            "message": "ok",
        }))
        .unwrap();
        assert_eq!(resp.task.id, "42");
        assert_eq!(resp.message.as_deref(), Some("ok"));

        let bare: UpdateResponse = serde_json::from_value(json!({
            "id": "42",
            "description": "Buy milk",
        }))
        .unwrap();
        assert!(bare.message.is_none());
    }

    #[test]
    fn test_display_fallbacks() {
        assert_eq!(display_or_na(""), "N/A");
        assert_eq!(display_or_na("Work"), "Work");
        assert_eq!(status_label(true), "Done");
        assert_eq!(status_label(false), "Pending");
    }
}
