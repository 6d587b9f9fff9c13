//! Task List Reconciliation
//!
//! Pure helpers for keeping the rendered list in sync with server responses.

use crate::models::Task;

/// Drop the task with the given id, if present.
pub fn remove_by_id(tasks: &mut Vec<Task>, id: &str) {
    tasks.retain(|task| task.id != id);
}

/// Replace the entry matching the updated task's id with the server's copy.
/// Unknown ids are a no-op; the authoritative re-fetch covers those.
pub fn replace_by_id(tasks: &mut [Task], updated: &Task) {
    for task in tasks.iter_mut() {
        if task.id == updated.id {
            *task = updated.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, description: &str) -> Task {
        Task {
            id: id.to_string(),
            description: description.to_string(),
            due_date: String::new(),
            priority: String::new(),
            category: String::new(),
            completed: false,
        }
    }

    #[test]
    fn test_remove_by_id() {
        let mut tasks = vec![make_task("1", "a"), make_task("7", "b"), make_task("9", "c")];
        remove_by_id(&mut tasks, "7");
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.id != "7"));
    }

    #[test]
    fn test_remove_unknown_id_leaves_list_unchanged() {
        let mut tasks = vec![make_task("1", "a"), make_task("2", "b")];
        let before = tasks.clone();
        remove_by_id(&mut tasks, "7");
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_replace_by_id() {
        let mut tasks = vec![make_task("1", "a"), make_task("2", "b")];
        let mut updated = make_task("2", "b (done)");
        updated.completed = true;
        replace_by_id(&mut tasks, &updated);
        assert_eq!(tasks[0], make_task("1", "a"));
        assert_eq!(tasks[1], updated);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut tasks = vec![make_task("1", "a")];
        let before = tasks.clone();
        replace_by_id(&mut tasks, &make_task("9", "z"));
        assert_eq!(tasks, before);
    }
}
