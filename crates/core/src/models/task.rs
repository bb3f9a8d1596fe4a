//! Reward task list models

use serde::{Deserialize, Serialize};

/// Task that is never attempted, whatever its completion state
pub const EXCLUDED_TASK: &str = "join_match_group";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskDescriptor {
    pub name: String,
    #[serde(default)]
    pub complete: bool,
}

/// `data` of `POST /point/task/list`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskList {
    #[serde(rename = "Tasks", default)]
    pub tasks: Vec<TaskDescriptor>,
    #[serde(rename = "Extra Tasks", default)]
    pub extra_tasks: Vec<TaskDescriptor>,
}

impl TaskList {
    /// Names of incomplete tasks across both lists, in server order
    pub fn pending_names(&self) -> Vec<String> {
        self.tasks
            .iter()
            .chain(self.extra_tasks.iter())
            .filter(|task| !task.complete && task.name != EXCLUDED_TASK)
            .map(|task| task.name.clone())
            .collect()
    }
}

/// Body of the task complete/claim endpoints
#[derive(Debug, Clone, Serialize)]
pub struct TaskRequest<'a> {
    pub uid: i64,
    #[serde(rename = "type")]
    pub task_type: &'a str,
}

/// Literal `data` of a successful task claim
pub const TASK_CLAIM_SUCCESS: &str = "success";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_names_filters() {
        let list: TaskList = serde_json::from_value(json!({
            "Tasks": [
                {"name": "follow_twitter", "complete": false},
                {"name": "join_match_group", "complete": false},
                {"name": "visit_site", "complete": true}
            ],
            "Extra Tasks": [
                {"name": "join_match_group", "complete": true},
                {"name": "invite_friend", "complete": false}
            ]
        }))
        .unwrap();

        assert_eq!(list.pending_names(), vec!["follow_twitter", "invite_friend"]);
    }

    #[test]
    fn test_extra_tasks_optional() {
        let list: TaskList =
            serde_json::from_value(json!({"Tasks": [{"name": "a", "complete": false}]})).unwrap();
        assert_eq!(list.pending_names(), vec!["a"]);
    }
}
