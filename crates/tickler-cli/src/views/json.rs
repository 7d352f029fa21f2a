//! JSON shapes printed by `--json`. Ids are strings and lists are wrapped in
//! a `tasks` object, matching what existing tickler clients parse.

use serde::Serialize;
use tickler_core::models::Task;

#[derive(Debug, Serialize, PartialEq)]
pub struct TaskJson<'a> {
    pub id: String,
    pub date: &'a str,
    pub title: &'a str,
    pub comment: &'a str,
    pub repeat: &'a str,
}

impl<'a> From<&'a Task> for TaskJson<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            id: task.id.to_string(),
            date: &task.date,
            title: &task.title,
            comment: &task.comment,
            repeat: &task.repeat,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskListJson<'a> {
    pub tasks: Vec<TaskJson<'a>>,
}

#[derive(Debug, Serialize)]
pub struct IdJson {
    pub id: String,
}

pub fn task(task: &Task) -> serde_json::Result<String> {
    serde_json::to_string(&TaskJson::from(task))
}

pub fn task_list(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string(&TaskListJson {
        tasks: tasks.iter().map(TaskJson::from).collect(),
    })
}

pub fn id(id: i64) -> serde_json::Result<String> {
    serde_json::to_string(&IdJson { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        Task {
            id: 7,
            date: "20240601".to_string(),
            title: "Water plants".to_string(),
            comment: String::new(),
            repeat: "d 3".to_string(),
        }
    }

    #[test]
    fn test_task_shape() {
        assert_eq!(
            task(&sample()).unwrap(),
            r#"{"id":"7","date":"20240601","title":"Water plants","comment":"","repeat":"d 3"}"#
        );
    }

    #[test]
    fn test_empty_list_is_wrapped() {
        assert_eq!(task_list(&[]).unwrap(), r#"{"tasks":[]}"#);
    }

    #[test]
    fn test_id_shape() {
        assert_eq!(id(12).unwrap(), r#"{"id":"12"}"#);
    }
}
