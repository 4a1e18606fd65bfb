//! Task - An entry in the task tracker

use serde::{Deserialize, Serialize};

use super::record::{require_text, Record};
use crate::repository::record_repository::RepositoryError;

/// A task, keyed by its title
///
/// Stored as `{"title": "..."}`. Older task files hold bare strings; those
/// are read as titles too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaskRepr")]
pub struct Task {
    title: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TaskRepr {
    Bare(String),
    Full { title: String },
}

impl From<TaskRepr> for Task {
    fn from(repr: TaskRepr) -> Self {
        match repr {
            TaskRepr::Bare(title) | TaskRepr::Full { title } => Self { title },
        }
    }
}

impl Task {
    /// Create a new Task with a trimmed title
    pub fn new(title: impl AsRef<str>) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl core::fmt::Display for Task {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.title)
    }
}

/// Replacement title. `None` or blank keeps the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
}

impl Record for Task {
    type Patch = TaskPatch;

    const KIND: &'static str = "task";

    fn key(&self) -> &str {
        &self.title
    }

    fn validate(&self) -> Result<(), RepositoryError> {
        require_text("title", &self.title)
    }

    fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = patch.title.as_deref().map(str::trim) {
            if !title.is_empty() {
                self.title = title.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_title() {
        assert_eq!(Task::new("  buy milk\n").title(), "buy milk");
    }

    #[test]
    fn test_validate() {
        assert!(Task::new("buy milk").validate().is_ok());
        assert!(matches!(
            Task::new("   ").validate(),
            Err(RepositoryError::Validation { field: "title", .. })
        ));
    }

    #[test]
    fn test_apply() {
        let mut task = Task::new("buy milk");

        task.apply(&TaskPatch { title: None });
        assert_eq!(task.title(), "buy milk");

        task.apply(&TaskPatch {
            title: Some("  ".to_string()),
        });
        assert_eq!(task.title(), "buy milk");

        task.apply(&TaskPatch {
            title: Some(" buy oat milk ".to_string()),
        });
        assert_eq!(task.title(), "buy oat milk");
    }

    #[test]
    fn test_reads_bare_strings_and_objects() {
        let tasks: Vec<Task> =
            serde_json::from_str(r#"["write report", {"title": "call Anna"}]"#).unwrap();
        assert_eq!(tasks, vec![Task::new("write report"), Task::new("call Anna")]);
    }

    #[test]
    fn test_writes_object_form() {
        let json = serde_json::to_value(Task::new("write report")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "write report"}));
    }
}
