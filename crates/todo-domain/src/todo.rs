use chrono::{DateTime, Utc};
use todo_core::{TodoError, TodoResult};
use uuid::Uuid;

pub type TodoId = Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub important: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Build an item from raw user input. The text is trimmed and must not
    /// be empty afterwards.
    pub fn new(raw_text: &str) -> TodoResult<Self> {
        let text = Self::normalize_text(raw_text)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            text,
            important: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Trim `raw` and reject it when nothing is left.
    pub fn normalize_text(raw: &str) -> TodoResult<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoError::Validation(
                "todo text must not be empty".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }

    pub fn update_text(&mut self, text: String) {
        self.text = text;
        self.updated_at = Utc::now();
    }

    pub fn toggle_important(&mut self) {
        self.important = !self.important;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_defaults_to_not_important() {
        let item = TodoItem::new("  Buy milk ").unwrap();
        assert_eq!(item.text, "Buy milk");
        assert!(!item.important);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_new_rejects_blank_text() {
        for raw in ["", " ", "\t\n", "   \r\n  "] {
            let err = TodoItem::new(raw).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {:?}", raw);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = TodoItem::new("a").unwrap();
        let b = TodoItem::new("a").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_important_twice_restores_flag() {
        let mut item = TodoItem::new("Task").unwrap();
        item.toggle_important();
        assert!(item.important);
        item.toggle_important();
        assert!(!item.important);
    }

    #[test]
    fn test_update_text_bumps_updated_at() {
        let mut item = TodoItem::new("Task").unwrap();
        let created = item.created_at;
        item.update_text("Task 2".to_string());
        assert_eq!(item.text, "Task 2");
        assert!(item.updated_at >= created);
        assert_eq!(item.created_at, created);
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(
            TodoItem::normalize_text("  fried  egg ").unwrap(),
            "fried  egg"
        );
    }
}
