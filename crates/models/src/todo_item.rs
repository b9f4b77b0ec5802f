use crate::validation::{FieldErrors, RequiredId, RequiredText};
use serde::{Deserialize, Serialize};

/// A single todo entry. The id is chosen by the caller and never changes once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl TodoItem {
    pub const TITLE_MAX_LENGTH: usize = 255;
    pub const DESCRIPTION_MAX_LENGTH: usize = 1000;

    pub const ID: RequiredId = RequiredId { field: "id" };
    pub const TITLE: RequiredText = RequiredText {
        field: "title",
        max_length: Self::TITLE_MAX_LENGTH,
    };
    pub const DESCRIPTION: RequiredText = RequiredText {
        field: "description",
        max_length: Self::DESCRIPTION_MAX_LENGTH,
    };

    /// Builds an item from possibly-missing fields, collecting every rule violation
    pub fn validated(
        id: Option<i32>,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let id = Self::ID.check(id, &mut errors);
        let title = Self::TITLE.check(title, &mut errors);
        let description = Self::DESCRIPTION.check(description, &mut errors);

        match (id, title, description) {
            (Some(id), Some(title), Some(description)) if errors.is_empty() => Ok(Self {
                id,
                title,
                description,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_accepts_complete_item() {
        let item = TodoItem::validated(
            Some(1),
            Some("Buy milk".to_string()),
            Some("2%".to_string()),
        )
        .unwrap();

        assert_eq!(
            item,
            TodoItem {
                id: 1,
                title: "Buy milk".to_string(),
                description: "2%".to_string(),
            }
        );
    }

    #[test]
    fn test_validated_reports_every_invalid_field() {
        let errors = TodoItem::validated(
            None,
            Some("x".repeat(TodoItem::TITLE_MAX_LENGTH + 1)),
            None,
        )
        .unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), ["description", "id", "title"]);
    }

    #[test]
    fn test_validated_description_limit() {
        let at_limit = "d".repeat(TodoItem::DESCRIPTION_MAX_LENGTH);
        assert!(TodoItem::validated(Some(3), Some("t".to_string()), Some(at_limit)).is_ok());

        let over_limit = "d".repeat(TodoItem::DESCRIPTION_MAX_LENGTH + 1);
        let errors =
            TodoItem::validated(Some(3), Some("t".to_string()), Some(over_limit)).unwrap_err();
        assert!(errors.contains("description"));
        assert!(!errors.contains("title"));
    }
}
