use serde::Serialize;
use std::collections::BTreeMap;

/// Validation failures keyed by field name, serialized as `{"field": ["message", ...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field, keeping earlier messages for it
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// A required integer key; zero is treated the same as absent
#[derive(Debug, Clone, Copy)]
pub struct RequiredId {
    pub field: &'static str,
}

impl RequiredId {
    pub fn check(&self, value: Option<i32>, errors: &mut FieldErrors) -> Option<i32> {
        match value {
            Some(id) if id != 0 => Some(id),
            _ => {
                errors.add(self.field, required_message(self.field));
                None
            }
        }
    }
}

/// A required text field with an upper bound on its length in characters
#[derive(Debug, Clone, Copy)]
pub struct RequiredText {
    pub field: &'static str,
    pub max_length: usize,
}

impl RequiredText {
    /// Returns the value untouched when it passes, recording a message otherwise
    pub fn check(&self, value: Option<String>, errors: &mut FieldErrors) -> Option<String> {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            errors.add(self.field, required_message(self.field));
            return None;
        };

        if value.chars().count() > self.max_length {
            errors.add(
                self.field,
                format!(
                    "The field {} must be a string with a maximum length of {}.",
                    self.field, self.max_length
                ),
            );
            return None;
        }

        Some(value)
    }
}

fn required_message(field: &str) -> String {
    format!("The {field} field is required.")
}
