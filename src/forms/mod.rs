//! Input forms
//!
//! Each form keeps a draft of its request, validates it on submit and keeps
//! one message per failing field until that field is edited again.

pub mod customer_form;
pub mod movie_form;
pub mod rental_form;

pub use customer_form::{CustomerForm, format_phone};
pub use movie_form::MovieForm;
pub use rental_form::RentalForm;

use std::collections::BTreeMap;
use std::fmt;

use validator::ValidationErrors;

/// Validation messages keyed by request field name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Record a message unless the field already has one
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge the first message of every failing field
    pub fn extend_from(&mut self, errors: &ValidationErrors) {
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                self.insert(&field.to_string(), message);
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// Parse a whole number typed into a numeric field; blank means 0
pub(crate) fn parse_whole<T: std::str::FromStr + Default>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(T::default());
    }
    trimmed.parse().ok()
}
