use validator::Validate;

use super::FieldErrors;
use crate::models::CustomerRequest;

const PHONE_DIGITS: usize = 11;

/// Mask typed input as `(DD) NNNNN-NNNN`, dropping non-digits and anything
/// past the eleventh digit. Partial input is masked progressively.
pub fn format_phone(value: &str) -> String {
    let digits: String = value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect();

    let ddd = &digits[..digits.len().min(2)];
    let first = digits.get(2..digits.len().min(7)).unwrap_or("");
    let last = digits.get(7..).unwrap_or("");

    let mut formatted = String::new();
    if !ddd.is_empty() {
        formatted.push('(');
        formatted.push_str(ddd);
    }
    if digits.len() >= 2 {
        formatted.push(')');
    }
    if !first.is_empty() {
        formatted.push(' ');
        formatted.push_str(first);
    }
    if !last.is_empty() {
        formatted.push('-');
        formatted.push_str(last);
    }
    formatted
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Email,
    Phone,
}

impl CustomerField {
    pub const ALL: [CustomerField; 3] = [
        CustomerField::Name,
        CustomerField::Email,
        CustomerField::Phone,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CustomerField::Name => "name",
            CustomerField::Email => "email",
            CustomerField::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerField::Name => "Name",
            CustomerField::Email => "Email",
            CustomerField::Phone => "Phone (11) 99999-9999",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerForm {
    draft: CustomerRequest,
    errors: FieldErrors,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CustomerRequest {
        &self.draft
    }

    /// Replace a field and drop its pending error. Phone input is masked.
    pub fn set(&mut self, field: CustomerField, value: &str) {
        match field {
            CustomerField::Name => self.draft.name = value.to_string(),
            CustomerField::Email => self.draft.email = value.to_string(),
            CustomerField::Phone => self.draft.phone = format_phone(value),
        }
        self.errors.clear(field.key());
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: CustomerField) -> Option<&str> {
        self.errors.get(field.key())
    }

    pub fn submit(&mut self) -> Result<CustomerRequest, FieldErrors> {
        if let Err(e) = self.draft.validate() {
            let mut errors = FieldErrors::default();
            errors.extend_from(&e);
            tracing::debug!("Customer form rejected: {:?}", errors);
            self.errors = errors.clone();
            return Err(errors);
        }

        let request = std::mem::take(&mut self.draft);
        self.errors = FieldErrors::default();
        Ok(request)
    }
}
