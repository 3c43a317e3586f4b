use validator::Validate;

use super::{FieldErrors, parse_whole};
use crate::models::{Customer, Employee, Movie, RentalRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RentalField {
    Customer,
    Movie,
    Employee,
}

impl RentalField {
    pub const ALL: [RentalField; 3] = [
        RentalField::Customer,
        RentalField::Movie,
        RentalField::Employee,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RentalField::Customer => "customer_id",
            RentalField::Movie => "movie_id",
            RentalField::Employee => "employee_id",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RentalField::Customer => "Customer",
            RentalField::Movie => "Movie",
            RentalField::Employee => "Employee",
        }
    }
}

/// Choice offered for a selection field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
}

pub fn customer_options(customers: &[Customer]) -> Vec<SelectOption> {
    customers
        .iter()
        .map(|c| SelectOption {
            id: c.id,
            label: format!("{} (#{})", c.name, c.id),
        })
        .collect()
}

pub fn movie_options(movies: &[Movie]) -> Vec<SelectOption> {
    movies
        .iter()
        .map(|m| SelectOption {
            id: m.id,
            label: format!("{} (#{})", m.title, m.id),
        })
        .collect()
}

pub fn employee_options(employees: &[Employee]) -> Vec<SelectOption> {
    employees
        .iter()
        .map(|e| SelectOption {
            id: e.id,
            label: format!("{} (#{})", e.name, e.id),
        })
        .collect()
}

/// Draft of a new rental plus the "return by id" box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RentalForm {
    draft: RentalRequest,
    return_id: i64,
    errors: FieldErrors,
}

impl RentalForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RentalRequest {
        &self.draft
    }

    pub fn select(&mut self, field: RentalField, id: i64) {
        match field {
            RentalField::Customer => self.draft.customer_id = id,
            RentalField::Movie => self.draft.movie_id = id,
            RentalField::Employee => self.draft.employee_id = id,
        }
        self.errors.clear(field.key());
    }

    /// Select from typed text; anything that is not an id clears the selection
    pub fn select_raw(&mut self, field: RentalField, raw: &str) {
        let id = parse_whole::<i64>(raw).unwrap_or(0).max(0);
        self.select(field, id);
    }

    /// Submit is only offered once customer and movie are picked
    pub fn can_submit(&self) -> bool {
        self.draft.customer_id > 0 && self.draft.movie_id > 0
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: RentalField) -> Option<&str> {
        self.errors.get(field.key())
    }

    pub fn submit(&mut self) -> Result<RentalRequest, FieldErrors> {
        if let Err(e) = self.draft.validate() {
            let mut errors = FieldErrors::default();
            errors.extend_from(&e);
            tracing::debug!("Rental form rejected: {:?}", errors);
            self.errors = errors.clone();
            return Err(errors);
        }

        let request = self.draft;
        self.draft = RentalRequest::default();
        self.errors = FieldErrors::default();
        Ok(request)
    }

    pub fn return_id(&self) -> i64 {
        self.return_id
    }

    /// Negative or malformed input leaves the box empty
    pub fn set_return_id(&mut self, raw: &str) {
        self.return_id = parse_whole::<i64>(raw).unwrap_or(0).max(0);
    }

    /// Take the rental id to return, emptying the box. Nothing when empty.
    pub fn take_return_id(&mut self) -> Option<i64> {
        match std::mem::take(&mut self.return_id) {
            0 => None,
            id => Some(id),
        }
    }
}
