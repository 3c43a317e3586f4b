use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::{Customer, Employee, Movie};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RentalStatus {
    Open,
    Returned,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Open => "OPEN",
            RentalStatus::Returned => "RETURNED",
        }
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rental as returned by `GET /api/rentals`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: i64,
    pub movie_id: i64,
    pub customer_id: i64,
    pub employee_id: i64,
    pub rental_date: String,
    pub return_date: Option<String>,
    pub status: RentalStatus,
}

/// Expanded rental returned by the create and return endpoints
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalDetails {
    pub id: i64,
    pub customer: Customer,
    pub movie: Movie,
    pub processed_by: Employee,
    pub status: RentalStatus,
    pub rental_date: String,
    pub return_date: Option<String>,
}

impl From<RentalDetails> for RentalResponse {
    fn from(details: RentalDetails) -> Self {
        Self {
            id: details.id,
            movie_id: details.movie.id,
            customer_id: details.customer.id,
            employee_id: details.processed_by.id,
            rental_date: details.rental_date,
            return_date: details.return_date,
            status: details.status,
        }
    }
}

// Ids start at 1; 0 means nothing was selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    #[validate(range(min = 1, message = "Select a customer"))]
    pub customer_id: i64,
    #[validate(range(min = 1, message = "Select a movie"))]
    pub movie_id: i64,
    #[validate(range(min = 1, message = "Select an employee"))]
    pub employee_id: i64,
}
