//! Rentals filtered by status, with names resolved against the loaded
//! movies, customers and employees.

use std::collections::HashMap;

use super::format::format_date;
use crate::domain::RentalBackend;
use crate::models::{Customer, Employee, Movie, RentalResponse, RentalStatus};
use crate::services::ConsoleState;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RentalAction {
    Return(i64),
}

impl RentalAction {
    pub async fn dispatch<B: RentalBackend>(self, state: &mut ConsoleState<B>) {
        match self {
            RentalAction::Return(id) => state.return_rental(id).await,
        }
    }
}

/// Id to display name lookups for one render pass
pub struct NameIndex<'a> {
    movies: HashMap<i64, &'a str>,
    customers: HashMap<i64, &'a str>,
    employees: HashMap<i64, &'a str>,
}

impl<'a> NameIndex<'a> {
    pub fn new(movies: &'a [Movie], customers: &'a [Customer], employees: &'a [Employee]) -> Self {
        Self {
            movies: movies.iter().map(|m| (m.id, m.title.as_str())).collect(),
            customers: customers.iter().map(|c| (c.id, c.name.as_str())).collect(),
            employees: employees.iter().map(|e| (e.id, e.name.as_str())).collect(),
        }
    }

    pub fn movie(&self, id: i64) -> String {
        resolve(&self.movies, id, "Movie")
    }

    pub fn customer(&self, id: i64) -> String {
        resolve(&self.customers, id, "Customer")
    }

    pub fn employee(&self, id: i64) -> String {
        resolve(&self.employees, id, "Employee")
    }
}

fn resolve(names: &HashMap<i64, &str>, id: i64, kind: &str) -> String {
    match names.get(&id) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{} #{}", kind, id),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RentalRow {
    pub id: i64,
    pub status: RentalStatus,
    pub movie: String,
    pub customer: String,
    pub employee: String,
    pub rented_on: String,
    /// Only set on returned rentals; "N/A" when the server sent no date
    pub returned_on: Option<String>,
    pub action: Option<RentalAction>,
}

pub fn rental_rows(
    rentals: &[RentalResponse],
    names: &NameIndex<'_>,
    status: RentalStatus,
) -> Vec<RentalRow> {
    rentals
        .iter()
        .filter(|r| r.status == status)
        .map(|r| RentalRow {
            id: r.id,
            status: r.status,
            movie: names.movie(r.movie_id),
            customer: names.customer(r.customer_id),
            employee: names.employee(r.employee_id),
            rented_on: format_date(&r.rental_date),
            returned_on: match status {
                RentalStatus::Returned => Some(
                    r.return_date
                        .as_deref()
                        .map(format_date)
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                ),
                RentalStatus::Open => None,
            },
            action: match status {
                RentalStatus::Open => Some(RentalAction::Return(r.id)),
                RentalStatus::Returned => None,
            },
        })
        .collect()
}

pub fn empty_message(status: RentalStatus) -> &'static str {
    match status {
        RentalStatus::Open => "No active rentals.",
        RentalStatus::Returned => "No finished rentals.",
    }
}

pub fn render_rentals(
    rentals: &[RentalResponse],
    names: &NameIndex<'_>,
    status: RentalStatus,
) -> String {
    let rows = rental_rows(rentals, names, status);
    if rows.is_empty() {
        return format!("{}\n", empty_message(status));
    }

    let mut out = String::new();
    for row in rows {
        let button = if row.action.is_some() { "  [return]" } else { "" };
        out.push_str(&format!(
            "{} - {}  ({}){}\n",
            row.movie, row.customer, row.status, button
        ));

        let mut details = format!("    Rented on: {} • ", row.rented_on);
        if let Some(returned) = &row.returned_on {
            details.push_str(&format!("Returned on: {} • ", returned));
        }
        details.push_str(&format!("Processed by: {} • ID: {}\n", row.employee, row.id));
        out.push_str(&details);
    }
    out
}
