//! Single page layout: movies and customers side by side, rentals below
//! split into active and finished.

use super::customer_list::render_customers;
use super::format::side_by_side;
use super::movie_list::render_movies;
use super::rental_list::{NameIndex, render_rentals};
use crate::domain::RentalBackend;
use crate::forms::{CustomerForm, MovieForm, RentalForm};
use crate::models::RentalStatus;
use crate::services::ConsoleState;

const COLUMN_WIDTH: usize = 48;

pub struct Page<B> {
    pub state: ConsoleState<B>,
    pub movie_form: MovieForm,
    pub customer_form: CustomerForm,
    pub rental_form: RentalForm,
    base_url: String,
}

impl<B: RentalBackend> Page<B> {
    pub fn new(state: ConsoleState<B>, base_url: &str) -> Self {
        Self {
            state,
            movie_form: MovieForm::new(),
            customer_form: CustomerForm::new(),
            rental_form: RentalForm::new(),
            base_url: base_url.to_string(),
        }
    }

    /// First display: load everything once
    pub async fn mount(&mut self) {
        self.state.load_all().await;
    }

    pub fn render(&self) -> String {
        let state = &self.state;
        let mut out = format!("Movie Rental Console - {}\n", self.base_url);

        if let Some(error) = state.error() {
            out.push_str(&format!("! {}\n", error));
        }
        out.push('\n');

        let movies = format!("== Movies ==\n{}", render_movies(state.movies()));
        let customers = format!("== Customers ==\n{}", render_customers(state.customers()));
        out.push_str(&side_by_side(&movies, &customers, COLUMN_WIDTH));

        let names = NameIndex::new(state.movies(), state.customers(), state.employees());
        out.push_str("\n== Active rentals ==\n");
        out.push_str(&render_rentals(state.rentals(), &names, RentalStatus::Open));
        out.push_str("\n== Finished rentals ==\n");
        out.push_str(&render_rentals(
            state.rentals(),
            &names,
            RentalStatus::Returned,
        ));
        out
    }
}
