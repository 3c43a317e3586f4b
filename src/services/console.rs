//! Console state - in-memory snapshot of the rental service
//!
//! Holds the four collections the page renders plus the loading flag and the
//! last error. Every mutation goes through an action method which calls the
//! backend and then reloads all four collections; local collections are never
//! patched in place.

use std::future::Future;
use std::sync::Arc;

use super::notifications::Notification;
use crate::domain::{ClientError, RentalBackend};
use crate::models::{
    Customer, CustomerRequest, Employee, Movie, MovieRequest, RentalRequest, RentalResponse,
};

const LOAD_FAILED: &str = "Failed to load data";
const COPIES_FAILED: &str = "Failed to adjust copies";
const MOVIE_NOT_FOUND: &str = "Movie not found";
const BELOW_ZERO: &str = "Cannot reduce below 0 copies";

/// Outcome of a copy adjustment that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyAdjustment {
    Applied,
    Skipped,
}

/// Number of copies actually requested when removing `requested` copies from a
/// movie that has `available` left.
pub fn decrease_amount(requested: u32, available: i32) -> u32 {
    requested.min(available.max(0) as u32)
}

pub struct ConsoleState<B> {
    backend: Arc<B>,
    movies: Vec<Movie>,
    customers: Vec<Customer>,
    rentals: Vec<RentalResponse>,
    employees: Vec<Employee>,
    loading: bool,
    error: Option<String>,
    notifications: Vec<Notification>,
}

impl<B: RentalBackend> ConsoleState<B> {
    pub fn new(backend: B) -> Self {
        Self::from_shared(Arc::new(backend))
    }

    pub fn from_shared(backend: Arc<B>) -> Self {
        Self {
            backend,
            movies: Vec::new(),
            customers: Vec::new(),
            rentals: Vec::new(),
            employees: Vec::new(),
            loading: false,
            error: None,
            notifications: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn rentals(&self) -> &[RentalResponse] {
        &self.rentals
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last error, kept until the next action starts
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Drain notifications raised since the last call
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Fetch all four collections concurrently and replace the snapshot
    pub async fn load_all(&mut self) {
        self.loading = true;
        self.error = None;

        let backend = Arc::clone(&self.backend);
        let result = futures::try_join!(
            backend.list_movies(),
            backend.list_customers(),
            backend.list_rentals(),
            backend.list_employees(),
        );

        match result {
            Ok((movies, customers, rentals, employees)) => {
                tracing::debug!(
                    "Loaded {} movies, {} customers, {} rentals, {} employees",
                    movies.len(),
                    customers.len(),
                    rentals.len(),
                    employees.len()
                );
                self.movies = movies;
                self.customers = customers;
                self.rentals = rentals;
                self.employees = employees;
            }
            Err(e) => {
                let msg = describe(&e, LOAD_FAILED);
                tracing::error!("Failed to load data: {}", msg);
                self.error = Some(msg);
            }
        }

        self.loading = false;
    }

    pub async fn create_movie(&mut self, movie: MovieRequest) {
        self.run_action(
            move |api| async move { api.create_movie(&movie).await },
            "Movie created",
            "Failed to create movie",
        )
        .await
    }

    pub async fn create_customer(&mut self, customer: CustomerRequest) {
        self.run_action(
            move |api| async move { api.create_customer(&customer).await },
            "Customer created",
            "Failed to create customer",
        )
        .await
    }

    pub async fn create_rental(&mut self, rental: RentalRequest) {
        self.run_action(
            move |api| async move { api.create_rental(&rental).await },
            "Rental created",
            "Failed to create rental",
        )
        .await
    }

    pub async fn delete_movie(&mut self, id: i64) {
        self.run_action(
            move |api| async move { api.delete_movie(id).await },
            "Movie deleted",
            "Failed to delete movie",
        )
        .await
    }

    pub async fn delete_customer(&mut self, id: i64) {
        self.run_action(
            move |api| async move { api.delete_customer(id).await },
            "Customer deleted",
            "Failed to delete customer",
        )
        .await
    }

    pub async fn return_rental(&mut self, id: i64) {
        self.run_action(
            move |api| async move { api.return_rental(id).await },
            "Rental returned",
            "Failed to return rental",
        )
        .await
    }

    /// Add (`delta > 0`) or remove (`delta < 0`) copies of a loaded movie.
    ///
    /// Removal is clamped to the copies currently available; when nothing can
    /// be removed a warning is raised and no request is made.
    pub async fn adjust_copies(&mut self, movie_id: i64, delta: i32) {
        self.loading = true;
        self.error = None;

        let outcome = self.apply_copy_delta(movie_id, delta).await;
        match outcome {
            Ok(CopyAdjustment::Applied) => {
                self.load_all().await;
                tracing::info!("Copies of movie {} adjusted by {}", movie_id, delta);
                self.notifications.push(Notification::success("Copies updated"));
            }
            Ok(CopyAdjustment::Skipped) => {
                tracing::warn!("Movie {} has no copies left to remove", movie_id);
                self.notifications.push(Notification::warning(BELOW_ZERO));
            }
            Err(e) => self.fail(&e, COPIES_FAILED),
        }

        self.loading = false;
    }

    async fn apply_copy_delta(
        &self,
        movie_id: i64,
        delta: i32,
    ) -> Result<CopyAdjustment, ClientError> {
        let movie = self
            .movies
            .iter()
            .find(|m| m.id == movie_id)
            .ok_or_else(|| ClientError::NotFound(MOVIE_NOT_FOUND.to_string()))?;

        if delta < 0 {
            let amount = decrease_amount(delta.unsigned_abs(), movie.available_copies);
            if amount == 0 {
                return Ok(CopyAdjustment::Skipped);
            }
            self.backend.decrease_copies(movie_id, amount).await?;
        } else if delta > 0 {
            self.backend
                .increase_copies(movie_id, delta.unsigned_abs())
                .await?;
        }

        Ok(CopyAdjustment::Applied)
    }

    /// Run one backend call, then reload everything on success
    async fn run_action<F, Fut>(&mut self, action: F, success: &str, failure: &str)
    where
        F: FnOnce(Arc<B>) -> Fut,
        Fut: Future<Output = Result<(), ClientError>>,
    {
        self.loading = true;
        self.error = None;

        let outcome = action(Arc::clone(&self.backend)).await;
        match outcome {
            Ok(()) => {
                self.load_all().await;
                tracing::info!("{}", success);
                self.notifications.push(Notification::success(success));
            }
            Err(e) => self.fail(&e, failure),
        }

        self.loading = false;
    }

    fn fail(&mut self, e: &ClientError, fallback: &str) {
        let msg = describe(e, fallback);
        tracing::error!("{}: {}", fallback, msg);
        self.error = Some(msg.clone());
        self.notifications.push(Notification::error(msg));
    }
}

fn describe(e: &ClientError, fallback: &str) -> String {
    let msg = e.user_message();
    if msg.trim().is_empty() {
        fallback.to_string()
    } else {
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RentalStatus;
    use crate::services::NotificationLevel;
    use crate::test_support::{FakeBackend, customer, employee, movie};

    async fn loaded(backend: FakeBackend) -> ConsoleState<FakeBackend> {
        let mut state = ConsoleState::new(backend);
        state.load_all().await;
        state
    }

    #[test]
    fn decrease_is_clamped_to_available() {
        assert_eq!(decrease_amount(5, 2), 2);
        assert_eq!(decrease_amount(1, 2), 1);
        assert_eq!(decrease_amount(3, 0), 0);
        assert_eq!(decrease_amount(3, -1), 0);
    }

    #[tokio::test]
    async fn load_all_fills_every_collection() {
        let backend = FakeBackend::new().seed(|s| {
            s.movies.push(movie(1, "Cidade de Deus", 2));
            s.customers.push(customer(3, "Ana"));
            s.employees.push(employee(2, "Bruno"));
        });
        let state = loaded(backend).await;

        assert_eq!(state.movies().len(), 1);
        assert_eq!(state.customers().len(), 1);
        assert_eq!(state.employees().len(), 1);
        assert!(state.rentals().is_empty());
        assert!(!state.is_loading());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn load_failure_sets_status_prefixed_error() {
        let backend = FakeBackend::new();
        backend.fail("list_rentals", 500, "Database unavailable");
        let state = loaded(backend).await;

        assert_eq!(state.error(), Some("500: Database unavailable"));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn listing_twice_without_mutation_is_stable() {
        let backend = FakeBackend::new().seed(|s| {
            s.movies.push(movie(1, "Cidade de Deus", 2));
            s.movies.push(movie(2, "Tropa de Elite", 0));
        });
        let mut state = loaded(backend).await;
        let first = state.movies().to_vec();
        state.load_all().await;
        assert_eq!(state.movies(), first.as_slice());
    }

    #[tokio::test]
    async fn decrease_beyond_stock_requests_only_available_copies() {
        let backend = FakeBackend::new().seed(|s| s.movies.push(movie(1, "Cidade de Deus", 2)));
        let mut state = loaded(backend).await;

        state.adjust_copies(1, -5).await;

        assert_eq!(state.backend().mutations(), vec!["decrease_copies(1, 2)"]);
        assert_eq!(state.movies()[0].available_copies, 0);
        let notes = state.take_notifications();
        assert_eq!(notes, vec![Notification::success("Copies updated")]);
    }

    #[tokio::test]
    async fn decrease_with_no_copies_makes_no_call() {
        let backend = FakeBackend::new().seed(|s| s.movies.push(movie(1, "Cidade de Deus", 0)));
        let mut state = loaded(backend).await;
        let calls_before = state.backend().calls().len();

        state.adjust_copies(1, -1).await;

        assert_eq!(state.backend().calls().len(), calls_before);
        let notes = state.take_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, NotificationLevel::Warning);
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn increase_calls_backend_and_reloads() {
        let backend = FakeBackend::new().seed(|s| s.movies.push(movie(1, "Cidade de Deus", 2)));
        let mut state = loaded(backend).await;

        state.adjust_copies(1, 1).await;

        assert_eq!(state.backend().mutations(), vec!["increase_copies(1, 1)"]);
        assert_eq!(state.movies()[0].available_copies, 3);
    }

    #[tokio::test]
    async fn adjusting_unknown_movie_fails_locally() {
        let mut state = loaded(FakeBackend::new()).await;

        state.adjust_copies(99, 1).await;

        assert!(state.backend().mutations().is_empty());
        assert_eq!(state.error(), Some(MOVIE_NOT_FOUND));
        let notes = state.take_notifications();
        assert_eq!(notes, vec![Notification::error(MOVIE_NOT_FOUND)]);
    }

    #[tokio::test]
    async fn created_movie_shows_up_after_reload() {
        let mut state = loaded(FakeBackend::new()).await;

        state
            .create_movie(MovieRequest {
                title: "Bacurau".to_string(),
                genre: "Thriller".to_string(),
                release_year: 2019,
                available_copies: 4,
                director: "Kleber Mendonça Filho".to_string(),
            })
            .await;

        let created = state
            .movies()
            .iter()
            .find(|m| m.title == "Bacurau")
            .expect("movie listed after create");
        assert_eq!(created.genre, "Thriller");
        assert_eq!(created.release_year, 2019);
        assert_eq!(created.available_copies, 4);
        assert_eq!(created.director, "Kleber Mendonça Filho");
        assert_eq!(
            state.take_notifications(),
            vec![Notification::success("Movie created")]
        );
    }

    #[tokio::test]
    async fn failed_action_keeps_snapshot_and_reports() {
        let backend = FakeBackend::new().seed(|s| s.customers.push(customer(3, "Ana")));
        backend.fail("delete_customer", 409, "Customer has open rentals");
        let mut state = loaded(backend).await;
        let calls_before = state.backend().calls().len();

        state.delete_customer(3).await;

        assert_eq!(state.error(), Some("409: Customer has open rentals"));
        assert_eq!(state.customers().len(), 1);
        // no reload after a failed action
        assert_eq!(state.backend().calls().len(), calls_before + 1);
        let notes = state.take_notifications();
        assert_eq!(notes[0].level, NotificationLevel::Error);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn next_action_clears_previous_error() {
        let backend = FakeBackend::new().seed(|s| s.movies.push(movie(1, "Cidade de Deus", 2)));
        let mut state = loaded(backend).await;
        state.adjust_copies(42, 1).await;
        assert!(state.error().is_some());

        state.delete_movie(1).await;

        assert!(state.error().is_none());
        assert!(state.movies().is_empty());
    }

    #[tokio::test]
    async fn return_moves_rental_to_returned() {
        let backend = FakeBackend::new().seed(|s| {
            s.rentals.push(RentalResponse {
                id: 42,
                movie_id: 7,
                customer_id: 3,
                employee_id: 2,
                rental_date: "2024-05-01".to_string(),
                return_date: None,
                status: RentalStatus::Open,
            })
        });
        let mut state = loaded(backend).await;

        state.return_rental(42).await;

        let rental = &state.rentals()[0];
        assert_eq!(rental.id, 42);
        assert_eq!(rental.status, RentalStatus::Returned);
        assert!(rental.return_date.is_some());
    }
}
