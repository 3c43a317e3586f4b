//! Backend trait definition
//!
//! This trait defines the operations the console state needs from the
//! rental service. The HTTP implementation lives in the infrastructure layer.

use async_trait::async_trait;

use super::ClientError;
use crate::models::{
    Customer, CustomerRequest, Employee, Movie, MovieRequest, RentalRequest, RentalResponse,
};

/// Operations consumed by [`crate::services::ConsoleState`]
#[async_trait]
pub trait RentalBackend: Send + Sync {
    /// List all movies
    async fn list_movies(&self) -> Result<Vec<Movie>, ClientError>;

    /// List all customers
    async fn list_customers(&self) -> Result<Vec<Customer>, ClientError>;

    /// List all rentals, open and returned
    async fn list_rentals(&self) -> Result<Vec<RentalResponse>, ClientError>;

    /// List all employees
    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError>;

    async fn create_movie(&self, movie: &MovieRequest) -> Result<(), ClientError>;

    async fn create_customer(&self, customer: &CustomerRequest) -> Result<(), ClientError>;

    async fn create_rental(&self, rental: &RentalRequest) -> Result<(), ClientError>;

    async fn delete_movie(&self, id: i64) -> Result<(), ClientError>;

    async fn delete_customer(&self, id: i64) -> Result<(), ClientError>;

    async fn find_customer_by_email(&self, email: &str) -> Result<Option<Customer>, ClientError>;

    async fn find_customer_by_phone(&self, phone: &str) -> Result<Option<Customer>, ClientError>;

    /// Mark an open rental as returned
    async fn return_rental(&self, id: i64) -> Result<(), ClientError>;

    /// Add `amount` copies to a movie
    async fn increase_copies(&self, id: i64, amount: u32) -> Result<(), ClientError>;

    /// Remove `amount` copies from a movie
    async fn decrease_copies(&self, id: i64, amount: u32) -> Result<(), ClientError>;
}
