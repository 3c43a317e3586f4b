//! [`RentalBackend`] over HTTP
//!
//! Mutations only check the status: whatever record the server echoes back
//! is discarded, since the state reloads everything afterwards.

use async_trait::async_trait;
use reqwest::Method;

use crate::api;
use crate::domain::{ClientError, RentalBackend};
use crate::infrastructure::http::{HttpClient, RequestOptions};
use crate::models::{
    Customer, CustomerRequest, Employee, Movie, MovieRequest, RentalRequest, RentalResponse,
};

#[async_trait]
impl RentalBackend for HttpClient {
    async fn list_movies(&self) -> Result<Vec<Movie>, ClientError> {
        api::list_movies(self).await
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, ClientError> {
        api::list_customers(self).await
    }

    async fn list_rentals(&self) -> Result<Vec<RentalResponse>, ClientError> {
        api::list_rentals(self).await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        api::list_employees(self).await
    }

    async fn create_movie(&self, movie: &MovieRequest) -> Result<(), ClientError> {
        self.send("/api/movies", RequestOptions::new(Method::POST).json(movie)?)
            .await
    }

    async fn create_customer(&self, customer: &CustomerRequest) -> Result<(), ClientError> {
        self.send(
            api::CUSTOMERS_PATH,
            RequestOptions::new(Method::POST).json(customer)?,
        )
        .await
    }

    async fn create_rental(&self, rental: &RentalRequest) -> Result<(), ClientError> {
        self.send("/api/rentals", RequestOptions::new(Method::POST).json(rental)?)
            .await
    }

    async fn delete_movie(&self, id: i64) -> Result<(), ClientError> {
        api::delete_movie(self, id).await
    }

    async fn delete_customer(&self, id: i64) -> Result<(), ClientError> {
        api::delete_customer(self, id).await
    }

    async fn find_customer_by_email(&self, email: &str) -> Result<Option<Customer>, ClientError> {
        api::find_customer_by_email(self, email).await
    }

    async fn find_customer_by_phone(&self, phone: &str) -> Result<Option<Customer>, ClientError> {
        api::find_customer_by_phone(self, phone).await
    }

    async fn return_rental(&self, id: i64) -> Result<(), ClientError> {
        self.send(
            &format!("/api/rentals/{}/return", id),
            RequestOptions::new(Method::PATCH),
        )
        .await
    }

    async fn increase_copies(&self, id: i64, amount: u32) -> Result<(), ClientError> {
        api::increase_copies(self, id, amount).await
    }

    async fn decrease_copies(&self, id: i64, amount: u32) -> Result<(), ClientError> {
        api::decrease_copies(self, id, amount).await
    }
}
