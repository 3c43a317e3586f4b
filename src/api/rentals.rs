use reqwest::Method;

use crate::domain::ClientError;
use crate::infrastructure::http::{HttpClient, RequestOptions};
use crate::models::{RentalDetails, RentalRequest, RentalResponse};

pub async fn list_rentals(client: &HttpClient) -> Result<Vec<RentalResponse>, ClientError> {
    let rentals = client
        .request("/api/rentals", RequestOptions::default())
        .await?;
    Ok(rentals.unwrap_or_default())
}

pub async fn create_rental(
    client: &HttpClient,
    rental: &RentalRequest,
) -> Result<Option<RentalDetails>, ClientError> {
    client
        .request("/api/rentals", RequestOptions::new(Method::POST).json(rental)?)
        .await
}

/// Close an open rental. The server stamps the return date.
pub async fn return_rental(
    client: &HttpClient,
    rental_id: i64,
) -> Result<Option<RentalDetails>, ClientError> {
    client
        .request(
            &format!("/api/rentals/{}/return", rental_id),
            RequestOptions::new(Method::PATCH),
        )
        .await
}
