//! Customer endpoints. The backend serves them under the employees namespace.

use reqwest::Method;

use crate::domain::ClientError;
use crate::infrastructure::http::{HttpClient, RequestOptions};
use crate::models::{Customer, CustomerRequest};

pub const CUSTOMERS_PATH: &str = "/api/employees/customers";

pub async fn list_customers(client: &HttpClient) -> Result<Vec<Customer>, ClientError> {
    let customers = client
        .request(CUSTOMERS_PATH, RequestOptions::default())
        .await?;
    Ok(customers.unwrap_or_default())
}

pub async fn create_customer(
    client: &HttpClient,
    customer: &CustomerRequest,
) -> Result<Option<Customer>, ClientError> {
    client
        .request(
            CUSTOMERS_PATH,
            RequestOptions::new(Method::POST).json(customer)?,
        )
        .await
}

pub async fn get_customer(
    client: &HttpClient,
    customer_id: i64,
) -> Result<Option<Customer>, ClientError> {
    client
        .request(
            &format!("{}/{}", CUSTOMERS_PATH, customer_id),
            RequestOptions::default(),
        )
        .await
}

pub async fn update_customer(
    client: &HttpClient,
    customer_id: i64,
    customer: &CustomerRequest,
) -> Result<(), ClientError> {
    client
        .send(
            &format!("{}/{}", CUSTOMERS_PATH, customer_id),
            RequestOptions::new(Method::PUT).json(customer)?,
        )
        .await
}

pub async fn delete_customer(client: &HttpClient, customer_id: i64) -> Result<(), ClientError> {
    client
        .send(
            &format!("{}/{}", CUSTOMERS_PATH, customer_id),
            RequestOptions::new(Method::DELETE),
        )
        .await
}

pub async fn find_customer_by_email(
    client: &HttpClient,
    email: &str,
) -> Result<Option<Customer>, ClientError> {
    client
        .request(
            &format!("{}/email/{}", CUSTOMERS_PATH, urlencoding::encode(email)),
            RequestOptions::default(),
        )
        .await
}

pub async fn find_customer_by_phone(
    client: &HttpClient,
    phone: &str,
) -> Result<Option<Customer>, ClientError> {
    client
        .request(
            &format!("{}/phone/{}", CUSTOMERS_PATH, urlencoding::encode(phone)),
            RequestOptions::default(),
        )
        .await
}
