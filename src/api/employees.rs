use crate::domain::ClientError;
use crate::infrastructure::http::{HttpClient, RequestOptions};
use crate::models::Employee;

pub async fn list_employees(client: &HttpClient) -> Result<Vec<Employee>, ClientError> {
    let employees = client
        .request("/api/employees", RequestOptions::default())
        .await?;
    Ok(employees.unwrap_or_default())
}
