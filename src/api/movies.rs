use reqwest::Method;

use crate::domain::ClientError;
use crate::infrastructure::http::{HttpClient, RequestOptions};
use crate::models::{Movie, MovieRequest};

pub async fn list_movies(client: &HttpClient) -> Result<Vec<Movie>, ClientError> {
    let movies = client
        .request("/api/movies", RequestOptions::default())
        .await?;
    Ok(movies.unwrap_or_default())
}

pub async fn get_movie(client: &HttpClient, id: i64) -> Result<Option<Movie>, ClientError> {
    client
        .request(&format!("/api/movies/{}", id), RequestOptions::default())
        .await
}

pub async fn create_movie(
    client: &HttpClient,
    movie: &MovieRequest,
) -> Result<Option<Movie>, ClientError> {
    client
        .request("/api/movies", RequestOptions::new(Method::POST).json(movie)?)
        .await
}

pub async fn update_movie(
    client: &HttpClient,
    id: i64,
    movie: &MovieRequest,
) -> Result<(), ClientError> {
    client
        .send(
            &format!("/api/movies/{}", id),
            RequestOptions::new(Method::PUT).json(movie)?,
        )
        .await
}

pub async fn delete_movie(client: &HttpClient, id: i64) -> Result<(), ClientError> {
    client
        .send(
            &format!("/api/movies/{}", id),
            RequestOptions::new(Method::DELETE),
        )
        .await
}

pub async fn increase_copies(client: &HttpClient, id: i64, copies: u32) -> Result<(), ClientError> {
    client
        .send(
            &format!("/api/movies/{}/increase-copies/{}", id, copies),
            RequestOptions::new(Method::PATCH),
        )
        .await
}

pub async fn decrease_copies(client: &HttpClient, id: i64, copies: u32) -> Result<(), ClientError> {
    client
        .send(
            &format!("/api/movies/{}/decrease-copies/{}", id, copies),
            RequestOptions::new(Method::PATCH),
        )
        .await
}
