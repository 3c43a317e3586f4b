use serde::{Deserialize, Serialize};
use validator::Validate;

/// First year a motion picture could have been released
pub const EARLIEST_RELEASE_YEAR: i32 = 1888;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub available_copies: i32,
    pub director: String,
}

// DTO for create/update requests.
// The upper bound on the release year depends on the clock and is checked by
// the movie form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,
    #[validate(range(min = 1888, message = "Invalid year"))]
    pub release_year: i32,
    #[validate(range(min = 0, message = "Minimum 0"))]
    pub available_copies: i32,
    #[validate(length(min = 1, message = "Director is required"))]
    pub director: String,
}

impl From<Movie> for MovieRequest {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            genre: movie.genre,
            release_year: movie.release_year,
            available_copies: movie.available_copies,
            director: movie.director,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_uses_camel_case_on_the_wire() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Central do Brasil",
            "genre": "Drama",
            "releaseYear": 1998,
            "availableCopies": 3,
            "director": "Walter Salles"
        });
        let movie: Movie = serde_json::from_value(json).unwrap();
        assert_eq!(movie.release_year, 1998);
        assert_eq!(movie.available_copies, 3);

        let request = MovieRequest::from(movie);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["availableCopies"], 3);
        assert!(value.get("id").is_none());
    }
}
