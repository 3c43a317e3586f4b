use chrono::{Datelike, Local};
use validator::Validate;

use super::{FieldErrors, parse_whole};
use crate::models::MovieRequest;
use crate::models::movie::EARLIEST_RELEASE_YEAR;

const DEFAULT_COPIES: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieField {
    Title,
    Genre,
    ReleaseYear,
    AvailableCopies,
    Director,
}

impl MovieField {
    pub const ALL: [MovieField; 5] = [
        MovieField::Title,
        MovieField::Genre,
        MovieField::ReleaseYear,
        MovieField::AvailableCopies,
        MovieField::Director,
    ];

    /// Request field name, used as the error key
    pub fn key(&self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Genre => "genre",
            MovieField::ReleaseYear => "release_year",
            MovieField::AvailableCopies => "available_copies",
            MovieField::Director => "director",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovieField::Title => "Title",
            MovieField::Genre => "Genre",
            MovieField::ReleaseYear => "Release year",
            MovieField::AvailableCopies => "Available copies",
            MovieField::Director => "Director",
        }
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Draft of a new movie. Numeric fields keep the raw text until submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieForm {
    title: String,
    genre: String,
    release_year: String,
    available_copies: String,
    director: String,
    errors: FieldErrors,
}

impl Default for MovieForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: String::new(),
            release_year: current_year().to_string(),
            available_copies: DEFAULT_COPIES.to_string(),
            director: String::new(),
            errors: FieldErrors::default(),
        }
    }
}

impl MovieForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::Genre => &self.genre,
            MovieField::ReleaseYear => &self.release_year,
            MovieField::AvailableCopies => &self.available_copies,
            MovieField::Director => &self.director,
        }
    }

    /// Replace a field and drop its pending error
    pub fn set(&mut self, field: MovieField, value: &str) {
        let slot = match field {
            MovieField::Title => &mut self.title,
            MovieField::Genre => &mut self.genre,
            MovieField::ReleaseYear => &mut self.release_year,
            MovieField::AvailableCopies => &mut self.available_copies,
            MovieField::Director => &mut self.director,
        };
        *slot = value.to_string();
        self.errors.clear(field.key());
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: MovieField) -> Option<&str> {
        self.errors.get(field.key())
    }

    /// Validate the draft. On success the draft is reset and the request is
    /// returned; on failure the field errors are kept on the form.
    pub fn submit(&mut self) -> Result<MovieRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let release_year = parse_whole::<i32>(&self.release_year).unwrap_or_else(|| {
            errors.insert(MovieField::ReleaseYear.key(), "Must be a whole number");
            0
        });
        let available_copies = parse_whole::<i32>(&self.available_copies).unwrap_or_else(|| {
            errors.insert(MovieField::AvailableCopies.key(), "Must be a whole number");
            0
        });

        let request = MovieRequest {
            title: self.title.clone(),
            genre: self.genre.clone(),
            release_year,
            available_copies,
            director: self.director.clone(),
        };

        if let Err(e) = request.validate() {
            errors.extend_from(&e);
        }
        if request.release_year > current_year() {
            errors.insert(MovieField::ReleaseYear.key(), "Year is in the future");
        }

        if !errors.is_empty() {
            tracing::debug!("Movie form rejected: {:?}", errors);
            self.errors = errors.clone();
            return Err(errors);
        }

        *self = Self::default();
        Ok(request)
    }

    /// Accepted year range, for prompts
    pub fn year_hint() -> String {
        format!("{}-{}", EARLIEST_RELEASE_YEAR, current_year())
    }
}
