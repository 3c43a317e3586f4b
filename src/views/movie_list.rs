use crate::domain::RentalBackend;
use crate::models::Movie;
use crate::services::ConsoleState;

pub const EMPTY: &str = "No movies yet.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieAction {
    IncreaseCopies(i64),
    DecreaseCopies(i64),
    Delete(i64),
}

impl MovieAction {
    pub async fn dispatch<B: RentalBackend>(self, state: &mut ConsoleState<B>) {
        match self {
            MovieAction::IncreaseCopies(id) => state.adjust_copies(id, 1).await,
            MovieAction::DecreaseCopies(id) => state.adjust_copies(id, -1).await,
            MovieAction::Delete(id) => state.delete_movie(id).await,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieRow {
    pub id: i64,
    pub title: String,
    pub details: String,
    pub actions: [MovieAction; 3],
}

pub fn movie_rows(movies: &[Movie]) -> Vec<MovieRow> {
    movies
        .iter()
        .map(|m| MovieRow {
            id: m.id,
            title: m.title.clone(),
            details: format!(
                "{} • {} • Copies: {}",
                m.genre, m.release_year, m.available_copies
            ),
            actions: [
                MovieAction::IncreaseCopies(m.id),
                MovieAction::DecreaseCopies(m.id),
                MovieAction::Delete(m.id),
            ],
        })
        .collect()
}

pub fn render_movies(movies: &[Movie]) -> String {
    let rows = movie_rows(movies);
    if rows.is_empty() {
        return format!("{}\n", EMPTY);
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(&format!("#{} {}  [+1] [-1] [del]\n", row.id, row.title));
        out.push_str(&format!("    {}\n", row.details));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBackend, movie};

    #[test]
    fn empty_list_shows_placeholder() {
        assert_eq!(render_movies(&[]), "No movies yet.\n");
    }

    #[test]
    fn rows_show_genre_year_and_copies() {
        let rows = movie_rows(&[movie(1, "Cidade de Deus", 2)]);
        assert_eq!(rows[0].details, "Drama • 2002 • Copies: 2");
        assert_eq!(rows[0].actions[1], MovieAction::DecreaseCopies(1));
    }

    #[tokio::test]
    async fn row_buttons_adjust_by_one() {
        let backend = FakeBackend::new().seed(|s| s.movies.push(movie(1, "Cidade de Deus", 2)));
        let mut state = ConsoleState::new(backend);
        state.load_all().await;

        MovieAction::IncreaseCopies(1).dispatch(&mut state).await;
        MovieAction::DecreaseCopies(1).dispatch(&mut state).await;
        MovieAction::Delete(1).dispatch(&mut state).await;

        assert_eq!(
            state.backend().mutations(),
            vec!["increase_copies(1, 1)", "decrease_copies(1, 1)", "delete_movie(1)"]
        );
        assert!(state.movies().is_empty());
    }
}
