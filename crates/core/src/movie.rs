//! The movie entity and its validation rules.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::runtime::Runtime;
use crate::validator::{self, Validator};

/// Longest accepted title, in bytes (exclusive).
pub const MAX_TITLE_BYTES: usize = 500;

/// Most genres accepted on a single movie.
pub const MAX_GENRES: usize = 10;

/// A movie record.
///
/// `id`, `created_at` and `version` are assigned by the database on
/// insert and are never accepted from client input.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    pub genres: Vec<String>,
    /// Optimistic-concurrency counter, bumped by the database on update.
    pub version: i32,
}

/// Apply every movie validation rule to `movie`, accumulating failures
/// in `v`. Rules do not short-circuit; each offending field ends up with
/// exactly one message (first failure per field wins).
pub fn validate_movie(v: &mut Validator, movie: &Movie) {
    v.check(!movie.title.is_empty(), "title", "must be provided");
    v.check(
        movie.title.len() < MAX_TITLE_BYTES,
        "title",
        "must be less than 500 bytes",
    );

    v.check(movie.year != 0, "year", "must be provided");
    v.check(
        movie.year <= Utc::now().year(),
        "year",
        "must not be in the future",
    );

    v.check(movie.runtime.minutes() != 0, "runtime", "must be provided");
    v.check(
        movie.runtime.minutes() > 0,
        "runtime",
        "must be a positive integer",
    );

    v.check(!movie.genres.is_empty(), "genres", "must contain at least 1 genre");
    v.check(
        movie.genres.len() <= MAX_GENRES,
        "genres",
        "must not contain more than 10 genres",
    );
    v.check(
        validator::unique(&movie.genres),
        "genres",
        "must not contain duplicate genres",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_movie() -> Movie {
        Movie {
            id: 0,
            created_at: Utc::now(),
            title: "Casablanca".to_string(),
            year: 1942,
            runtime: Runtime::new(102),
            genres: vec!["drama".to_string(), "romance".to_string()],
            version: 0,
        }
    }

    fn errors_for(movie: &Movie) -> std::collections::BTreeMap<String, String> {
        let mut v = Validator::new();
        validate_movie(&mut v, movie);
        v.into_errors()
    }

    #[test]
    fn valid_movie_passes() {
        assert!(errors_for(&valid_movie()).is_empty());
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut movie = valid_movie();
        movie.title = String::new();

        assert_eq!(errors_for(&movie).get("title").unwrap(), "must be provided");
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut movie = valid_movie();
        movie.title = "x".repeat(MAX_TITLE_BYTES);

        assert_eq!(
            errors_for(&movie).get("title").unwrap(),
            "must be less than 500 bytes"
        );
    }

    #[test]
    fn title_just_under_limit_passes() {
        let mut movie = valid_movie();
        movie.title = "x".repeat(MAX_TITLE_BYTES - 1);

        assert!(errors_for(&movie).is_empty());
    }

    #[test]
    fn zero_year_is_rejected() {
        let mut movie = valid_movie();
        movie.year = 0;

        assert_eq!(errors_for(&movie).get("year").unwrap(), "must be provided");
    }

    #[test]
    fn future_year_is_rejected() {
        let mut movie = valid_movie();
        movie.year = Utc::now().year() + 1;

        assert_eq!(
            errors_for(&movie).get("year").unwrap(),
            "must not be in the future"
        );
    }

    #[test]
    fn current_year_passes() {
        let mut movie = valid_movie();
        movie.year = Utc::now().year();

        assert!(errors_for(&movie).is_empty());
    }

    #[test]
    fn no_lower_bound_on_year() {
        let mut movie = valid_movie();
        movie.year = -44;

        assert!(errors_for(&movie).is_empty());
    }

    #[test]
    fn zero_runtime_is_rejected() {
        let mut movie = valid_movie();
        movie.runtime = Runtime::new(0);

        assert_eq!(errors_for(&movie).get("runtime").unwrap(), "must be provided");
    }

    #[test]
    fn negative_runtime_is_rejected() {
        let mut movie = valid_movie();
        movie.runtime = Runtime::new(-10);

        assert_eq!(
            errors_for(&movie).get("runtime").unwrap(),
            "must be a positive integer"
        );
    }

    #[test]
    fn empty_genres_are_rejected() {
        let mut movie = valid_movie();
        movie.genres.clear();

        assert_eq!(
            errors_for(&movie).get("genres").unwrap(),
            "must contain at least 1 genre"
        );
    }

    #[test]
    fn too_many_genres_are_rejected() {
        let mut movie = valid_movie();
        movie.genres = (0..=MAX_GENRES).map(|i| format!("genre-{i}")).collect();

        assert_eq!(
            errors_for(&movie).get("genres").unwrap(),
            "must not contain more than 10 genres"
        );
    }

    #[test]
    fn duplicate_genres_are_rejected() {
        let mut movie = valid_movie();
        movie.genres = vec!["drama".to_string(), "drama".to_string()];

        assert_eq!(
            errors_for(&movie).get("genres").unwrap(),
            "must not contain duplicate genres"
        );
    }

    #[test]
    fn multiple_bad_fields_all_reported() {
        let mut movie = valid_movie();
        movie.title = String::new();
        movie.genres = vec!["a".to_string(), "a".to_string()];

        let errors = errors_for(&movie);
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("genres"));
        assert_eq!(errors.len(), 2);
    }
}
