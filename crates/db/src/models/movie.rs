//! Movie row model and request DTOs.

use chrono::{DateTime, Utc};
use marquee_core::movie::Movie;
use marquee_core::runtime::Runtime;
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// `runtime` is stored as a plain integer column; conversion into the
/// domain [`Runtime`] wrapper happens in [`From<MovieRow> for Movie`].
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub year: i32,
    pub runtime: i32,
    pub genres: Vec<String>,
    pub version: i32,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id,
            created_at: row.created_at,
            title: row.title,
            year: row.year,
            runtime: Runtime::new(row.runtime),
            genres: row.genres,
            version: row.version,
        }
    }
}

/// DTO for `POST /v1/movies`.
///
/// Every member is optional so a syntactically valid body with missing
/// members decodes cleanly and the gaps surface as per-field validation
/// errors rather than decode errors. Unknown members are rejected at
/// decode time.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub runtime: Option<Runtime>,
    pub genres: Option<Vec<String>>,
}

impl CreateMovie {
    /// Build the candidate [`Movie`] for validation and insertion.
    ///
    /// Missing members become zero values (empty title, year 0, runtime
    /// 0, no genres) which the validation rules then reject field by
    /// field. Server-assigned columns start zeroed and are overwritten
    /// by the insert.
    pub fn into_movie(self) -> Movie {
        Movie {
            id: 0,
            created_at: Utc::now(),
            title: self.title.unwrap_or_default(),
            year: self.year.unwrap_or(0),
            runtime: self.runtime.unwrap_or_default(),
            genres: self.genres.unwrap_or_default(),
            version: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_into_domain_movie() {
        let row = MovieRow {
            id: 9,
            created_at: Utc::now(),
            title: "Alien".to_string(),
            year: 1979,
            runtime: 117,
            genres: vec!["horror".to_string(), "sci-fi".to_string()],
            version: 1,
        };

        let movie: Movie = row.into();

        assert_eq!(movie.id, 9);
        assert_eq!(movie.runtime, Runtime::new(117));
        assert_eq!(movie.genres.len(), 2);
    }

    #[test]
    fn missing_members_become_zero_values() {
        let input = CreateMovie {
            title: None,
            year: None,
            runtime: None,
            genres: None,
        };

        let movie = input.into_movie();

        assert!(movie.title.is_empty());
        assert_eq!(movie.year, 0);
        assert_eq!(movie.runtime, Runtime::new(0));
        assert!(movie.genres.is_empty());
        assert_eq!(movie.id, 0);
        assert_eq!(movie.version, 0);
    }
}
