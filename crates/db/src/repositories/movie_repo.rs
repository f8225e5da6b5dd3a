//! Repository for the `movies` table.

use marquee_core::movie::Movie;
use sqlx::PgPool;

use crate::models::movie::MovieRow;

/// Column list for `movies` queries.
const MOVIE_COLUMNS: &str = "id, created_at, title, year, runtime, genres, version";

/// Provides insert and lookup operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie, returning the stored record with the
    /// server-assigned `id`, `created_at` and `version`.
    pub async fn insert(pool: &PgPool, movie: &Movie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, year, runtime, genres) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {MOVIE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(&movie.title)
            .bind(movie.year)
            .bind(movie.runtime.minutes())
            .bind(&movie.genres)
            .fetch_one(pool)
            .await?;

        tracing::info!(movie_id = row.id, "Movie inserted");

        Ok(row.into())
    }

    /// Fetch a movie by its ID.
    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }
}
