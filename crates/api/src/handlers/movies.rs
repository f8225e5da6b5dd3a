//! Handlers for movie records.

use axum::extract::{Path, State};
use axum::http::header::{HeaderValue, LOCATION};
use axum::http::StatusCode;
use axum::response::Response;
use marquee_core::movie::validate_movie;
use marquee_core::validator::Validator;
use marquee_db::models::movie::CreateMovie;
use marquee_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::StrictJson;
use crate::response::{write_json, Envelope};
use crate::state::AppState;

/// POST /v1/movies
///
/// Decode the body strictly, validate the candidate movie (all rule
/// failures accumulate into one response), insert, and reply 201 with a
/// `Location` header and the stored record in a `{"movie": ...}`
/// envelope.
pub async fn create_movie(
    State(state): State<AppState>,
    StrictJson(input): StrictJson<CreateMovie>,
) -> AppResult<Response> {
    let movie = input.into_movie();

    let mut v = Validator::new();
    validate_movie(&mut v, &movie);
    if !v.is_valid() {
        return Err(AppError::Validation(v.into_errors()));
    }

    let movie = MovieRepo::insert(&state.pool, &movie).await?;

    tracing::info!(movie_id = movie.id, "Movie created");

    let location = HeaderValue::from_str(&format!("/v1/movies/{}", movie.id))
        .map_err(|err| AppError::Internal(format!("invalid Location header: {err}")))?;

    write_json(
        StatusCode::CREATED,
        &Envelope::new("movie", &movie),
        [(LOCATION, location)],
    )
}

/// GET /v1/movies/{id}
pub async fn show_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id_param(&id)?;

    let movie = MovieRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound { entity: "movie", id })?;

    write_json(
        StatusCode::OK,
        &Envelope::new("movie", &movie),
        std::iter::empty(),
    )
}

/// PUT /v1/movies/{id} -- placeholder, contract shape only.
pub async fn update_movie(Path(_id): Path<String>) -> AppResult<Response> {
    Err(AppError::NotImplemented)
}

/// DELETE /v1/movies/{id} -- placeholder, contract shape only.
pub async fn delete_movie(Path(_id): Path<String>) -> AppResult<Response> {
    Err(AppError::NotImplemented)
}

/// Parse a path id into a positive i64.
///
/// A malformed or non-positive id is indistinguishable from a missing
/// resource to the client, so it maps to 404 rather than 400.
fn parse_id_param(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(AppError::InvalidIdParameter),
    }
}
