pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// ```text
/// /movies          POST   -> create_movie
/// /movies/{id}     GET    -> show_movie
///                  PUT    -> update_movie (501)
///                  DELETE -> delete_movie (501)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}
