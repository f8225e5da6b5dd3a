//! Route definitions for movie records.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies` under `/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", post(movies::create_movie))
        .route(
            "/movies/{id}",
            get(movies::show_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
}
