pub mod categories;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /categories            GET list, POST create
/// /categories/{id}       PUT update, DELETE delete
/// /notes                 GET list (?categoryId, search), POST create
/// /notes/{id}            GET get, PUT update, DELETE delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/notes", notes::router())
}
