use axum::Router;

use crate::{answer, distance, phonetic, state::ApiState};

/// V1 API routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .merge(answer::routes())
        .merge(phonetic::routes())
        .merge(distance::routes())
}
