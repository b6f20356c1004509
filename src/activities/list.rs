use axum::{debug_handler, extract::State, Json};

use crate::AppState;

use super::{Activities, Registry};

#[debug_handler(state = AppState)]
pub(crate) async fn list(State(registry): State<Registry>) -> Json<Activities> {
    Json(registry.get_all().await)
}
