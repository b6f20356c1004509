use axum::{
    debug_handler,
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::{AppResult, AppState};

use super::{email_param, EmailQuery, Message, Registry};

#[debug_handler(state = AppState)]
pub(crate) async fn signup(
    Path(name): Path<String>,
    State(registry): State<Registry>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> AppResult<Json<Message>> {
    let email = email_param(query)?;

    registry.add_participant(&name, &email).await?;

    Ok(Json(Message {
        message: format!("Signed up {email} for {name}"),
    }))
}
