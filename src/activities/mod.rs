mod email;
mod list;
mod registry;
mod seed;
mod signup;
mod unregister;

use axum::{
    extract::{rejection::QueryRejection, Query},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult, AppState};

pub use registry::{Activities, Activity, Registry, RegistryError, SignupPolicy};
pub use seed::{builtin as builtin_activities, from_file as activities_from_file};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list::list))
        .route("/activities/{name}/signup", post(signup::signup))
        .route("/activities/{name}/unregister", delete(unregister::unregister))
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmailQuery {
    email: String,
}

/// Confirmation body for signup/unregister.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

fn email_param(query: Result<Query<EmailQuery>, QueryRejection>) -> AppResult<String> {
    match query {
        Ok(Query(EmailQuery { email })) => Ok(email),
        Err(rejection) => {
            tracing::debug!(%rejection, "bad email query");
            Err(AppError::Unprocessable(format!(
                "Missing or invalid query parameter: email ({})",
                rejection.body_text()
            )))
        }
    }
}
