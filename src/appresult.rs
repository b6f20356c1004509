use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::activities::RegistryError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    Registry(RegistryError),
    /// Request didn't carry what the handler needs (e.g. no `email` query).
    Unprocessable(String),
    NotFound,
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct Detail {
    pub detail: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        use RegistryError::*;
        match self {
            AppError::Registry(ActivityNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Registry(
                AlreadyRegistered { .. }
                | NotRegistered { .. }
                | ActivityFull { .. }
                | InvalidEmail { .. },
            ) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            AppError::Registry(err) => {
                tracing::debug!(error = ?err, "request rejected");
                err.to_string()
            }
            AppError::Unprocessable(msg) => msg,
            AppError::NotFound => "Not Found".to_owned(),
        };

        (status, Json(Detail { detail })).into_response()
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_map_to_status() {
        let not_found = AppError::from(RegistryError::ActivityNotFound {
            activity: "x".to_owned(),
        });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let dup = AppError::from(RegistryError::AlreadyRegistered {
            activity: "x".to_owned(),
            email: "a@x.edu".to_owned(),
        });
        assert_eq!(dup.status(), StatusCode::BAD_REQUEST);

        let missing = AppError::from(RegistryError::NotRegistered {
            activity: "x".to_owned(),
            email: "a@x.edu".to_owned(),
        });
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unprocessable_is_422() {
        let err = AppError::Unprocessable("Missing or invalid query parameter: email".to_owned());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
