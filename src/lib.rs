pub mod activities;
pub mod appresult;
pub mod config;
pub mod res;

use axum::{extract::FromRef, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use activities::{Activities, Activity, Registry, RegistryError, SignupPolicy};
pub use appresult::{AppError, AppResult};
pub use config::Config;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub registry: Registry,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// State for a fresh process: built-in (or configured) activities
    /// with the configured signup policy.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let activities = match &config.activities_file {
            Some(path) => activities::activities_from_file(path).await?,
            None => activities::builtin_activities()?,
        };
        tracing::info!(count = activities.len(), "activities loaded");

        Ok(Self::new(Registry::new(activities).with_policy(config.policy)))
    }
}

/// The whole HTTP surface.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(res::router())
        .merge(activities::router())
        .fallback(|| async { AppError::NotFound })
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub fn app_with_config(state: AppState, config: &Config) -> Router {
    let app = app(state);
    if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
