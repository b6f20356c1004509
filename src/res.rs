use axum::{
    debug_handler,
    extract::Path,
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};

use crate::{AppError, AppResult, AppState};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

const HTML: &str = "text/html; charset=utf-8";
const CSS: &str = "text/css; charset=utf-8";
const JS: &str = "text/javascript; charset=utf-8";

/// Front-end files served under `/static`.
static ASSETS: &[(&str, &str, &str)] = &[
    ("index.html", HTML, include_res!(str, "/static/index.html")),
    ("styles.css", CSS, include_res!(str, "/static/styles.css")),
    ("app.js", JS, include_res!(str, "/static/app.js")),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/static/{*file}", get(asset))
}

#[debug_handler]
pub async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

#[debug_handler]
pub async fn asset(Path(file): Path<String>) -> AppResult<Response> {
    let Some((_, content_type, body)) = ASSETS.iter().find(|(name, ..)| *name == file) else {
        return Err(AppError::NotFound);
    };

    Ok(([(header::CONTENT_TYPE, *content_type)], *body).into_response())
}
