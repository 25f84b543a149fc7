use axum::body::Bytes;
use axum::http::StatusCode;
use axum::routing::{any, get};
use axum::Router;

/// Fixed greeting served on the root path.
const GREETING: &str = "Webhooks with Rust";

/// The full route table. Anything else gets axum's default 404.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/webhook", any(webhook))
}

async fn hello() -> &'static str {
    log::debug!("sending greeting");
    GREETING
}

/// Echoes the raw request body to the process's stdout.
///
/// Accepts any method. The body must decode as UTF-8 in full before anything
/// is printed; a payload that doesn't is answered with 500 and leaves stdout
/// untouched. Success is an empty 200.
async fn webhook(body: Bytes) -> Result<(), StatusCode> {
    log::debug!(bytes = body.len(); "received webhook payload");

    let text = String::from_utf8(body.to_vec()).map_err(|e| {
        log::error!("webhook payload is not valid utf-8: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    println!("{text}");
    Ok(())
}
