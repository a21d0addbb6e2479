use axum::Json;
use serde_json::{json, Value};

use crate::vocabulary::VOCABULARY_VERSION;

/// GET /health
/// Returns a simple status object with service and vocabulary versions.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "vocabulary_version": VOCABULARY_VERSION,
    }))
}
