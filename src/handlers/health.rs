use axum::response::Json;
use serde_json::{json, Value};

use crate::utils::logging::log_health_check;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "cpf-auth-lambda",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
