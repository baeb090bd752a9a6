// src/web/handlers/system.rs

use rocket::serde::json::Json;
use tracing::info;

pub async fn health_handler() -> Json<&'static str> {
    info!("Health check");
    Json("OK")
}
