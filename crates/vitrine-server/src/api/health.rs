//! Health probe

use actix_web::{Responder, get, web};

use crate::model::{AppState, Result};

/// GET /health
#[get("/health")]
pub async fn health(data: web::Data<AppState>) -> impl Responder {
    match data.store.find_all().await {
        Ok(_) => Result::<&str>::http_success("UP"),
        Err(e) => Result::<&str>::http_response(503, 503, e.to_string(), "DOWN"),
    }
}
