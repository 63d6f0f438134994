//! Admin write path for content editors
//!
//! Unlike the read path, write failures are surfaced: an operator needs
//! to know an edit did not persist.

use actix_web::{Responder, get, post, web};
use serde::Deserialize;

use crate::model::{AppState, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigUpsertParam {
    key: String,
    value: String,
    description: Option<String>,
}

/// GET /api/admin/configs
#[get("configs")]
pub async fn list_configs(data: web::Data<AppState>) -> impl Responder {
    match data.store.find_all().await {
        Ok(entries) => Result::<Vec<vitrine_persistence::ConfigEntryData>>::http_success(entries),
        Err(e) => {
            tracing::error!(error = %e, "failed to list site configs");
            Result::<String>::http_response(500, 500, e.to_string(), String::new())
        }
    }
}

/// POST /api/admin/config
#[post("config")]
pub async fn update_config(
    params: web::Json<ConfigUpsertParam>,
    data: web::Data<AppState>,
) -> impl Responder {
    if params.key.trim().is_empty() {
        return Result::<String>::http_response(
            400,
            400,
            "parameter 'key' is required".to_string(),
            String::new(),
        );
    }

    match data
        .store
        .upsert(&params.key, &params.value, params.description.as_deref())
        .await
    {
        Ok(entry) => {
            tracing::info!(key = %params.key, "site config updated");
            Result::<vitrine_persistence::ConfigEntryData>::http_success(entry)
        }
        Err(e) => {
            tracing::error!(key = %params.key, error = %e, "site config update failed");
            Result::<String>::http_response(500, 500, e.to_string(), String::new())
        }
    }
}
