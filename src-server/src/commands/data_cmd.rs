//! Collection Commands
//!
//! Save and read back the whole wishlist.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use planejaqui_core::persistence::codec;
use planejaqui_core::Item;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
}

/// Replace the stored collection with the request body
///
/// The body must be a JSON array of valid item records. A blank body is
/// rejected rather than read as an empty collection.
pub async fn save_data(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<SaveResponse>, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::BadRequest("invalid collection: empty body".to_string()));
    }
    let items = codec::decode_items(&body)?;
    state.repository.replace(&items).await?;
    tracing::info!("Saved {} items", items.len());

    Ok(Json(SaveResponse {
        success: true,
        message: "Dados salvos com sucesso!".to_string(),
    }))
}

/// Current stored collection
pub async fn load_data(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state
        .repository
        .load()
        .await
        .map_err(|e| ApiError::Storage(e.to_string()))?;
    tracing::debug!("Serving {} items", items.len());
    Ok(Json(items))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
