//! Axum route handlers for the Contracts API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contracts::assembler::{assemble_contract, GenerateRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    #[serde(default)]
    pub selection: String,
}

#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub contract: String,
}

/// POST /select
///
/// Confirms or rejects a contract type code. Never fails: rejection is a message.
pub async fn handle_select(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> Json<SelectResponse> {
    let selection = state.registry.validate(&request.selection);
    if !selection.is_valid() {
        debug!("Rejected selection {:?}", request.selection);
    }
    Json(SelectResponse {
        message: selection.message(),
    })
}

/// POST /generate
///
/// Drafts a contract for the selected type, merging `extracted_fields` when present.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<ContractResponse>, AppError> {
    let contract = assemble_contract(&state.registry, state.llm.as_ref(), request).await?;
    Ok(Json(ContractResponse { contract }))
}
