//! Contract Assembly — orchestrates a single `/generate` request.
//!
//! Flow: validate selection → template prompt → LLM (template) →
//!       [fields present] fill prompt → LLM (merge) → contract text.
//!
//! The two LLM calls are strictly sequential: the merge prompt embeds the template output.

use serde::Deserialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::contracts::prompts::{build_fill_prompt, build_template_prompt, FieldMap};
use crate::contracts::registry::{ContractRegistry, Selection};
use crate::errors::AppError;
use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::llm_client::{CompletionRequest, LlmGateway, MODEL};

/// Token budget for the template call.
pub const TEMPLATE_MAX_TOKENS: u32 = 1000;
/// Token budget for the merge call; the merged contract is longer than the bare template.
pub const FILL_MAX_TOKENS: u32 = 1500;
pub const TEMPERATURE: f32 = 0.7;

/// Request body for contract generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    /// Missing selection is treated like any other unknown code.
    #[serde(default)]
    pub selection: String,
    #[serde(default)]
    pub extracted_fields: Option<FieldMap>,
}

/// Runs the assembly pipeline and returns the final contract text.
///
/// Steps:
/// 1. registry.validate() → rejects unknown codes before any upstream call
/// 2. build_template_prompt() + llm.complete() → template text
/// 3. if fields are non-empty: build_fill_prompt() + llm.complete() → merged text
pub async fn assemble_contract(
    registry: &ContractRegistry,
    llm: &dyn LlmGateway,
    request: GenerateRequest,
) -> Result<String, AppError> {
    let span = info_span!("assemble_contract", assembly_id = %Uuid::new_v4());
    run_pipeline(registry, llm, request).instrument(span).await
}

async fn run_pipeline(
    registry: &ContractRegistry,
    llm: &dyn LlmGateway,
    request: GenerateRequest,
) -> Result<String, AppError> {
    // Step 1: Validate selection
    let contract_type = match registry.validate(&request.selection) {
        Selection::Valid { code, name } => {
            info!("Selection {code} accepted: {name}");
            name
        }
        Selection::Invalid => {
            info!("Rejected unknown selection {:?}", request.selection);
            return Err(AppError::InvalidSelection);
        }
    };

    // Step 2: Generate template
    let template = llm
        .complete(&completion(
            build_template_prompt(contract_type),
            TEMPLATE_MAX_TOKENS,
        ))
        .await?;
    info!("Template generated ({} chars)", template.chars().count());

    // Step 3: Merge fields, if any
    let fields = request.extracted_fields.unwrap_or_default();
    if fields.is_empty() {
        return Ok(template);
    }

    let fill_prompt = build_fill_prompt(&template, &fields)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize fields: {e}")))?;
    let contract = llm
        .complete(&completion(fill_prompt, FILL_MAX_TOKENS))
        .await?;
    info!(
        "Merged {} fields into template ({} chars)",
        fields.len(),
        contract.chars().count()
    );

    Ok(contract)
}

fn completion(user: String, max_tokens: u32) -> CompletionRequest {
    CompletionRequest {
        system: ASSISTANT_SYSTEM.to_string(),
        user,
        model: MODEL.to_string(),
        max_tokens,
        temperature: TEMPERATURE,
    }
}
