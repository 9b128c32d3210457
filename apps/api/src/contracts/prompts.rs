// All LLM prompt text for contract drafting.
// Reuses the shared system message from llm_client::prompts.

use std::collections::BTreeMap;

use serde_json::Value;

/// Field name → value supplied by the caller. Any JSON value is accepted and passed
/// through to the merge prompt as-is; `null` means "no value yet".
pub type FieldMap = BTreeMap<String, Value>;

/// Template request. Replace `{contract_type}` before sending.
pub const TEMPLATE_PROMPT_TEMPLATE: &str = "'{contract_type}'의 표준 계약서를 작성해 주세요.";

pub fn build_template_prompt(contract_type: &str) -> String {
    TEMPLATE_PROMPT_TEMPLATE.replace("{contract_type}", contract_type)
}

/// Embeds the generated template and the caller's fields in the merge instruction.
///
/// Fields are serialized as compact JSON with non-ASCII text kept as-is.
pub fn build_fill_prompt(template: &str, fields: &FieldMap) -> Result<String, serde_json::Error> {
    let fields_json = serde_json::to_string(fields)?;

    // Caller text is inserted verbatim; `{...}` inside it is never a placeholder.
    Ok(format!(
        "다음 계약서 템플릿에 JSON 데이터의 값을 적절한 위치에 삽입해주세요.

계약서 템플릿:
{template}

JSON 데이터:
{fields_json}

요구사항:
1. JSON 데이터의 각 필드를 계약서의 적절한 위치에 삽입해주세요.
2. 데이터가 없는 필드는 '[필드명]' 형식으로 남겨두세요.
3. 계약서의 전체적인 형식과 구조는 유지해주세요."
    ))
}
