// Contract drafting: type registry, prompt text, assembly pipeline and handlers.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod assembler;
pub mod handlers;
pub mod prompts;
pub mod registry;
