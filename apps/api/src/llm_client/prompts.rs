// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System message sent with every chat-completion call.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful assistant.";
