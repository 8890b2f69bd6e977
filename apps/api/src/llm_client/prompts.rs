// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to every structured-output prompt: the reply is
/// one JSON document and nothing else.
pub const STRICT_JSON_INSTRUCTION: &str = "\
    The output must be a single, valid JSON object that strictly adheres \
    to the provided schema. Adhere strictly to the JSON schema for the \
    response. Only include the root properties for the sections requested. \
    No extra text or explanations outside the JSON structure.";
