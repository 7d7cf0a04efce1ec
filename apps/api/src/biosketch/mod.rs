// Biosketch generation: one endpoint, one prompt, one LLM call.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
