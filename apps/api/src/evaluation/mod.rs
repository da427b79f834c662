// Evaluation pipeline: extract → build prompt → call model → assess.
// All LLM calls go through llm_client — no direct Gemini API calls here.

pub mod handlers;
pub mod prompts;
pub mod verdict;
