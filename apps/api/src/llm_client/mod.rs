/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions MUST go through this module.
///
/// Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all evaluation calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-flash";

const TEMPERATURE: f64 = 0.4;
const TOP_P: f64 = 1.0;
const TOP_K: u32 = 32;
const MAX_OUTPUT_TOKENS: u32 = 4096;

/// Harm categories blocked at medium severity and above.
const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response blocked by safety filter: {reason}")]
    Blocked { reason: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Request wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Response wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by the evaluation pipeline.
/// Wraps the Gemini `generateContent` API with the fixed sampling and
/// safety configuration.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a single `generateContent` call and returns the model's text
    /// verbatim, with no post-validation of its shape. When
    /// `response_schema` is given, the request additionally asks the API for
    /// schema-constrained JSON output.
    ///
    /// One outbound call per invocation; no retry.
    pub async fn generate(
        &self,
        prompt: &str,
        system: &str,
        response_schema: Option<&Value>,
    ) -> Result<String, LlmError> {
        let request_body = build_request(prompt, system, response_schema);

        let url = format!("{GEMINI_API_URL}/{MODEL}:generateContent?key={}", self.api_key);

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse a structured error message out of the body
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(LlmError::Blocked { reason });
        }

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyContent)?;

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(LlmError::Blocked {
                reason: "SAFETY".to_string(),
            });
        }

        let text = candidate
            .content
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded ({} chars)", text.len());

        Ok(text)
    }
}

fn build_request<'a>(
    prompt: &'a str,
    system: &'a str,
    response_schema: Option<&Value>,
) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        system_instruction: Content {
            parts: vec![Part { text: system }],
        },
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            response_mime_type: response_schema.map(|_| "application/json"),
            response_schema: response_schema.cloned(),
        },
        safety_settings: SAFETY_CATEGORIES
            .into_iter()
            .map(|category| SafetySetting {
                category,
                threshold: SAFETY_THRESHOLD,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_carries_fixed_generation_config() {
        let request = build_request("prompt text", "system text", None);
        let body = serde_json::to_value(&request).unwrap();

        let config = &body["generationConfig"];
        assert_eq!(config["temperature"], json!(0.4));
        assert_eq!(config["topP"], json!(1.0));
        assert_eq!(config["topK"], json!(32));
        assert_eq!(config["maxOutputTokens"], json!(4096));
        assert!(config.get("responseMimeType").is_none());
        assert!(config.get("responseSchema").is_none());
    }

    #[test]
    fn test_request_carries_four_safety_settings() {
        let request = build_request("p", "s", None);
        let body = serde_json::to_value(&request).unwrap();

        let settings = body["safetySettings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        for setting in settings {
            assert_eq!(setting["threshold"], json!("BLOCK_MEDIUM_AND_ABOVE"));
        }
        let categories: Vec<&str> = settings
            .iter()
            .map(|s| s["category"].as_str().unwrap())
            .collect();
        assert!(categories.contains(&"HARM_CATEGORY_HARASSMENT"));
        assert!(categories.contains(&"HARM_CATEGORY_HATE_SPEECH"));
        assert!(categories.contains(&"HARM_CATEGORY_SEXUALLY_EXPLICIT"));
        assert!(categories.contains(&"HARM_CATEGORY_DANGEROUS_CONTENT"));
    }

    #[test]
    fn test_request_with_schema_asks_for_json_output() {
        let schema = json!({"type": "object"});
        let request = build_request("p", "s", Some(&schema));
        let body = serde_json::to_value(&request).unwrap();

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], json!("application/json"));
        assert_eq!(config["responseSchema"], schema);
    }

    #[test]
    fn test_request_embeds_prompt_and_system_instruction() {
        let request = build_request("the prompt", "the system", None);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], json!("the prompt"));
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            json!("the system")
        );
    }

    #[test]
    fn test_blocked_response_deserializes() {
        let raw = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn test_candidate_text_deserializes() {
        let raw = r#"{
            "candidates": [
                {
                    "content": {"parts": [{"text": "hello"}]},
                    "finishReason": "STOP"
                }
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let candidate = &parsed.candidates[0];
        assert_eq!(candidate.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(
            candidate.content.as_ref().unwrap().parts[0].text.as_deref(),
            Some("hello")
        );
    }
}
