//! Gemini `generateContent` client.
//!
//! Speaks the REST surface directly: one POST per generation, API key in the
//! `x-goog-api-key` header, and only the fields this gateway needs are
//! modeled. Unknown response fields (usage metadata, safety ratings, finish
//! reasons) are ignored.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::generate::{GenerateError, TextGenerator};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/models/{}:generateContent", self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status,
                message: api_error_message(&raw),
            });
        }

        let reply: GenerateContentResponse = response.json().await?;
        extract_text(reply)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Pull the diagnostic message out of Gemini's error envelope, falling back
/// to the raw body when it isn't the documented JSON shape.
fn api_error_message(raw: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(raw) {
        Ok(envelope) => envelope.error.message,
        Err(_) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                "no error detail".to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

/// The reply's text is the concatenated text parts of the first candidate.
/// A reply without any usable text (no candidates, safety-blocked content,
/// non-text parts only) is an error, matching the all-or-nothing contract.
fn extract_text(reply: GenerateContentResponse) -> Result<String, GenerateError> {
    let text: String = reply
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerateError::Empty);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateContentResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn extracts_single_part_text() {
        let reply = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "rewritten"}], "role": "model"},
                "finishReason": "STOP"}]}"#,
        );
        assert_eq!(extract_text(reply).unwrap(), "rewritten");
    }

    #[test]
    fn concatenates_multiple_parts() {
        let reply = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "first "}, {"text": "second"}]}}]}"#,
        );
        assert_eq!(extract_text(reply).unwrap(), "first second");
    }

    #[test]
    fn no_candidates_is_empty_error() {
        let reply = parse(r#"{"candidates": []}"#);
        assert!(matches!(extract_text(reply), Err(GenerateError::Empty)));
    }

    #[test]
    fn candidate_without_content_is_empty_error() {
        let reply = parse(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#);
        assert!(matches!(extract_text(reply), Err(GenerateError::Empty)));
    }

    #[test]
    fn non_text_parts_are_empty_error() {
        let reply = parse(
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png"}}]}}]}"#,
        );
        assert!(matches!(extract_text(reply), Err(GenerateError::Empty)));
    }

    #[test]
    fn error_envelope_message_is_surfaced() {
        let raw = r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#;
        assert_eq!(api_error_message(raw), "API key not valid");
    }

    #[test]
    fn unparseable_error_body_falls_back_to_raw() {
        assert_eq!(api_error_message("upstream exploded"), "upstream exploded");
        assert_eq!(api_error_message("   "), "no error detail");
    }

    #[test]
    fn request_body_has_gemini_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }
}
