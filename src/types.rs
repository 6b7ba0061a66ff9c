use serde::{Deserialize, Serialize};

/// Tone applied when the caller doesn't pick one.
pub const DEFAULT_TONE: &str = "Natural & Human-like";

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

#[derive(Deserialize)]
pub struct HumanizeRequest {
    pub text: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

/// Success payload. `original_text` and `selected_tone` are verbatim echoes
/// of the request; only `humanized_text` carries model output.
#[derive(Serialize)]
pub struct HumanizeResponse {
    pub status: &'static str,
    pub original_text: String,
    pub selected_tone: String,
    pub humanized_text: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_defaults_when_omitted() {
        let req: HumanizeRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(req.text, "hello");
        assert_eq!(req.tone, "Natural & Human-like");
    }

    #[test]
    fn tone_is_kept_when_provided() {
        let req: HumanizeRequest =
            serde_json::from_str(r#"{"text": "hello", "tone": "Casual"}"#).unwrap();
        assert_eq!(req.tone, "Casual");
    }

    #[test]
    fn missing_text_fails_deserialization() {
        let res = serde_json::from_str::<HumanizeRequest>(r#"{"tone": "Casual"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn response_serializes_expected_keys() {
        let resp = HumanizeResponse {
            status: "success",
            original_text: "in".to_string(),
            selected_tone: "Casual".to_string(),
            humanized_text: "out".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["original_text"], "in");
        assert_eq!(json["selected_tone"], "Casual");
        assert_eq!(json["humanized_text"], "out");
    }
}
