//! Wire types for the Ollama generation API

use serde::{Deserialize, Serialize};

/// `POST /api/generate` request body
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    /// Always false - partial-token streaming is out of scope
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// Generation options forwarded to the backend
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerateOptions {
    pub num_ctx: u32,
    pub temperature: f32,
}

/// `POST /api/generate` response body
///
/// Only the generated text matters here; a missing field is treated as an
/// empty response rather than a failure.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_options() {
        let request = GenerateRequest {
            model: "llama2:7b",
            prompt: "Say hello briefly",
            stream: false,
            options: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama2:7b");
        assert_eq!(json["stream"], false);
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_request_serializes_options() {
        let request = GenerateRequest {
            model: "phi",
            prompt: "synthesize",
            stream: false,
            options: Some(GenerateOptions {
                num_ctx: 2048,
                temperature: 0.7,
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["options"]["num_ctx"], 2048);
    }

    #[test]
    fn test_response_defaults_missing_text() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.response, "");

        let response: GenerateResponse =
            serde_json::from_str(r#"{"response": "hi", "done": true}"#).unwrap();
        assert_eq!(response.response, "hi");
    }
}
