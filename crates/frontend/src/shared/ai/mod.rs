//! Tag suggestion client: one outbound call to the Gemini `generateContent`
//! endpoint, reply parsed into a list of tags.

pub mod parse;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MODEL_NAME: &str = "gemini-2.5-flash-preview-04-17";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Build-time credential. Without it every suggestion call fails fast with
// `Unavailable`; the rest of the app keeps working.
const API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

/// Failure modes of the suggestion call. Each display message is shown to
/// the user as-is in the form error line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("AI service is not available. Check API key configuration.")]
    Unavailable,

    #[error("Invalid Gemini API key. Please check your configuration.")]
    InvalidApiKey,

    /// Reply was received but is not a JSON array of strings. Carries a
    /// truncated excerpt of the raw text for diagnostics.
    #[error("AI returned malformed data. Raw response: {excerpt}...")]
    Malformed { excerpt: String },

    /// Transport or HTTP failure; detail is kept for the console log only
    #[error("Failed to get tag suggestions from AI.")]
    Request(String),
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    /// Kept low so suggestions stay focused
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn build_prompt(name: &str, description: &str) -> String {
    format!(
        "Given the following product information:\n\
         Product Name: \"{}\"\n\
         Product Description: \"{}\"\n\n\
         Suggest between 3 to 7 relevant e-commerce tags for this product.\n\
         The tags should be concise, lowercase, and suitable for filtering and searching.\n\
         Return the tags as a JSON array of strings. For example: [\"tag1\", \"tag2\", \"tag3\"].\n\
         Do not include any other text or explanation outside the JSON array.",
        name, description
    )
}

fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().map(|p| p.text).collect();
    (!text.is_empty()).then_some(text)
}

/// Ask the model for 3-7 lowercase tags for the given product.
pub async fn suggest_tags(name: &str, description: &str) -> Result<Vec<String>, SuggestError> {
    let api_key = API_KEY
        .filter(|key| !key.is_empty())
        .ok_or(SuggestError::Unavailable)?;

    let url = format!(
        "{}/{}:generateContent?key={}",
        API_BASE, MODEL_NAME, api_key
    );
    let body = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(name, description),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            temperature: 0.5,
        },
    };

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| SuggestError::Request(format!("failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| SuggestError::Request(format!("failed to send request: {}", e)))?;

    let status = response.status();
    if status == 401 || status == 403 {
        return Err(SuggestError::InvalidApiKey);
    }
    if !response.ok() {
        // Gemini reports a bad key as HTTP 400 with an explanatory body
        let body_text = response.text().await.unwrap_or_default();
        if body_text.contains("API key not valid") {
            return Err(SuggestError::InvalidApiKey);
        }
        return Err(SuggestError::Request(format!(
            "HTTP {}: {}",
            status, body_text
        )));
    }

    let reply: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| SuggestError::Request(format!("failed to parse response envelope: {}", e)))?;

    let raw = first_candidate_text(reply)
        .ok_or_else(|| SuggestError::Request("reply contained no text".to_string()))?;

    parse::parse_tag_array(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_name_and_description() {
        let prompt = build_prompt("Desk Lamp", "Adjustable LED lamp.");
        assert!(prompt.contains("Product Name: \"Desk Lamp\""));
        assert!(prompt.contains("Product Description: \"Adjustable LED lamp.\""));
        assert!(prompt.contains("JSON array of strings"));
    }

    #[test]
    fn candidate_text_concatenates_parts() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![
                        Part {
                            text: "[\"a\",".to_string(),
                        },
                        Part {
                            text: "\"b\"]".to_string(),
                        },
                    ],
                }),
            }],
        };
        assert_eq!(first_candidate_text(response).unwrap(), "[\"a\",\"b\"]");
    }

    #[test]
    fn empty_reply_yields_none() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(first_candidate_text(response).is_none());
    }
}
