//! Wire types of the generative-text `generateContent` call.
//!
//! ```text
//! request:  { "contents": [ { "role": "user", "parts": [ { "text": "…" } ] } ],
//!             "generationConfig": { … } }            ← optional
//! response: { "candidates": [ { "content": { "parts": [ { "text": "…" } ] } } ] }
//! ```
//!
//! Every response field is optional on the wire. A response that is valid
//! JSON but carries no text is represented as an empty
//! [`GenerateContentResponse`] rather than an error.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// One piece of a content turn. Only text parts are modelled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Part {
    /// Text of the part, absent for non-text parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A single conversational turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    /// `"user"` on requests, usually `"model"` on responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered parts of the turn.
    #[serde(default)]
    pub parts: Vec<Part>,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Optional sampling parameters sent with a request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus sampling mass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Top-k sampling cutoff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// Upper bound on generated tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Body of a `generateContent` POST.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns sent to the model.
    pub contents: Vec<Content>,
    /// Sampling parameters; omitted from the body when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Build a request carrying a single user turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use elle_models::GenerateContentRequest;
    ///
    /// let req = GenerateContentRequest::user_prompt("Hello");
    /// let json = serde_json::to_string(&req).unwrap();
    /// assert_eq!(json, r#"{"contents":[{"role":"user","parts":[{"text":"Hello"}]}]}"#);
    /// ```
    pub fn user_prompt(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(text.into()),
                }],
            }],
            generation_config: None,
        }
    }

    /// Attach sampling parameters.
    #[must_use]
    pub fn with_generation_config(mut self, config: Option<GenerationConfig>) -> Self {
        self.generation_config = config;
        self
    }

    /// Text of the last part of the last turn, if any.
    pub fn last_text(&self) -> Option<&str> {
        self.contents.last()?.parts.last()?.text.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// One generated alternative.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Why generation stopped (`"STOP"`, `"SAFETY"`, …).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Body returned by a `generateContent` call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateContentResponse {
    /// Generated alternatives, possibly empty.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Build a response with a single text candidate.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![Part {
                        text: Some(text.into()),
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
        }
    }

    /// Text of the first part of the first candidate, if present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
