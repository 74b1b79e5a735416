//! Client for the `generateContent` endpoint.
//!
//! [`ChatClient`] is the only thing the dashboard knows about the remote
//! service: one prompt in, one [`ChatReply`] (or [`SdkError`]) out. Only the
//! latest user message is sent; conversation history is not replayed.
//!
//! Outcomes are split three ways:
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Ok(ChatReply::Text)` | first candidate's first part carried text |
//! | `Ok(ChatReply::Empty)` | body was JSON but had no usable text |
//! | `Err(SdkError::Http)` / `Err(SdkError::Decode)` | transport failure / body not JSON |

use std::future::Future;

use elle_models::{GenerateContentRequest, GenerateContentResponse};
use reqwest::Url;
use tracing::{debug, warn};

use crate::config::ChatEndpointConfig;
use crate::error::SdkError;

/// Decoded result of a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// The model answered with this text.
    Text(String),
    /// The response was well-formed but carried no text.
    Empty,
}

/// Anything able to answer a single chat prompt.
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as a lone user turn and decode the answer.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<ChatReply, SdkError>> + Send;
}

/// Decode a raw response body.
///
/// Anything that is not JSON is a [`SdkError::Decode`]. JSON that does not
/// have the expected shape degrades to [`ChatReply::Empty`].
pub fn decode_reply(body: &[u8]) -> Result<ChatReply, SdkError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;

    let response = serde_json::from_value::<GenerateContentResponse>(value).unwrap_or_else(|e| {
        debug!(error = %e, "response JSON does not match generateContent shape");
        GenerateContentResponse::default()
    });

    Ok(match response.first_text() {
        Some(text) => ChatReply::Text(text.to_owned()),
        None => ChatReply::Empty,
    })
}

/// reqwest-backed [`ChatClient`].
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: Url,
    config: ChatEndpointConfig,
}

impl GeminiClient {
    /// Validate the configuration and build a client.
    pub fn new(config: ChatEndpointConfig) -> Result<Self, SdkError> {
        let mut endpoint = Url::parse(&config.url)
            .map_err(|e| SdkError::Config(format!("invalid chat URL {:?}: {e}", config.url)))?;

        if config.has_api_key() {
            endpoint.query_pairs_mut().append_pair("key", &config.api_key);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            config,
        })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ChatEndpointConfig {
        &self.config
    }

    /// The URL requests are posted to, including the `key` parameter.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ChatClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<ChatReply, SdkError> {
        let body = GenerateContentRequest::user_prompt(prompt)
            .with_generation_config(self.config.generation_config);

        let res = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "chat endpoint returned a non-success status");
        }

        let bytes = res.bytes().await?;
        decode_reply(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;

    #[derive(Debug, Clone)]
    struct Seen {
        query: HashMap<String, String>,
        content_type: Option<String>,
        body: Value,
    }

    type Log = Arc<Mutex<Vec<Seen>>>;

    async fn spawn_endpoint(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/generate")
    }

    fn recording_router(log: Log, reply: Value) -> Router {
        Router::new()
            .route(
                "/generate",
                post(
                    |State((log, reply)): State<(Log, Value)>,
                     Query(query): Query<HashMap<String, String>>,
                     headers: HeaderMap,
                     Json(body): Json<Value>| async move {
                        let content_type = headers
                            .get(header::CONTENT_TYPE)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        log.lock().unwrap().push(Seen { query, content_type, body });
                        Json(reply)
                    },
                ),
            )
            .with_state((log, reply))
    }

    fn client_for(url: &str, key: &str) -> GeminiClient {
        GeminiClient::new(ChatEndpointConfig::default().with_url(url).with_api_key(key)).unwrap()
    }

    #[test]
    fn decode_reply_text() {
        let body = br#"{"candidates":[{"content":{"parts":[{"text":"Hi there"}]}}]}"#;
        assert_eq!(decode_reply(body).unwrap(), ChatReply::Text("Hi there".into()));
    }

    #[test]
    fn decode_reply_empty_candidates() {
        assert_eq!(decode_reply(br#"{"candidates":[]}"#).unwrap(), ChatReply::Empty);
    }

    #[test]
    fn decode_reply_wrong_shape_is_empty() {
        // Valid JSON, unexpected structure: soft condition, not an error.
        assert_eq!(decode_reply(br#"{"candidates":"nope"}"#).unwrap(), ChatReply::Empty);
        assert_eq!(decode_reply(b"[1,2,3]").unwrap(), ChatReply::Empty);
        assert_eq!(
            decode_reply(br#"{"error":{"code":400,"message":"API key not valid"}}"#).unwrap(),
            ChatReply::Empty
        );
    }

    #[test]
    fn decode_reply_not_json_is_error() {
        let err = decode_reply(b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SdkError::Decode(_)));
    }

    #[test]
    fn new_rejects_invalid_url() {
        let err = GeminiClient::new(ChatEndpointConfig::default().with_url("not a url")).unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn key_query_parameter_only_when_configured() {
        let without = client_for("http://localhost:4100/generate", "");
        assert_eq!(without.endpoint().query(), None);

        let with = client_for("http://localhost:4100/generate", "abc");
        assert_eq!(with.endpoint().query(), Some("key=abc"));
    }

    #[tokio::test]
    async fn generate_posts_single_user_turn() {
        let log: Log = Arc::default();
        let reply = json!({ "candidates": [ { "content": { "parts": [ { "text": "Hi there" } ] } } ] });
        let url = spawn_endpoint(recording_router(log.clone(), reply)).await;

        let client = client_for(&url, "k3y");
        let answer = client.generate("Hello").await.unwrap();
        assert_eq!(answer, ChatReply::Text("Hi there".into()));

        let seen = log.lock().unwrap().clone();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].body,
            json!({ "contents": [ { "role": "user", "parts": [ { "text": "Hello" } ] } ] })
        );
        assert_eq!(seen[0].query.get("key").map(String::as_str), Some("k3y"));
        assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn generate_does_not_replay_history() {
        let log: Log = Arc::default();
        let url = spawn_endpoint(recording_router(log.clone(), json!({ "candidates": [] }))).await;
        let client = client_for(&url, "");

        client.generate("first").await.unwrap();
        client.generate("second").await.unwrap();

        let seen = log.lock().unwrap().clone();
        assert_eq!(seen.len(), 2);
        let contents = seen[1].body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["parts"][0]["text"], "second");
    }

    #[tokio::test]
    async fn generate_empty_candidates_is_empty_reply() {
        let log: Log = Arc::default();
        let url = spawn_endpoint(recording_router(log, json!({ "candidates": [] }))).await;
        let answer = client_for(&url, "").generate("Hello").await.unwrap();
        assert_eq!(answer, ChatReply::Empty);
    }

    #[tokio::test]
    async fn generate_error_status_with_json_body_is_empty_reply() {
        let router = Router::new().route(
            "/generate",
            post(|| async {
                (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": { "code": 403, "message": "forbidden" } })),
                )
            }),
        );
        let url = spawn_endpoint(router).await;
        let answer = client_for(&url, "").generate("Hello").await.unwrap();
        assert_eq!(answer, ChatReply::Empty);
    }

    #[tokio::test]
    async fn generate_non_json_body_is_decode_error() {
        let router = Router::new().route(
            "/generate",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
        );
        let url = spawn_endpoint(router).await;
        let err = client_for(&url, "").generate("Hello").await.unwrap_err();
        assert!(matches!(err, SdkError::Decode(_)));
    }

    #[tokio::test]
    async fn generate_connection_refused_is_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{addr}/generate"), "")
            .generate("Hello")
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Http(_)));
    }
}
