//! Mock generative-text endpoint.
//!
//! Answers `POST /v1beta/models/{model}:generateContent` by echoing the last
//! user text, so the dashboard can chat without network access.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use elle_models::{GenerateContentRequest, GenerateContentResponse};
use serde_json::json;
use tracing::{info, warn};

const METHOD_SUFFIX: &str = ":generateContent";

fn app() -> Router {
    Router::new().route("/v1beta/models/{*target}", post(generate_content))
}

async fn generate_content(
    Path(target): Path<String>,
    Json(req): Json<GenerateContentRequest>,
) -> Response {
    let Some(model) = target.strip_suffix(METHOD_SUFFIX) else {
        warn!(%target, "unsupported model method");
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "code": 404, "message": format!("unknown method: {target}") } })),
        )
            .into_response();
    };

    match req.last_text() {
        Some(text) => {
            info!(model, chars = text.chars().count(), "generateContent");
            Json(GenerateContentResponse::from_text(format!("Elle heard: {text}"))).into_response()
        }
        None => {
            info!(model, "generateContent without text");
            Json(GenerateContentResponse::default()).into_response()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = match std::env::var("MOCK_GEMINI_PORT") {
        Ok(p) => p.parse()?,
        Err(_) => 4100,
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("MOCK-GEMINI: listening on http://localhost:{port}/v1beta/models/mock:generateContent");
    axum::serve(listener, app()).await?;
    Ok(())
}
