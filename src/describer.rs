//! Image descriptions from a vision-language model.
//!
//! [`OllamaClient`] talks to the Ollama `/api/chat` endpoint with the
//! blocking reqwest client, one request per image.

use std::fs;
use std::path::Path;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

pub const DEFAULT_MODEL: &str = "llava";
pub const DEFAULT_HOST: &str = "http://localhost:11434";
pub const PROMPT: &str = "Describe the gesture in the image, focus on the hands gesture:";

/// Produces a free-text description of one image.
pub trait Describer {
    fn describe(&mut self, image: &Path) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
    images: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: String,
    pub content: String,
}

/// Blocking client for an Ollama server.
pub struct OllamaClient {
    client: reqwest::blocking::Client,
    host: String,
    model: String,
    prompt: String,
}

impl OllamaClient {
    /// * `host` - Base URL, e.g. `http://localhost:11434`.
    /// * `model` - Model identifier, e.g. `llava`.
    ///
    /// The underlying client has no request timeout: a slow model blocks
    /// the run until it answers.
    pub fn new(host: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self::with_client(client, host, model))
    }

    pub fn with_client(
        client: reqwest::blocking::Client,
        host: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            host: host.into(),
            model: model.into(),
            prompt: PROMPT.to_string(),
        }
    }

    /// Sends one chat request with `image` attached and returns the
    /// model's reply untouched.
    pub fn chat(&self, image: &Path) -> Result<String> {
        let bytes = fs::read(image).map_err(|e| Error::io(image, e))?;
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &self.prompt,
                images: vec![STANDARD.encode(bytes)],
            }],
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.host))
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json()?;
        debug!(role = %parsed.message.role, chars = parsed.message.content.len(), "model replied");
        Ok(parsed.message.content)
    }
}

impl Describer for OllamaClient {
    fn describe(&mut self, image: &Path) -> Result<String> {
        info!("Describing image: {}", image.display());
        self.chat(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_chat_api() {
        let body = ChatRequest {
            model: "llava",
            messages: vec![ChatMessage {
                role: "user",
                content: PROMPT,
                images: vec![STANDARD.encode(b"abc")],
            }],
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "llava",
                "messages": [{
                    "role": "user",
                    "content": "Describe the gesture in the image, focus on the hands gesture:",
                    "images": ["YWJj"],
                }],
                "stream": false,
            })
        );
    }

    #[test]
    fn response_content_is_kept_verbatim() {
        let raw = r#"{"model":"llava","created_at":"2024-01-01T00:00:00Z",
            "message":{"role":"assistant","content":"  A raised thumb. \n"},"done":true}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.message.content, "  A raised thumb. \n");
    }

    #[test]
    fn unreadable_image_fails_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        // Port 9 is discard; the request must never be attempted.
        let client = OllamaClient::new("http://127.0.0.1:9", "llava").unwrap();
        let missing = dir.path().join("gone.jpg");
        assert!(matches!(client.chat(&missing), Err(Error::Io { .. })));
    }
}
