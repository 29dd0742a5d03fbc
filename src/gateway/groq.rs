// src/gateway/groq.rs
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ContentGateway, GatewayError, GeneratedText};

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "llama-3.1-8b-instant";

/// Blocking client for the Groq chat-completions endpoint. One request per
/// call; the caller is suspended for the duration.
pub struct GroqClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Result<Self, GatewayError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self { http, api_key })
    }

    /// Returns None when GROQ_API_KEY is not set; the app then runs with
    /// every generation point showing its fallback text.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GROQ_API_KEY").ok()?;
        Self::new(api_key).ok()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl ContentGateway for GroqClient {
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<GeneratedText, GatewayError> {
        let request = ChatRequest {
            model: MODEL,
            max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(GatewayError::Provider(format!("{}: {}", status, body)));
        }

        let parsed: ChatResponse = response.json()?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::Provider("response contained no choices".to_string()))?;

        Ok(GeneratedText { content })
    }
}
