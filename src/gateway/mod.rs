// src/gateway/mod.rs
use thiserror::Error;

pub mod groq;
pub mod pixabay;

pub use groq::GroqClient;
pub use pixabay::PixabayClient;

/// Failure talking to an external provider. Always recoverable: call sites
/// substitute a fallback value instead of propagating this further.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Error while connecting to the API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Provider rejected the request: {0}")]
    Provider(String),
}

#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub content: String,
}

/// Single-attempt, synchronous text generation. No retries and no caching:
/// identical prompts issue independent calls.
pub trait ContentGateway {
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<GeneratedText, GatewayError>;
}
