// src/gateway/pixabay.rs
use serde::Deserialize;
use std::time::Duration;

use super::GatewayError;

const API_URL: &str = "https://pixabay.com/api/";

/// Blocking client for the Pixabay image-search API.
pub struct PixabayClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl PixabayClient {
    pub fn new(api_key: String) -> Result<Self, GatewayError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, api_key })
    }

    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("PIXABAY_API_KEY").ok()?;
        Self::new(api_key).ok()
    }

    /// First photo hit for the query, or None when the provider has no
    /// result. Both outcomes are valid; callers fall back to a placeholder.
    pub fn find_image(&self, query: &str) -> Result<Option<String>, GatewayError> {
        let response = self
            .http
            .get(API_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("image_type", "photo"),
                ("per_page", "3"),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(GatewayError::Provider(response.status().to_string()));
        }

        let parsed: SearchResponse = response.json()?;
        Ok(parsed.hits.into_iter().next().map(|hit| hit.webformat_url))
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: Vec<ImageHit>,
}

#[derive(Deserialize)]
struct ImageHit {
    #[serde(rename = "webformatURL")]
    webformat_url: String,
}

/// Placeholder shown when no provider image exists for the product.
pub fn placeholder_url(product_name: &str) -> String {
    format!(
        "https://via.placeholder.com/300x200.png?text={}",
        product_name.replace(' ', "+")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_encodes_spaces() {
        assert_eq!(
            placeholder_url("Nail Clippers"),
            "https://via.placeholder.com/300x200.png?text=Nail+Clippers"
        );
    }
}
