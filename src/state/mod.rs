// src/state/mod.rs
use std::collections::HashMap;

use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::gateway::{pixabay, ContentGateway, GroqClient, PixabayClient};
use crate::session::ConversationLog;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Home,
    Products,
    Chat,
}

// Product page modes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductView {
    Single,
    Compare,
}

/// Core application state: one catalog, one conversation log, the optional
/// external clients, and the minimal UI selections. Explicitly owned here
/// rather than ambient, so several independent sessions could coexist in
/// one process.
pub struct AppState {
    // Catalog data (read-only after load)
    pub catalog: Catalog,
    pub product_names: Vec<String>,

    // Session data
    pub conversation: ConversationLog,

    // External collaborators (None when the API key is absent)
    pub gateway: Option<GroqClient>,
    pub images: Option<PixabayClient>,

    // Minimal UI state
    pub current_screen: Screen,
    pub product_view: ProductView,
    pub selected_product: Option<String>,
    pub compare_first: Option<String>,
    pub compare_second: Option<String>,
    pub descriptions: HashMap<String, String>,
    pub chat_input: String,
    pub show_history: bool,
    pub error_message: Option<String>,

    // Sampled once per session instead of rerolling every frame
    pub featured_products: Vec<String>,

    // Resolved image URLs; avoids re-querying the provider on every repaint
    image_urls: HashMap<String, String>,

    // Last message raised in the modal; stops a persistent data error from
    // reopening the modal on the frame after it is dismissed
    reported_error: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let product_names = catalog.product_names();
        let featured_products: Vec<String> = product_names
            .choose_multiple(&mut rand::thread_rng(), 4)
            .cloned()
            .collect();

        Self {
            selected_product: product_names.first().cloned(),
            compare_first: product_names.first().cloned(),
            compare_second: product_names.get(1).cloned(),
            catalog,
            product_names,
            conversation: ConversationLog::new(),
            gateway: None,
            images: None,
            current_screen: Screen::Home,
            product_view: ProductView::Single,
            descriptions: HashMap::new(),
            chat_input: String::new(),
            show_history: false,
            error_message: None,
            featured_products,
            image_urls: HashMap::new(),
            reported_error: None,
        }
    }

    /// Raises the modal error window, once per distinct message. Views call
    /// this every frame while the underlying data is bad; without the latch
    /// the modal would reopen immediately after being dismissed.
    pub fn report_error(&mut self, message: String) {
        if self.reported_error.as_deref() != Some(message.as_str()) {
            self.reported_error = Some(message.clone());
            self.error_message = Some(message);
        }
    }

    /// Resolves (and memoizes) an image URL for the product. Provider
    /// failures and empty results both fall back to a placeholder; neither
    /// is fatal to the page.
    pub fn image_url(&mut self, product_name: &str) -> String {
        if let Some(url) = self.image_urls.get(product_name) {
            return url.clone();
        }

        let url = match self.images.as_ref().map(|client| client.find_image(product_name)) {
            Some(Ok(Some(url))) => url,
            Some(Ok(None)) | None => pixabay::placeholder_url(product_name),
            Some(Err(e)) => {
                log::warn!("Image lookup failed for {}: {}", product_name, e);
                pixabay::placeholder_url(product_name)
            }
        };
        self.image_urls.insert(product_name.to_string(), url.clone());
        url
    }

    /// One synchronous generation pass through the content gateway. Gateway
    /// errors become the caller's fallback string and never propagate.
    pub fn generate_text(&self, prompt: &str, max_tokens: u32, fallback: &str) -> String {
        match self.gateway.as_ref() {
            Some(client) => match client.generate(prompt, max_tokens) {
                Ok(generated) => generated.content,
                Err(e) => {
                    log::warn!("Content generation failed: {}", e);
                    fallback.to_string()
                }
            },
            None => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_error_raises_the_modal_once_per_distinct_message() {
        let mut state = AppState::new(Catalog::default());

        state.report_error("bad row".to_string());
        assert_eq!(state.error_message.as_deref(), Some("bad row"));

        // Dismissed; the same persistent failure must not reopen the modal
        // on the next frame.
        state.error_message = None;
        state.report_error("bad row".to_string());
        assert_eq!(state.error_message, None);

        // A different failure raises it again.
        state.report_error("another row".to_string());
        assert_eq!(state.error_message.as_deref(), Some("another row"));
    }
}
