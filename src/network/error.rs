use thiserror::Error;

/// Mọi lỗi có thể xảy ra trong một lần gọi dịch.
///
/// `Display` của từng biến thể là thông điệp hiển thị thẳng lên banner lỗi.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("{0}")]
    Configuration(String),

    /// Non-2xx reply; `message` is the provider's error text or the HTTP status text.
    #[error("Failed to get translation: {message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid response format from provider: {0}")]
    ResponseFormat(String),

    #[error("Could not reach the translation provider: {0}")]
    Network(#[from] reqwest::Error),
}

impl TranslationError {
    pub fn missing_api_key() -> Self {
        TranslationError::Configuration("OpenAI API key is not provided.".to_string())
    }
}
