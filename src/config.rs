use crate::common::{DEFAULT_TARGET_LANGUAGE, languages};
use crate::network::openai::{DEFAULT_API_URL, DEFAULT_MODEL};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Cấu hình khởi động, được inject vào UI và worker thay vì đọc biến môi trường toàn cục.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` when the key is absent or blank; submission stays blocked.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub target_language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new(
        api_key: Option<String>,
        api_url: String,
        model: String,
        target_language: String,
    ) -> Self {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let target_language = match languages::find(&target_language) {
            Some(language) => language.code.to_string(),
            None => {
                log::warn!(
                    "Unsupported target language `{}`; falling back to `{}`",
                    target_language,
                    DEFAULT_TARGET_LANGUAGE
                );
                DEFAULT_TARGET_LANGUAGE.to_string()
            }
        };

        Self {
            api_key,
            api_url,
            model,
            target_language,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
