use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};

use crate::common::TranslationResult;
use crate::config::AppConfig;

use super::error::TranslationError;
use super::prompt::{SYSTEM_PROMPT, user_prompt};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIResponseMessage>,
}

#[derive(Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct OpenAIErrorResponse {
    error: Option<OpenAIErrorBody>,
}

#[derive(Deserialize)]
struct OpenAIErrorBody {
    message: Option<String>,
}

/// Nội dung JSON mà model trả về bên trong `choices[0].message.content`.
#[derive(Deserialize)]
struct TranslationPayload {
    #[serde(rename = "detectedLanguage")]
    detected_language: Option<String>,
    translation: Option<String>,
}

/// Client gọi endpoint chat-completions để phát hiện ngôn ngữ và dịch.
///
/// Mỗi lần `translate` gửi đúng một request, không retry, không timeout riêng.
pub struct TranslationClient {
    http: HttpClient,
    api_url: String,
    model: String,
}

impl TranslationClient {
    pub fn new(
        api_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, TranslationError> {
        let http = HttpClient::builder().build()?;
        Ok(Self::with_http(http, api_url, model))
    }

    pub fn with_http(http: HttpClient, api_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, TranslationError> {
        Self::new(config.api_url.clone(), config.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Dịch `text` sang `target_language` (mã ngôn ngữ, ví dụ "es").
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
        api_key: &str,
    ) -> Result<TranslationResult, TranslationError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(TranslationError::missing_api_key());
        }

        let auth_header = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
            TranslationError::Configuration(format!("Invalid API key format: {}", e))
        })?;

        let request = build_request(&self.model, text, target_language);

        let response = self
            .http
            .post(&self.api_url)
            .header(AUTHORIZATION, auth_header)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Provider API error ({}): {}", status, body);
            return Err(upstream_error(status, &body));
        }

        parse_completion(&body)
    }
}

fn build_request(model: &str, text: &str, target_language: &str) -> OpenAIChatRequest {
    OpenAIChatRequest {
        model: model.to_string(),
        messages: vec![
            OpenAIMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            OpenAIMessage {
                role: "user".to_string(),
                content: user_prompt(text, target_language),
            },
        ],
        response_format: ResponseFormat {
            format_type: "json_object".to_string(),
        },
    }
}

/// Ưu tiên thông điệp lỗi của provider, nếu không có thì dùng status text.
fn upstream_error(status: StatusCode, body: &str) -> TranslationError {
    let provider_message = serde_json::from_str::<OpenAIErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .and_then(|error| error.message)
        .filter(|message| !message.trim().is_empty());

    let message = provider_message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string())
    });

    TranslationError::Upstream {
        status: status.as_u16(),
        message,
    }
}

fn parse_completion(body: &str) -> Result<TranslationResult, TranslationError> {
    let response: OpenAIResponse = serde_json::from_str(body)
        .map_err(|e| TranslationError::ResponseFormat(format!("response is not JSON ({})", e)))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| TranslationError::ResponseFormat("No content found.".to_string()))?;

    parse_translation_content(&content)
}

fn parse_translation_content(content: &str) -> Result<TranslationResult, TranslationError> {
    let payload: TranslationPayload = serde_json::from_str(content).map_err(|e| {
        TranslationError::ResponseFormat(format!("content is not valid JSON ({})", e))
    })?;

    match (payload.detected_language, payload.translation) {
        (Some(detected_language), Some(translation))
            if !detected_language.is_empty() && !translation.is_empty() =>
        {
            Ok(TranslationResult {
                detected_language,
                translation,
            })
        }
        _ => Err(TranslationError::ResponseFormat(
            "Invalid JSON structure in provider response.".to_string(),
        )),
    }
}
