use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const WELCOME_MESSAGE_ID: &str = "initial-welcome";

/// Ai là tác giả của một tin nhắn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Domain model đại diện một tin nhắn chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    /// Literal user input; empty for bot messages other than the welcome one.
    pub text: String,
    pub detected_language: Option<String>,
    pub translation: Option<String>,
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: Sender::User,
            text: text.into(),
            detected_language: None,
            translation: None,
            timestamp: Utc::now().timestamp(),
        }
    }

    pub fn bot(detected_language: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: Sender::Bot,
            text: String::new(),
            detected_language: Some(detected_language.into()),
            translation: Some(translation.into()),
            timestamp: Utc::now().timestamp(),
        }
    }

    /// Tin nhắn chào mừng hiển thị khi mở ứng dụng.
    pub fn welcome() -> Self {
        Self {
            id: WELCOME_MESSAGE_ID.to_string(),
            sender: Sender::Bot,
            text: "Welcome!".to_string(),
            detected_language: Some("English".to_string()),
            translation: Some("Welcome to Turing-Translator!".to_string()),
            timestamp: Utc::now().timestamp(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Một ngôn ngữ đích trong danh sách tĩnh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Kết quả provider trả về cho một yêu cầu dịch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub detected_language: String,
    pub translation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_carries_text_only() {
        let message = ChatMessage::user("Hola");
        assert!(message.is_user());
        assert_eq!(message.text, "Hola");
        assert!(message.detected_language.is_none());
        assert!(message.translation.is_none());
    }

    #[test]
    fn bot_message_has_empty_text() {
        let message = ChatMessage::bot("Spanish", "Hello");
        assert_eq!(message.sender, Sender::Bot);
        assert!(message.text.is_empty());
        assert_eq!(message.detected_language.as_deref(), Some("Spanish"));
        assert_eq!(message.translation.as_deref(), Some("Hello"));
    }

    #[test]
    fn message_ids_are_unique() {
        let first = ChatMessage::user("a");
        let second = ChatMessage::user("a");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn translation_result_uses_provider_field_names() {
        let result: TranslationResult =
            serde_json::from_str(r#"{"detectedLanguage":"French","translation":"Hi"}"#)
                .unwrap();
        assert_eq!(result.detected_language, "French");
        assert_eq!(result.translation, "Hi");
    }
}
