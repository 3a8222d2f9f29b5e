//! Prompt contract with the provider.
//!
//! The provider's output shape depends on this wording: JSON only, with exactly
//! the two fields `detectedLanguage` and `translation`.

use crate::common::languages;

pub const SYSTEM_PROMPT: &str = r#"You are an expert multilingual translator. Your task is to detect the language of a given text and translate it into a specified target language.
You must respond ONLY with a valid JSON object. Do not add any extra text or explanations.
The JSON object must have the following structure:
{
  "detectedLanguage": "The full name of the detected language, e.g., 'Spanish'",
  "translation": "The translated text in the target language."
}"#;

/// Tin nhắn `user` gửi kèm: văn bản gốc và tên ngôn ngữ đích.
pub fn user_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Text: \"{}\"\nTarget Language: {}",
        text,
        languages::display_name(target_language)
    )
}
