pub mod commands;
pub mod events;
pub mod languages;
pub mod types;

pub use commands::TranslatorCommand;
pub use events::TranslatorEvent;
pub use languages::{DEFAULT_TARGET_LANGUAGE, SUPPORTED_LANGUAGES};
pub use types::{ChatMessage, Language, Sender, TranslationResult};
