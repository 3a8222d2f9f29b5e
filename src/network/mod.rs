pub mod error;
pub mod openai;
pub mod prompt;
pub mod worker;

pub use error::TranslationError;
pub use openai::TranslationClient;
pub use worker::TranslationWorker;

#[cfg(test)]
pub(crate) mod test_support;
