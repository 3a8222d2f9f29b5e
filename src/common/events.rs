use crate::common::types::TranslationResult;

/// Sự kiện từ worker dịch gửi lên UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorEvent {
    Completed {
        request_id: u64,
        result: TranslationResult,
    },
    /// `message` is already human-readable and goes straight into the error banner.
    Failed { request_id: u64, message: String },
}

impl TranslatorEvent {
    pub fn request_id(&self) -> u64 {
        match self {
            TranslatorEvent::Completed { request_id, .. }
            | TranslatorEvent::Failed { request_id, .. } => *request_id,
        }
    }
}
