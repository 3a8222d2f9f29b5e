/// Lệnh UI gửi xuống worker dịch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorCommand {
    /// Dịch một tin nhắn của người dùng.
    /// - request_id: định danh yêu cầu, được trả lại trong event tương ứng
    /// - text: nội dung đã trim
    /// - target_language: mã ngôn ngữ đích (ví dụ "es")
    Translate {
        request_id: u64,
        text: String,
        target_language: String,
    },
}

impl TranslatorCommand {
    pub fn request_id(&self) -> u64 {
        match self {
            TranslatorCommand::Translate { request_id, .. } => *request_id,
        }
    }
}
