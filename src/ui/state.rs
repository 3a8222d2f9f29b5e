use crate::common::{ChatMessage, TranslatorCommand, TranslatorEvent, languages};

pub const MISSING_KEY_ON_STARTUP: &str =
    "OpenAI API key not found. Please set OPENAI_API_KEY in your environment or .env file.";
pub const MISSING_KEY_ON_SUBMIT: &str = "Please set your OpenAI API key in OPENAI_API_KEY.";

/// Trạng thái của vòng đời một lần dịch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading { request_id: u64 },
    Error(String),
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub target_language: String,
    pub status: Status,
    api_key_configured: bool,
    next_request_id: u64,
}

impl AppState {
    pub fn new(api_key_configured: bool, target_language: String) -> Self {
        let status = if api_key_configured {
            Status::Idle
        } else {
            Status::Error(MISSING_KEY_ON_STARTUP.to_string())
        };

        Self {
            messages: vec![ChatMessage::welcome()],
            input_text: String::new(),
            target_language,
            status,
            api_key_configured,
            next_request_id: 1,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn api_key_configured(&self) -> bool {
        self.api_key_configured
    }

    /// Ô nhập bị khóa khi đang dịch hoặc chưa có API key.
    pub fn input_enabled(&self) -> bool {
        self.api_key_configured && !self.is_loading()
    }

    pub fn can_submit(&self) -> bool {
        self.input_enabled() && !self.input_text.trim().is_empty()
    }

    /// Gửi nội dung ô nhập. Trả về lệnh cho worker nếu submission được chấp nhận.
    pub fn submit(&mut self) -> Option<TranslatorCommand> {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return None;
        }

        if !self.api_key_configured {
            self.status = Status::Error(MISSING_KEY_ON_SUBMIT.to_string());
            return None;
        }

        if let Status::Loading { request_id } = self.status {
            log::debug!("Request {request_id} still in flight; ignoring submit");
            return None;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        self.messages.push(ChatMessage::user(text.clone()));
        self.input_text.clear();
        self.status = Status::Loading { request_id };

        Some(TranslatorCommand::Translate {
            request_id,
            text,
            target_language: self.target_language.clone(),
        })
    }

    pub fn apply_event(&mut self, event: TranslatorEvent) {
        let in_flight = match self.status {
            Status::Loading { request_id } => Some(request_id),
            _ => None,
        };

        if in_flight != Some(event.request_id()) {
            log::warn!(
                "Ignoring stale result for request {} (in flight: {:?})",
                event.request_id(),
                in_flight
            );
            return;
        }

        match event {
            TranslatorEvent::Completed { result, .. } => {
                let translation = displayed_translation(&result.translation);
                self.messages
                    .push(ChatMessage::bot(result.detected_language, translation));
                self.status = Status::Idle;
            }
            TranslatorEvent::Failed { message, .. } => {
                self.status = Status::Error(message);
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.status, Status::Error(_)) {
            self.status = Status::Idle;
        }
    }

    pub fn set_target_language(&mut self, code: &str) -> bool {
        match languages::find(code) {
            Some(language) => {
                self.target_language = language.code.to_string();
                true
            }
            None => {
                log::warn!("Ignoring unsupported target language `{code}`");
                false
            }
        }
    }
}

/// Bản dịch hiển thị bỏ đi ký tự cuối cùng của kết quả provider.
// Giữ nguyên hành vi quan sát được; chưa rõ đây có phải chủ ý hay không.
pub fn displayed_translation(translation: &str) -> String {
    let mut chars = translation.chars();
    chars.next_back();
    chars.as_str().to_string()
}
