pub mod chat_area;
pub mod input_bar;
pub mod language_selector;
pub mod status_banner;
