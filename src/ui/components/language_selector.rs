use eframe::egui;

use crate::common::{SUPPORTED_LANGUAGES, languages};

/// Combo box chọn ngôn ngữ đích; trả về mã mới nếu người dùng đổi lựa chọn.
pub fn render(ui: &mut egui::Ui, selected: &str) -> Option<String> {
    let mut selected_code = selected.to_string();

    egui::ComboBox::from_id_salt("target_language")
        .selected_text(languages::display_name(selected))
        .show_ui(ui, |ui| {
            for language in SUPPORTED_LANGUAGES {
                ui.selectable_value(&mut selected_code, language.code.to_string(), language.name);
            }
        });

    (selected_code != selected).then_some(selected_code)
}
