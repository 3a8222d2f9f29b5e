use eframe::egui;

const SEND_BUTTON_WIDTH: f32 = 64.0;

/// Trả về `true` khi người dùng bấm Send hoặc Enter.
pub fn render(ui: &mut egui::Ui, input_text: &mut String, enabled: bool, hint: &str) -> bool {
    let mut send = false;
    let can_send = enabled && !input_text.trim().is_empty();

    ui.horizontal(|ui| {
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(input_text)
                .hint_text(hint)
                .desired_width(ui.available_width() - SEND_BUTTON_WIDTH),
        );

        if ui.add_enabled(can_send, egui::Button::new("Send")).clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    send
}
