use eframe::egui;

/// Banner lỗi có nút đóng. Trả về `true` khi người dùng bấm đóng.
pub fn render(ui: &mut egui::Ui, error: Option<&str>) -> bool {
    let Some(message) = error else {
        return false;
    };

    let mut dismissed = false;
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, egui::Color32::RED))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.colored_label(egui::Color32::LIGHT_RED, egui::RichText::new("Error:").strong());
                ui.colored_label(egui::Color32::LIGHT_RED, message);
                if ui
                    .small_button("✕")
                    .on_hover_text("Dismiss error")
                    .clicked()
                {
                    dismissed = true;
                }
            });
        });
    ui.add_space(4.0);

    dismissed
}
