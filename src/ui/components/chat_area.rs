use chrono::{DateTime, Local};
use eframe::egui;

use crate::common::ChatMessage;

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage], is_loading: bool) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                if message.is_user() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.group(|ui| {
                            ui.label(&message.text);
                        });
                    });
                } else {
                    render_bot_message(ui, message);
                }
                ui.add_space(6.0);
            }

            if is_loading {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label(egui::RichText::new("Translating...").weak());
                });
            }
        });
}

fn render_bot_message(ui: &mut egui::Ui, message: &ChatMessage) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            if let Some(translation) = &message.translation {
                ui.label(egui::RichText::new(translation).strong().size(16.0));
            }
            ui.separator();
            ui.horizontal(|ui| {
                if let Some(language) = &message.detected_language {
                    ui.label(egui::RichText::new(format!("Detected: {}", language)).small().weak());
                }
                if let Some(time) = format_time(message.timestamp) {
                    ui.label(egui::RichText::new(time).small().weak());
                }
            });
        });
    });
}

fn format_time(timestamp: i64) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(&Local).format("%H:%M").to_string())
}
