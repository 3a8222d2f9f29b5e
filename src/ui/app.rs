use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{TranslatorCommand, TranslatorEvent};
use crate::config::AppConfig;

use super::components::{chat_area, input_bar, language_selector, status_banner};
use super::state::AppState;

const WORKER_UNAVAILABLE: &str = "Translation service is unavailable. Please restart the app.";

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<TranslatorCommand>,
    event_receiver: mpsc::Receiver<TranslatorEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        command_sender: mpsc::Sender<TranslatorCommand>,
        event_receiver: mpsc::Receiver<TranslatorEvent>,
    ) -> Self {
        Self {
            state: AppState::new(config.has_api_key(), config.target_language.clone()),
            command_sender,
            event_receiver,
        }
    }

    fn handle_translator_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn submit(&mut self) {
        let Some(command) = self.state.submit() else {
            return;
        };

        let request_id = command.request_id();
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to translator: {err}");
            self.state.apply_event(TranslatorEvent::Failed {
                request_id,
                message: WORKER_UNAVAILABLE.to_string(),
            });
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_translator_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Turing-Translator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(code) = language_selector::render(ui, &self.state.target_language) {
                        self.state.set_target_language(&code);
                    }
                    ui.label("Translate to:");
                });
            });
        });

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            let hint = if self.state.api_key_configured() {
                "Type a message..."
            } else {
                "Please set your OpenAI API key in OPENAI_API_KEY to begin."
            };
            let enabled = self.state.input_enabled();
            if input_bar::render(ui, &mut self.state.input_text, enabled, hint) {
                self.submit();
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if status_banner::render(ui, self.state.error()) {
                self.state.dismiss_error();
            }
            chat_area::render(ui, &self.state.messages, self.state.is_loading());
        });

        ctx.request_repaint();
    }
}
