mod common;
mod config;
mod network;
mod ui;

use clap::Parser;
use common::DEFAULT_TARGET_LANGUAGE;
use config::AppConfig;
use dotenvy::dotenv;
use eframe::egui;
use network::openai::{DEFAULT_API_URL, DEFAULT_MODEL};
use network::{TranslationClient, TranslationWorker};
use tokio::sync::mpsc;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "turing_translator",
    version,
    about = "Chat window that detects the language of a message and translates it"
)]
struct Cli {
    /// API key sent as a Bearer token to the provider
    #[arg(long, env = config::API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Chat-completions endpoint of the provider
    #[arg(long, env = "OPENAI_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Model used for detection and translation
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Initial target language code (e.g. es, fr, ja)
    #[arg(long, env = "TARGET_LANGUAGE", default_value = DEFAULT_TARGET_LANGUAGE)]
    target: String,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = AppConfig::new(cli.api_key, cli.api_url, cli.model, cli.target);

    log::info!(
        "API key loaded from env: {}",
        if app_config.has_api_key() { "Present" } else { "Missing" }
    );
    log::info!("Provider: {} (model {})", app_config.api_url, app_config.model);

    run_full_client(app_config).await
}

async fn run_full_client(app_config: AppConfig) -> Result<(), eframe::Error> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Worker
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    // Worker -> UI
    let (event_tx, event_rx) = mpsc::channel(16);

    // 2. Khởi chạy worker dịch (Chạy ngầm)
    match TranslationClient::from_config(&app_config) {
        Ok(client) => {
            let worker =
                TranslationWorker::new(client, app_config.api_key.clone(), event_tx, cmd_rx);
            tokio::spawn(worker.run());
        }
        Err(err) => {
            // Không có worker: mọi submission sẽ báo lỗi trên UI.
            log::error!("Failed to build HTTP client: {err}");
            drop(cmd_rx);
            drop(event_tx);
        }
    }

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_title("Turing-Translator"),
        ..Default::default()
    };
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Turing-Translator",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Target language: {}", app_config.target_language);

            Ok(Box::new(ChatApp::new(
                cc,
                &app_config,
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
