use std::sync::Arc;

use tokio::sync::mpsc;

use crate::common::{TranslatorCommand, TranslatorEvent};

use super::openai::TranslationClient;

/// Worker chạy ngầm: nhận lệnh từ UI, gọi provider, trả kết quả về UI.
///
/// Each request runs on its own task, so overlapping commands complete in
/// whatever order the provider answers. The single-in-flight rule lives in the UI.
pub struct TranslationWorker {
    client: Arc<TranslationClient>,
    api_key: String,
    event_sender: mpsc::Sender<TranslatorEvent>,
    command_receiver: mpsc::Receiver<TranslatorCommand>,
}

impl TranslationWorker {
    pub fn new(
        client: TranslationClient,
        api_key: Option<String>,
        event_sender: mpsc::Sender<TranslatorEvent>,
        command_receiver: mpsc::Receiver<TranslatorCommand>,
    ) -> Self {
        Self {
            client: Arc::new(client),
            api_key: api_key.unwrap_or_default(),
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!("Translation worker started (model: {})", self.client.model());

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command);
        }

        log::info!("Command channel closed; translation worker stopped");
    }

    fn handle_command(&self, command: TranslatorCommand) {
        match command {
            TranslatorCommand::Translate {
                request_id,
                text,
                target_language,
            } => {
                let client = Arc::clone(&self.client);
                let api_key = self.api_key.clone();
                let event_sender = self.event_sender.clone();

                tokio::spawn(async move {
                    log::debug!(
                        "Request {request_id}: translating {} chars into `{target_language}`",
                        text.chars().count()
                    );

                    let event = match client.translate(&text, &target_language, &api_key).await {
                        Ok(result) => {
                            log::info!(
                                "Request {request_id}: detected {}",
                                result.detected_language
                            );
                            TranslatorEvent::Completed { request_id, result }
                        }
                        Err(err) => {
                            log::warn!("Request {request_id} failed: {err}");
                            TranslatorEvent::Failed {
                                request_id,
                                message: err.to_string(),
                            }
                        }
                    };

                    // UI đã đóng thì bỏ kết quả, không tác động lên view cũ.
                    if event_sender.send(event).await.is_err() {
                        log::warn!("UI is gone; dropping result of request {request_id}");
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::network::test_support::{completion_body, serve_once, test_client};

    fn spawn_worker(
        url: &str,
        api_key: Option<&str>,
    ) -> (
        mpsc::Sender<TranslatorCommand>,
        mpsc::Receiver<TranslatorEvent>,
        tokio::task::JoinHandle<()>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(8);
        let worker = TranslationWorker::new(
            test_client(url),
            api_key.map(str::to_string),
            event_tx,
            cmd_rx,
        );
        let handle = tokio::spawn(worker.run());
        (cmd_tx, event_rx, handle)
    }

    fn translate(request_id: u64, text: &str) -> TranslatorCommand {
        TranslatorCommand::Translate {
            request_id,
            text: text.to_string(),
            target_language: "en".to_string(),
        }
    }

    #[tokio::test]
    async fn replies_with_completed_event() {
        let reply = completion_body(r#"{"detectedLanguage":"Spanish","translation":"Hello!"}"#);
        let (url, _server) = serve_once("200 OK", reply).await;
        let (cmd_tx, mut event_rx, _handle) = spawn_worker(&url, Some("sk-test"));

        cmd_tx.send(translate(7, "Hola")).await.unwrap();
        let event = event_rx.recv().await.unwrap();

        match event {
            TranslatorEvent::Completed { request_id, result } => {
                assert_eq!(request_id, 7);
                assert_eq!(result.detected_language, "Spanish");
                assert_eq!(result.translation, "Hello!");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_key_yields_failed_event() {
        let (cmd_tx, mut event_rx, _handle) =
            spawn_worker("http://127.0.0.1:9/v1/chat/completions", None);

        cmd_tx.send(translate(1, "Hola")).await.unwrap();
        let event = event_rx.recv().await.unwrap();

        assert_eq!(
            event,
            TranslatorEvent::Failed {
                request_id: 1,
                message: "OpenAI API key is not provided.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn provider_error_text_reaches_the_event() {
        let body = r#"{"error":{"message":"Rate limit reached"}}"#.to_string();
        let (url, _server) = serve_once("429 Too Many Requests", body).await;
        let (cmd_tx, mut event_rx, _handle) = spawn_worker(&url, Some("sk-test"));

        cmd_tx.send(translate(3, "Hola")).await.unwrap();
        let event = event_rx.recv().await.unwrap();

        match event {
            TranslatorEvent::Failed { request_id, message } => {
                assert_eq!(request_id, 3);
                assert!(message.contains("Rate limit reached"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn stops_when_ui_drops_command_sender() {
        let (cmd_tx, _event_rx, handle) =
            spawn_worker("http://127.0.0.1:9/v1/chat/completions", Some("sk-test"));

        drop(cmd_tx);
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("worker should exit")
            .unwrap();
    }

    #[tokio::test]
    async fn result_for_closed_ui_is_discarded() {
        let (cmd_tx, event_rx, handle) = spawn_worker("http://127.0.0.1:9/v1/chat/completions", None);

        drop(event_rx);
        cmd_tx.send(translate(5, "Hola")).await.unwrap();
        drop(cmd_tx);

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("worker should exit")
            .unwrap();
    }
}
