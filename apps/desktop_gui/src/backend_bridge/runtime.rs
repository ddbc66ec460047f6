//! Backend worker: owns the tokio runtime and the HTTP client, turns queued
//! commands into requests against the task processing endpoint, and reports
//! each outcome back to the UI as exactly one event per submission.

use crossbeam_channel::{Receiver, Sender};
use reqwest::Client as HttpClient;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use shared::protocol::{parse_outcome, ProcessOutcome, ProcessTaskRequest};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    std::thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let http = HttpClient::new();
            let endpoint = process_endpoint(&server_url);
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            // Exits when the UI side drops its sender.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::ProcessTask { submission, text } => {
                        let event = match process_task(&http, &endpoint, text).await {
                            Ok(ProcessOutcome::Success { task_name, items }) => {
                                tracing::debug!(
                                    submission = submission.0,
                                    items = items.len(),
                                    "task resolved"
                                );
                                UiEvent::TaskCompleted {
                                    submission,
                                    task_name,
                                    items,
                                }
                            }
                            Ok(ProcessOutcome::Failure { message }) => {
                                tracing::debug!(
                                    submission = submission.0,
                                    "task rejected by server"
                                );
                                UiEvent::TaskRejected {
                                    submission,
                                    message,
                                }
                            }
                            Err(detail) => {
                                let err =
                                    UiError::from_message(UiErrorContext::ProcessTask, detail);
                                tracing::warn!(
                                    submission = submission.0,
                                    category = ?err.category(),
                                    detail = err.message(),
                                    "task request did not complete"
                                );
                                UiEvent::TaskUnreachable {
                                    submission,
                                    detail: err.message().to_string(),
                                }
                            }
                        };
                        let _ = ui_tx.try_send(event);
                    }
                }
            }
        });
    });
}

fn process_endpoint(server_url: &str) -> String {
    format!("{}/process-request/", server_url.trim_end_matches('/'))
}

/// One POST, no retry, no timeout. Transport failures and malformed bodies
/// collapse into the same `Err` path; application-level failures come back as
/// `Ok(ProcessOutcome::Failure)`.
async fn process_task(
    http: &HttpClient,
    endpoint: &str,
    text: String,
) -> Result<ProcessOutcome, String> {
    let response = http
        .post(endpoint)
        .json(&ProcessTaskRequest { name: text })
        .send()
        .await
        .map_err(|err| err.to_string())?;

    // The envelope carries its own status discriminator, so the body is parsed
    // regardless of the HTTP status code.
    let body = response.text().await.map_err(|err| err.to_string())?;
    parse_outcome(&body).map_err(|err| err.to_string())
}
