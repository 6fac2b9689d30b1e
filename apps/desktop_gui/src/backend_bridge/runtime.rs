//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{load_preview, EventSubmitter, EventsClient};
use crossbeam_channel::{Receiver, Sender};
use tokio::task::JoinHandle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::media::decode_preview_data_url;

pub fn launch(client: EventsClient, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
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

        runtime.block_on(run_backend(Arc::new(client), cmd_rx, ui_tx));
        tracing::info!("backend worker stopped");
    });
}

async fn run_backend(
    client: Arc<EventsClient>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let _ = ui_tx.try_send(UiEvent::Info(format!(
        "Using server {}",
        client.base_url()
    )));

    let mut submit_task: Option<(u64, JoinHandle<()>)> = None;
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::LoadImagePreview { selection } => {
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let path = selection.path.clone();
                    let event = match load_preview(&selection).await {
                        Ok(data_url) => match decode_preview_data_url(&data_url) {
                            Ok(image) => UiEvent::ImagePreviewLoaded {
                                path,
                                data_url,
                                image,
                            },
                            Err(reason) => UiEvent::ImagePreviewFailed { path, reason },
                        },
                        Err(err) => UiEvent::ImagePreviewFailed {
                            path,
                            reason: err.to_string(),
                        },
                    };
                    let _ = ui_tx.try_send(event);
                });
            }
            BackendCommand::SubmitEvent {
                submission_id,
                submission,
            } => {
                if let Some((previous_id, task)) = submit_task.take() {
                    if !task.is_finished() {
                        tracing::warn!(previous_id, "backend: replacing in-flight submit");
                        task.abort();
                    }
                }
                tracing::info!(
                    submission_id,
                    image = %submission.image.file_name,
                    "backend: submit_event"
                );
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                let task = tokio::spawn(async move {
                    let result = client.create_event(&submission).await;
                    if let Err(err) = &result {
                        tracing::error!(submission_id, "backend: submit_event failed: {err}");
                    }
                    // The only event that clears the form's loading state; wait for room.
                    if ui_tx
                        .send(UiEvent::SubmitFinished {
                            submission_id,
                            result,
                        })
                        .is_err()
                    {
                        tracing::warn!(submission_id, "backend: ui gone before submit result");
                    }
                });
                submit_task = Some((submission_id, task));
            }
            BackendCommand::CancelSubmit { submission_id } => match submit_task.take() {
                Some((active_id, task)) if active_id == submission_id => {
                    tracing::info!(submission_id, "backend: cancel_submit");
                    task.abort();
                }
                other => submit_task = other,
            },
            BackendCommand::RefreshEvents => {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    tracing::info!("backend: refresh_events");
                    let event = match client.list_events().await {
                        Ok(events) => UiEvent::EventsRefreshed(events),
                        Err(err) => {
                            tracing::warn!("backend: refresh_events failed: {err:#}");
                            UiEvent::Error(UiError::from_message(
                                UiErrorContext::Refresh,
                                format!("{err:#}"),
                            ))
                        }
                    };
                    let _ = ui_tx.try_send(event);
                });
            }
        }
    }

    if let Some((_, task)) = submit_task {
        task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{EventDraft, EventSubmission, ImageSelection};
    use crossbeam_channel::bounded;
    use std::time::Duration;

    fn unreachable_client() -> EventsClient {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        EventsClient::parse(&format!("http://{addr}")).expect("client")
    }

    #[test]
    fn reports_missing_preview_file_and_failed_submit() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        launch(unreachable_client(), cmd_rx, ui_tx);

        let info = ui_rx.recv_timeout(Duration::from_secs(5)).expect("info");
        match info {
            UiEvent::Info(message) => {
                assert!(message.starts_with("Using server http://127.0.0.1:"))
            }
            _ => panic!("expected info"),
        }

        let selection = ImageSelection::from_path("/definitely/not/here/cover.png");
        cmd_tx
            .send(BackendCommand::LoadImagePreview {
                selection: selection.clone(),
            })
            .expect("send preview");
        match ui_rx.recv_timeout(Duration::from_secs(5)).expect("preview") {
            UiEvent::ImagePreviewFailed { path, .. } => assert_eq!(path, selection.path),
            _ => panic!("expected preview failure"),
        }

        cmd_tx
            .send(BackendCommand::SubmitEvent {
                submission_id: 7,
                submission: EventSubmission {
                    draft: EventDraft::default(),
                    image: selection,
                },
            })
            .expect("send submit");
        match ui_rx.recv_timeout(Duration::from_secs(5)).expect("submit") {
            UiEvent::SubmitFinished {
                submission_id,
                result,
            } => {
                assert_eq!(submission_id, 7);
                assert!(result.is_err());
            }
            _ => panic!("expected submit result"),
        }
    }

    #[test]
    fn submit_result_waits_for_a_full_ui_queue() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(1);
        launch(unreachable_client(), cmd_rx, ui_tx);

        cmd_tx
            .send(BackendCommand::SubmitEvent {
                submission_id: 3,
                submission: EventSubmission {
                    draft: EventDraft::default(),
                    image: ImageSelection::from_path("/definitely/not/here/cover.png"),
                },
            })
            .expect("send submit");
        // The unread startup info keeps the queue full while the submit fails.
        std::thread::sleep(Duration::from_millis(500));

        assert!(matches!(
            ui_rx.recv_timeout(Duration::from_secs(5)).expect("info"),
            UiEvent::Info(_)
        ));
        match ui_rx.recv_timeout(Duration::from_secs(5)).expect("submit") {
            UiEvent::SubmitFinished {
                submission_id,
                result,
            } => {
                assert_eq!(submission_id, 3);
                assert!(result.is_err());
            }
            _ => panic!("expected submit result"),
        }
    }
}
