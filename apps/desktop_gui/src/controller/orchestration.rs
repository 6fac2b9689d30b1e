//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. On failure `status` explains why and `false` is returned.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded::<BackendCommand>(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, BackendCommand::RefreshEvents, &mut status));
        assert!(status.is_empty());

        assert!(!dispatch_backend_command(&tx, BackendCommand::RefreshEvents, &mut status));
        assert_eq!(status, "UI command queue is full; please retry");
    }

    #[test]
    fn reports_disconnected_worker() {
        let (tx, rx) = bounded::<BackendCommand>(4);
        drop(rx);
        let mut status = String::new();
        assert!(!dispatch_backend_command(&tx, BackendCommand::RefreshEvents, &mut status));
        assert!(status.starts_with("Backend command processor disconnected"));
    }
}
