//! Command orchestration helpers from UI actions to the worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend queue is full");
            Err(UiError::from_message(
                UiErrorContext::ImageFetch,
                "image worker queue is full",
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "image worker disconnected");
            Err(UiError::from_message(
                UiErrorContext::ImageFetch,
                "image worker disconnected (possible startup/runtime failure)",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;
    use crate::controller::events::UiErrorCategory;

    fn fetch(reference: &str) -> BackendCommand {
        BackendCommand::FetchImage {
            reference: reference.to_string(),
        }
    }

    #[test]
    fn queues_commands_while_there_is_room() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, fetch("/placeholder.jpg")).expect("queued");
        assert!(matches!(
            rx.try_recv(),
            Ok(BackendCommand::FetchImage { reference }) if reference == "/placeholder.jpg"
        ));
    }

    #[test]
    fn full_queue_is_a_transport_failure() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, fetch("a.jpg")).expect("first fits");
        let err = dispatch_backend_command(&tx, fetch("b.jpg")).expect_err("queue full");
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn dropped_worker_is_a_transport_failure() {
        let (tx, rx) = bounded(4);
        drop(rx);
        let err = dispatch_backend_command(&tx, fetch("a.jpg")).expect_err("disconnected");
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }
}
