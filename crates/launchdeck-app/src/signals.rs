//! Turns SIGINT/SIGTERM into [`Message::Quit`]

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use launchdeck_core::prelude::*;

use crate::message::Message;

/// Listen for one termination signal, then ask the loop to quit.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match termination_signal().await {
            Ok(name) => {
                info!("{} received, quitting", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Quit after {} dropped: engine gone", name);
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

/// Resolves with the name of the first signal that arrives.
async fn termination_signal() -> Result<&'static str> {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .map(|_| "SIGINT")
            .map_err(|e| Error::terminal(format!("cannot listen for SIGINT: {}", e)))
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("cannot listen for SIGTERM: {}", e)))?;

        tokio::select! {
            name = interrupt => name,
            _ = terminate.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        interrupt.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_quit_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let handle = spawn_signal_handler(tx);

        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        assert!(!handle.is_finished());
        handle.abort();
    }
}
