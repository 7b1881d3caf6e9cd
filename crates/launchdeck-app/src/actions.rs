//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task and reports back exclusively
//! through the message channel.

use std::process::Command;
use std::sync::Arc;

use tokio::sync::mpsc;

use launchdeck_core::prelude::*;
use launchdeck_gateway::FetchGateway;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<G>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, gateway: &Arc<G>)
where
    G: FetchGateway + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchLaunches { request_id, query } => {
            let gateway = Arc::clone(gateway);
            tokio::spawn(async move {
                let result = gateway.list_launches(&query).await;
                let message = Message::LaunchesFetched { request_id, result };
                if let Err(e) = report(&msg_tx, message).await {
                    debug!("Launch list response {} dropped: {}", request_id, e);
                }
            });
        }

        UpdateAction::FetchLaunch { request_id, id } => {
            let gateway = Arc::clone(gateway);
            tokio::spawn(async move {
                let result = gateway.get_launch(&id).await;
                let message = Message::LaunchFetched {
                    request_id,
                    id,
                    result,
                };
                if let Err(e) = report(&msg_tx, message).await {
                    debug!("Launch detail response {} dropped: {}", request_id, e);
                }
            });
        }

        UpdateAction::OpenUrl { url } => {
            tokio::spawn(async move {
                if let Err(e) = open_url_in_browser(&url) {
                    let message = Message::BrowserOpenFailed {
                        url,
                        error: e.to_string(),
                    };
                    if let Err(e) = report(&msg_tx, message).await {
                        debug!("Browser failure notice dropped: {}", e);
                    }
                }
            });
        }
    }
}

/// Hand a completion back to the engine. Fails once the engine is gone.
async fn report(msg_tx: &mpsc::Sender<Message>, message: Message) -> Result<()> {
    msg_tx
        .send(message)
        .await
        .map_err(|e| Error::channel_send(e.to_string()))
}

/// Open a URL in the system browser (cross-platform, fire-and-forget).
///
/// `$BROWSER` wins when set; otherwise the platform opener is used.
pub fn open_url_in_browser(url: &str) -> std::io::Result<()> {
    if let Some(browser) = std::env::var_os("BROWSER").filter(|b| !b.is_empty()) {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
