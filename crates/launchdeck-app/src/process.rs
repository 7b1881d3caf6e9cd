//! Message processing: runs update() to a fixed point and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use launchdeck_gateway::FetchGateway;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed immediately, in order; each resulting
/// action is handed to [`handle_action`].
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    gateway: &Arc<G>,
) where
    G: FetchGateway + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), gateway);
        }

        msg = result.message;
    }
}
