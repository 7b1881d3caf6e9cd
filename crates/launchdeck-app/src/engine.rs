//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the gateway and the
//! settings. Front ends feed it messages and read `engine.state` to draw.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use launchdeck_core::prelude::*;
use launchdeck_core::Route;
use launchdeck_gateway::FetchGateway;

use crate::config::Settings;
use crate::detail::DetailState;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::presenter::ResultState;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::view_model::{detail_content, list_content};

/// Capacity of the message channel
const MESSAGE_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect what
/// changed and emit the matching EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    route: Route,
    list: ResultState,
    offset: u32,
    detail: DetailState,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            route: state.route.clone(),
            list: state.launches.state().clone(),
            offset: state.launches.pagination().offset(),
            detail: state.detail.state().clone(),
        }
    }
}

/// Orchestration engine for launchdeck.
pub struct Engine<G> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings (file values with CLI overrides applied)
    pub settings: Settings,

    gateway: Arc<G>,

    /// Subscribers receive EngineEvents after each message processing cycle.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<G> Engine<G>
where
    G: FetchGateway + Send + Sync + 'static,
{
    /// Create an engine around `gateway`.
    ///
    /// Does not install the OS signal handler; runners call
    /// [`Engine::spawn_signal_handler`] for that.
    pub fn new(gateway: G, settings: Settings) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CAPACITY);
        let (event_tx, _) = broadcast::channel(MESSAGE_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            gateway: Arc::new(gateway),
            event_tx,
        }
    }

    /// Forward SIGINT/SIGTERM into the loop as [`Message::Quit`].
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.gateway);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for and process messages until no fetch is in flight.
    pub async fn settle(&mut self) {
        while self.is_fetching() && !self.should_quit() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => break,
            }
        }
        self.drain_pending_messages();
    }

    /// True while either controller awaits a response.
    pub fn is_fetching(&self) -> bool {
        self.state.launches.is_loading() || self.state.detail.is_loading()
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre == post {
            return;
        }

        if pre.route != post.route {
            self.emit(EngineEvent::RouteChanged {
                route: post.route.path(),
            });
        }

        if pre.list != post.list || pre.offset != post.offset {
            let launches = &self.state.launches;
            let pagination = launches.pagination();
            self.emit(EngineEvent::ListStateChanged {
                state: launches.state().name(),
                offset: pagination.offset(),
                limit: pagination.limit(),
                total_count: pagination.total_count(),
                content: list_content(launches),
            });
        }

        // A cleared resolver is not a new detail state worth reporting.
        if pre.detail != post.detail && self.state.detail.launch_id().is_some() {
            self.emit(EngineEvent::DetailStateChanged {
                id: self.state.detail.launch_id().cloned(),
                state: self.state.detail.state().name(),
                content: detail_content(&self.state.detail),
            });
        }
    }

    fn emit(&self, event: EngineEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdeck_gateway::InMemoryGateway;

    fn engine() -> Engine<InMemoryGateway> {
        Engine::new(InMemoryGateway::with_fixtures(), Settings::default())
    }

    #[tokio::test]
    async fn test_search_settles_to_success() {
        let mut engine = engine();
        engine.process_message(Message::Search);
        assert!(engine.is_fetching());

        engine.settle().await;

        assert!(!engine.is_fetching());
        assert_eq!(engine.state.launches.page().map(|p| p.len()), Some(30));
        assert_eq!(engine.gateway().list_calls(), 1);
    }

    #[tokio::test]
    async fn test_events_follow_state_changes() {
        let mut engine = engine();
        let mut events = engine.subscribe();

        engine.process_message(Message::Search);
        engine.settle().await;

        let loading = events.recv().await.unwrap();
        assert!(matches!(
            loading,
            EngineEvent::ListStateChanged { state: "loading", .. }
        ));
        let settled = events.recv().await.unwrap();
        assert!(matches!(
            settled,
            EngineEvent::ListStateChanged {
                state: "success",
                total_count: 109,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_typing_emits_nothing() {
        let mut engine = engine();
        let mut events = engine.subscribe();

        engine.process_message(Message::FilterInput('c'));

        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_navigation_emits_route_and_detail_events() {
        let mut engine = engine();
        let mut events = engine.subscribe();

        engine.process_message(Message::Navigate(Route::launch("109")));
        engine.settle().await;

        let route = events.recv().await.unwrap();
        assert_eq!(
            route,
            EngineEvent::RouteChanged {
                route: "/launch/109".to_string()
            }
        );
        let detail = events.recv().await.unwrap();
        assert!(matches!(
            detail,
            EngineEvent::DetailStateChanged { state: "found", .. }
        ));
    }

    #[tokio::test]
    async fn test_quit_message() {
        let mut engine = engine();
        engine.msg_sender().send(Message::Quit).await.unwrap();
        engine.drain_pending_messages();
        assert!(engine.should_quit());
    }
}
