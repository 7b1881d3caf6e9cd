//! Headless mode runner - one query, then exit

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{info, warn};

use launchdeck_app::{Engine, EngineEvent, Message};
use launchdeck_core::{Result, Route};
use launchdeck_gateway::FetchGateway;

use super::HeadlessEvent;

/// What to resolve before exiting
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// A launch route resolves that launch; `/` runs a list query
    pub route: Route,
    pub filter: Option<String>,
    pub offset: u32,
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<G>(mut engine: Engine<G>, options: HeadlessOptions) -> Result<()>
where
    G: FetchGateway + Send + Sync + 'static,
{
    info!("launchdeck starting in headless mode: {:?}", options);

    let mut events = engine.subscribe();
    engine.spawn_signal_handler();

    match &options.route {
        Route::Launch(_) => {
            engine.process_message(Message::Navigate(options.route.clone()));
            engine.settle().await;
        }
        Route::Launches => run_list_query(&mut engine, &options, &mut events).await,
    }
    flush_events(&mut events);

    engine.shutdown();
    flush_events(&mut events);

    info!("launchdeck headless mode exiting");
    Ok(())
}

/// Search, then page forward until the requested offset is reached.
async fn run_list_query<G>(
    engine: &mut Engine<G>,
    options: &HeadlessOptions,
    events: &mut broadcast::Receiver<EngineEvent>,
) where
    G: FetchGateway + Send + Sync + 'static,
{
    if let Some(filter) = &options.filter {
        engine
            .state
            .launches
            .search_input_mut()
            .set_filter_text(filter);
    }
    engine.process_message(Message::Search);
    engine.settle().await;
    flush_events(events);

    loop {
        let launches = &engine.state.launches;
        let next_offset = launches.pagination().offset() + launches.pagination().limit().get();
        if engine.should_quit() || !launches.has_next() || next_offset > options.offset {
            break;
        }
        engine.process_message(Message::NextPage);
        engine.settle().await;
        flush_events(events);
    }
}

fn flush_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::new(event).emit(),
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} events", skipped)
            }
            Err(_) => break,
        }
    }
}
