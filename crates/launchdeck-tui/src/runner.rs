//! Main TUI runner - entry point and event loop

use launchdeck_app::Engine;
use launchdeck_core::prelude::*;
use launchdeck_gateway::FetchGateway;

use super::{event, render};

/// Run the terminal UI until the user quits or a signal arrives.
///
/// Takes ownership of the engine; any initial navigation should already have
/// been sent through [`Engine::process_message`].
pub async fn run<G>(mut engine: Engine<G>) -> Result<()>
where
    G: FetchGateway + Send + Sync + 'static,
{
    install_panic_hook();
    let mut term = ratatui::init();

    engine.spawn_signal_handler();
    info!("TUI started");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
///
/// Fetch completions arrive on the engine's channel from background tasks;
/// terminal polling doubles as the spinner tick.
fn run_loop<G>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<G>) -> Result<()>
where
    G: FetchGateway + Send + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}

/// Restore the terminal before the default panic output is printed
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
