//! launchdeck - A terminal browser for the SpaceX launch catalog
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use clap::Parser;
use tracing::{info, warn};

use launchdeck_app::config::{self, Settings};
use launchdeck_app::{Engine, Message};
use launchdeck_core::{PageSize, Route};
use launchdeck_gateway::{CachedGateway, SpacexClient};

use headless::HeadlessOptions;

/// launchdeck - Search, page through and inspect historical SpaceX launches
#[derive(Parser, Debug)]
#[command(name = "launchdeck")]
#[command(about = "A terminal browser for the SpaceX launch catalog", long_about = None)]
struct Args {
    /// GraphQL endpoint of the launch service
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Initial rows per page
    #[arg(long, value_name = "30|50|100")]
    page_size: Option<PageSize>,

    /// View to start on, e.g. `/launch/109`
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: Route,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Mission-name filter for the headless list query
    #[arg(long, requires = "headless")]
    filter: Option<String>,

    /// Offset of the headless list query, rounded down to a page boundary
    #[arg(long, default_value_t = 0, requires = "headless")]
    offset: u32,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    launchdeck_core::logging::init()?;

    let settings = settings_for(&args);
    info!(
        "Using endpoint {} (cache ttl {}s, page size {})",
        settings.api.endpoint, settings.api.cache_ttl_secs, settings.ui.page_size
    );

    let client = SpacexClient::new(&settings.api.endpoint)?;
    let gateway = CachedGateway::new(client, settings.api.cache_ttl());
    let mut engine = Engine::new(gateway, settings);

    if args.headless {
        let options = HeadlessOptions {
            route: args.route,
            filter: args.filter,
            offset: args.offset,
        };
        headless::run_headless(engine, options).await?;
        return Ok(());
    }

    engine.process_message(Message::Navigate(args.route));
    launchdeck_tui::run(engine).await?;
    Ok(())
}

/// Config file values with CLI overrides applied
fn settings_for(args: &Args) -> Settings {
    let mut settings = match config::default_config_dir() {
        Ok(dir) => {
            if let Err(e) = config::init_config_dir(&dir) {
                warn!("Could not create default config: {}", e);
            }
            config::load_settings(&dir)
        }
        Err(e) => {
            warn!("No config directory, using defaults: {}", e);
            Settings::default()
        }
    };

    if let Some(endpoint) = &args.endpoint {
        settings.api.endpoint = endpoint.clone();
    }
    if let Some(page_size) = args.page_size {
        settings.ui.page_size = page_size;
    }
    settings
}
