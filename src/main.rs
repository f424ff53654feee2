use std::sync::Arc;

mod coating;
mod config;
mod error;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

use server::signal::{start_signal_handler, SignalHandler};

/// Config file used when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Requests are served one at a time, a single thread is all the loop uses
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(cfg));
    logger::log_server_start(&addr, &state.config);

    let signals = Arc::new(SignalHandler::new());
    start_signal_handler(Arc::clone(&signals))?;

    server::start_server_loop(listener, state, Arc::clone(&signals.shutdown)).await?;
    Ok(())
}
