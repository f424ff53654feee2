// Server loop module
// Accepts connections one at a time until shutdown is requested

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::serve_connection;
use crate::config::AppState;
use crate::logger;

/// Accept and serve connections until `shutdown` is notified.
///
/// Each connection is served to completion before the next `accept`, so the
/// shutdown notification is observed between connections. `Notify` keeps a
/// permit for a signal that arrives mid-connection.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        serve_connection(stream, peer_addr, &state).await;
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
