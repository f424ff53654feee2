// Connection handling module
// Serves one accepted TCP connection to completion

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve a single connection.
///
/// The caller awaits this before accepting the next connection, so requests
/// are handled strictly one at a time in arrival order.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures HTTP/1 keep-alive from `performance.keep_alive`
/// 3. Serves the connection with the request handler
/// 4. Drops the connection once `performance.connection_timeout` elapses
pub async fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    let io = TokioIo::new(stream);
    let performance = &state.config.performance;

    let mut builder = http1::Builder::new();
    builder.keep_alive(performance.keep_alive);

    let service_state = Arc::clone(state);
    let conn = builder.serve_connection(
        io,
        service_fn(move |req| handler::handle_request(req, Arc::clone(&service_state), peer_addr)),
    );

    if performance.connection_timeout == 0 {
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
        return;
    }

    let timeout_duration = Duration::from_secs(performance.connection_timeout);
    match tokio::time::timeout(timeout_duration, conn).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => logger::log_connection_error(&err),
        Err(_) => {
            logger::log_warning(&format!(
                "Connection from {peer_addr} timed out after {} seconds",
                timeout_duration.as_secs()
            ));
        }
    }
}
