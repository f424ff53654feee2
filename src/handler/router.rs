//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation, route matching, and dispatching.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, HeaderValue, REFERER, SERVER, USER_AGENT};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::error::Error as StdError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::endpoints;
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::{self, Endpoint};

/// Main entry point for HTTP request handling
///
/// Generic over the body so the same path serves hyper's `Incoming` and
/// in-memory bodies.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let started = Instant::now();
    let access_entry = state
        .config
        .logging
        .access_log
        .then(|| access_log_entry(&req, peer_addr));

    let mut response = dispatch(req, &state).await;
    set_server_header(&mut response, &state.config.http.server_name);

    if let Some(mut entry) = access_entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a request to its endpoint
async fn dispatch<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    if let Some(resp) = check_http_method(req.method()) {
        return resp;
    }

    match routing::match_route(req.method(), req.uri().path()) {
        Some(Endpoint::Target) => endpoints::target(),
        Some(Endpoint::Lines) => endpoints::lines(),
        Some(Endpoint::Data) => endpoints::data(req, state.config.http.max_body_size).await,
        None => http::build_404_response(),
    }
}

/// Answer OPTIONS and unsupported methods before routing
///
/// OPTIONS is a CORS preflight for every path, registered or not.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::POST => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Unsupported method: {method}"));
            Some(http::build_501_response())
        }
    }
}

fn access_log_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let uri = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), ToString::to_string);
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), req.method().to_string(), uri);
    entry.http_version = format!("{:?}", req.version());
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry
}

fn set_server_header(response: &mut Response<Full<Bytes>>, server_name: &str) {
    match HeaderValue::from_str(server_name) {
        Ok(value) => {
            response.headers_mut().insert(SERVER, value);
        }
        Err(_) => logger::log_warning(&format!("Invalid server name: {server_name:?}")),
    }
}
