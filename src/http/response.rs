//! HTTP response building module
//!
//! Builders for every response the server sends, decoupled from routing.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::json::to_spaced_json;

const APPLICATION_JSON: &str = "application/json";

/// Error body sent with 4xx responses
#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    message: &'a str,
}

/// Build a JSON response, or a 500 if the value cannot be serialized
pub fn build_json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
) -> Response<Full<Bytes>> {
    match to_spaced_json(body) {
        Ok(json) => Response::builder()
            .status(status)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(Full::new(Bytes::from(json)))
            .unwrap_or_else(|e| {
                log_build_error(status.as_str(), &e);
                Response::new(Full::new(Bytes::new()))
            }),
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            build_empty_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Build a response with a status line and no body
pub fn build_empty_response(status: StatusCode) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_empty_response(StatusCode::NOT_FOUND)
}

/// Build a JSON error response, `{"status": "error", "message": ...}`
pub fn build_error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    build_json_response(
        status,
        &ErrorBody {
            status: "error",
            message,
        },
    )
}

/// Build 501 Not Implemented response for unsupported methods
pub fn build_501_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_IMPLEMENTED)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from("501 Unsupported method")))
        .unwrap_or_else(|e| {
            log_build_error("501", &e);
            Response::new(Full::new(Bytes::from("501 Unsupported method")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS")
        .header(ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
