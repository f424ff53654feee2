//! Request body reading
//!
//! Bodies are only read for endpoints that need one, and only up to the
//! declared `Content-Length`.

use http_body_util::{BodyExt, Limited};
use hyper::body::{Body, Bytes};
use hyper::header::CONTENT_LENGTH;
use hyper::{HeaderMap, Request};
use serde_json::{Map, Value};
use std::error::Error as StdError;

use crate::error::RequestError;

/// Parse the `Content-Length` header
pub fn declared_length(headers: &HeaderMap) -> Result<u64, RequestError> {
    let value = headers
        .get(CONTENT_LENGTH)
        .ok_or(RequestError::MissingContentLength)?;
    let text = value.to_str().map_err(|_| {
        RequestError::InvalidContentLength(String::from_utf8_lossy(value.as_bytes()).into_owned())
    })?;
    text.trim()
        .parse::<u64>()
        .map_err(|_| RequestError::InvalidContentLength(text.to_string()))
}

/// Read exactly `Content-Length` bytes and parse them as a JSON object
///
/// A declared length above `limit` is rejected before any byte is read.
pub async fn read_json_object<B>(
    req: Request<B>,
    limit: u64,
) -> Result<Map<String, Value>, RequestError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let size = declared_length(req.headers())?;
    if size > limit {
        return Err(RequestError::PayloadTooLarge { size, limit });
    }

    let mut bytes = Limited::new(req.into_body(), usize::try_from(limit).unwrap_or(usize::MAX))
        .collect()
        .await
        .map_err(|e| RequestError::BodyRead(e.to_string()))?
        .to_bytes();
    bytes.truncate(usize::try_from(size).unwrap_or(usize::MAX));

    match serde_json::from_slice(&bytes).map_err(RequestError::InvalidJson)? {
        Value::Object(object) => Ok(object),
        _ => Err(RequestError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;

    fn request(body: &'static str, content_length: Option<&str>) -> Request<Full<Bytes>> {
        let mut builder = Request::builder().method("POST").uri("/data");
        if let Some(len) = content_length {
            builder = builder.header(CONTENT_LENGTH, len);
        }
        builder.body(Full::new(Bytes::from_static(body.as_bytes()))).unwrap()
    }

    #[tokio::test]
    async fn test_reads_object() {
        let body = r#"{"current_thickness": 80.0}"#;
        let len = body.len().to_string();
        let object = read_json_object(request(body, Some(len.as_str())), 1024).await.unwrap();
        assert_eq!(object["current_thickness"], 80.0);
    }

    #[tokio::test]
    async fn test_reads_only_declared_length() {
        let body = r#"{"current_thickness": 1.0}trailing garbage"#;
        let len = r#"{"current_thickness": 1.0}"#.len().to_string();
        let object = read_json_object(request(body, Some(len.as_str())), 1024).await.unwrap();
        assert_eq!(object.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_length() {
        let err = read_json_object(request("{}", None), 1024).await.unwrap_err();
        assert!(matches!(err, RequestError::MissingContentLength));
    }

    #[tokio::test]
    async fn test_unparsable_length() {
        let err = read_json_object(request("{}", Some("two")), 1024)
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidContentLength(ref v) if v == "two"));
    }

    #[tokio::test]
    async fn test_declared_length_over_limit() {
        let err = read_json_object(request("{}", Some("4096")), 1024)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RequestError::PayloadTooLarge {
                size: 4096,
                limit: 1024
            }
        ));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let err = read_json_object(request("{nope", Some("5")), 1024)
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn test_empty_body_is_invalid_json() {
        let err = read_json_object(request("", Some("0")), 1024).await.unwrap_err();
        assert!(matches!(err, RequestError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn test_non_object_json() {
        let err = read_json_object(request("[75.0, 80.0]", Some("12")), 1024)
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::NotAnObject));
    }
}
