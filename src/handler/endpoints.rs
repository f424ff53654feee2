//! Coating line endpoints

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use std::error::Error as StdError;

use super::body;
use crate::coating::{AdjustmentResult, DeviceReport, LineList, TargetReading};
use crate::error::RequestError;
use crate::http;
use crate::logger;

/// `GET /target`
pub fn target() -> Response<Full<Bytes>> {
    http::build_json_response(StatusCode::OK, &TargetReading::current())
}

/// `GET /lines`
pub fn lines() -> Response<Full<Bytes>> {
    http::build_json_response(StatusCode::OK, &LineList::current())
}

/// `POST /data`: log the report and answer with the thickness difference
pub async fn data<B>(req: Request<B>, max_body_size: u64) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let report = match read_device_report(req, max_body_size).await {
        Ok(report) => report,
        Err(e) => {
            logger::log_warning(&format!("Rejected device report: {e}"));
            return http::build_error_response(e.status(), &e.to_string());
        }
    };

    logger::log_device_report(&report);
    http::build_json_response(StatusCode::OK, &AdjustmentResult::from(&report))
}

async fn read_device_report<B>(req: Request<B>, limit: u64) -> Result<DeviceReport, RequestError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let object = body::read_json_object(req, limit).await?;
    DeviceReport::from_object(object).map_err(RequestError::InvalidField)
}
