//! Coating line domain values
//!
//! The payloads served by the endpoints. All of them are fixed or derived
//! from a single request, nothing here is stored between requests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Thickness every line is expected to hit
pub const TARGET_THICKNESS: f64 = 75.0;

/// Lines a device can report for, in display order
pub const PRODUCTION_LINES: [&str; 5] = ["line 1", "line A", "line B", "line 123", "no line"];

pub const ADJUSTMENT_STATUS: &str = "success";
pub const ADJUSTMENT_MESSAGE: &str = "Data received adjusting Coating line";

/// Body of `GET /target`
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct TargetReading {
    pub target_thickness: f64,
}

impl TargetReading {
    pub const fn current() -> Self {
        Self {
            target_thickness: TARGET_THICKNESS,
        }
    }
}

/// Body of `GET /lines`
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct LineList(Vec<&'static str>);

impl LineList {
    pub fn current() -> Self {
        Self(PRODUCTION_LINES.to_vec())
    }
}

/// Reading posted by a device to `POST /data`
///
/// Every field is optional. A JSON `null` counts as absent.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct DeviceReport {
    #[serde(default)]
    pub target_thickness: Option<f64>,
    #[serde(default)]
    pub current_thickness: Option<f64>,
    #[serde(default)]
    pub selected_line: Option<String>,
}

impl DeviceReport {
    /// Build a report from an already-parsed JSON object
    ///
    /// Unknown keys are ignored. Integers are accepted as thicknesses.
    pub fn from_object(object: Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(object))
    }

    pub fn target(&self) -> f64 {
        self.target_thickness.unwrap_or(0.0)
    }

    pub fn current(&self) -> f64 {
        self.current_thickness.unwrap_or(0.0)
    }

    /// Positive when the coating is thicker than its target
    pub fn difference(&self) -> f64 {
        self.current() - self.target()
    }
}

/// Body of a successful `POST /data`
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AdjustmentResult {
    pub status: &'static str,
    pub message: &'static str,
    pub difference: f64,
}

impl From<&DeviceReport> for AdjustmentResult {
    fn from(report: &DeviceReport) -> Self {
        Self {
            status: ADJUSTMENT_STATUS,
            message: ADJUSTMENT_MESSAGE,
            difference: report.difference(),
        }
    }
}
