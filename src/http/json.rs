//! JSON body encoding
//!
//! Bodies are written with `", "` between items and `": "` after keys, e.g.
//! `{"target_thickness": 75.0}`. Existing device firmware compares these
//! bytes, so the layout must not drift to serde_json's compact form.

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// Single-line formatter with spaced separators
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` into a spaced single-line JSON document
pub fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: &serde_json::Value) -> String {
        String::from_utf8(to_spaced_json(value).unwrap()).unwrap()
    }

    #[test]
    fn test_object_separators() {
        assert_eq!(encode(&json!({"target_thickness": 75.0})), r#"{"target_thickness": 75.0}"#);
    }

    #[test]
    fn test_array_separators() {
        assert_eq!(encode(&json!(["a", "b", 3])), r#"["a", "b", 3]"#);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(encode(&json!({})), "{}");
        assert_eq!(encode(&json!([])), "[]");
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            encode(&json!({"a": [1, {"b": null}]})),
            r#"{"a": [1, {"b": null}]}"#
        );
    }

    #[test]
    fn test_floats_keep_fraction() {
        assert_eq!(encode(&json!(5.0)), "5.0");
        assert_eq!(encode(&json!(-2.5)), "-2.5");
    }

    #[test]
    fn test_overflowing_difference_is_null() {
        use crate::coating::{AdjustmentResult, DeviceReport};

        let report = DeviceReport {
            target_thickness: Some(-1e308),
            current_thickness: Some(1e308),
            selected_line: None,
        };
        assert!(report.difference().is_infinite());

        let body = to_spaced_json(&AdjustmentResult::from(&report)).unwrap();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            r#"{"status": "success", "message": "Data received adjusting Coating line", "difference": null}"#
        );
    }
}
