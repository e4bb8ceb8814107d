//! Decoding of `omreport -fmt xml` documents.
//!
//! Each report is read into a private wire struct that mirrors the nested
//! XML, then flattened into the public record. Element paths are relative
//! to the document root (`<OMA>`).

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// Value the tool prints for a reading or threshold that is not available.
pub const NOT_AVAILABLE: f64 = -2_147_483_648.0;

/// A record that can be decoded from an `omreport` XML document.
pub trait FromReport: Sized {
    /// Decode the record from raw tool output
    fn from_report(xml: &[u8]) -> Result<Self>;
}

/// Deserialize a wire struct from the document root.
pub(crate) fn decode<T: DeserializeOwned>(xml: &[u8]) -> Result<T> {
    Ok(quick_xml::de::from_reader(xml)?)
}

/// Map the "not available" sentinel to `None`.
pub(crate) fn available(value: Option<f64>) -> Option<f64> {
    value.filter(|v| (*v - NOT_AVAILABLE).abs() > f64::EPSILON)
}

/// Parse a number from element or attribute text.
///
/// The tool sometimes prints an empty element (`<ObjStatus></ObjStatus>`)
/// where a number belongs. Empty or blank text yields `T::default()` so one
/// missing value does not void the whole report.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    match text.trim() {
        "" => Ok(T::default()),
        value => value.parse().map_err(D::Error::custom),
    }
}

/// Like [`lenient`], but empty text is `None`.
pub(crate) fn lenient_option<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    match text.trim() {
        "" => Ok(None),
        value => value.parse().map(Some).map_err(D::Error::custom),
    }
}

/// Implements [`FromReport`] for a record with a `From<Wire>` conversion.
macro_rules! from_wire {
    ($record:ty, $wire:ty) => {
        impl $crate::xml::FromReport for $record {
            fn from_report(xml: &[u8]) -> $crate::Result<Self> {
                $crate::xml::decode::<$wire>(xml).map(Self::from)
            }
        }
    };
}

pub(crate) use from_wire;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_available() {
        assert_eq!(available(Some(NOT_AVAILABLE)), None);
        assert_eq!(available(Some(402.0)), Some(402.0));
        assert_eq!(available(None), None);
    }

    #[test]
    fn malformed_document_is_xml_error() {
        #[derive(serde::Deserialize)]
        struct Wire {
            #[serde(rename = "ObjStatus")]
            _status: i64,
        }
        let err = decode::<Wire>(b"<OMA><ObjStatus>two</ObjStatus></OMA>")
            .err()
            .unwrap();
        assert!(matches!(err, crate::OmReportError::Xml(_)));
    }

    #[derive(serde::Deserialize)]
    struct Probe {
        #[serde(rename = "@index", deserialize_with = "lenient")]
        id: u32,
        #[serde(rename = "Reading", deserialize_with = "lenient", default)]
        reading: f64,
        #[serde(rename = "Threshold", deserialize_with = "lenient_option", default)]
        threshold: Option<f64>,
    }

    #[test]
    fn empty_numbers_take_defaults() {
        let probe: Probe = decode(
            b"<OMA index=\"\"><Reading></Reading><Threshold>  </Threshold></OMA>",
        )
        .unwrap();
        assert_eq!(probe.id, 0);
        assert!(probe.reading.abs() < f64::EPSILON);
        assert_eq!(probe.threshold, None);
    }

    #[test]
    fn lenient_numbers_still_parse() {
        let probe: Probe =
            decode(b"<OMA index=\"3\"><Reading> 402 </Reading><Threshold>9</Threshold></OMA>")
                .unwrap();
        assert_eq!(probe.id, 3);
        assert!((probe.reading - 402.0).abs() < f64::EPSILON);
        assert_eq!(probe.threshold, Some(9.0));

        let err = decode::<Probe>(b"<OMA index=\"x\"/>").err().unwrap();
        assert!(matches!(err, crate::OmReportError::Xml(_)));
    }
}
