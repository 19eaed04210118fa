//! Conversion reports.
//!
//! A report wraps one [`ConversionResult`] with the input, the mode it was
//! produced in, a unique id and a timestamp, so a result can be handed to
//! another process (a viewer, a log store) as JSON or compact binary.

use crate::engine::{ConversionResult, Converter, EngineFault, Mode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Serializable record of one conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Report format version
    pub version: u32,

    /// Unique report identifier
    pub id: Uuid,

    /// When the conversion ran
    pub timestamp: DateTime<Utc>,

    /// The infix input
    pub expression: String,

    /// Mode the converter ran in
    pub mode: Mode,

    /// Postfix, trace, verdict and automaton path
    pub result: ConversionResult,
}

impl ConversionReport {
    pub fn new(expression: impl Into<String>, mode: Mode, result: ConversionResult) -> Self {
        Self {
            version: REPORT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            expression: expression.into(),
            mode,
            result,
        }
    }

    /// Run `converter` on `expression` and wrap the result.
    pub fn capture(converter: &mut Converter, expression: &str) -> Result<Self, EngineFault> {
        let result = converter.convert(expression)?;
        Ok(Self::new(expression, converter.mode(), result))
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self = bincode::deserialize(bytes)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    fn check_version(self) -> Result<Self, ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }
        Ok(self)
    }
}
