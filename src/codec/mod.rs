// ============================================================================
// Codec Module
// Adapters between external representations and Value
// ============================================================================
//
// One module per representation, each a decode/encode function pair:
// - text:     plain decimal strings
// - binary:   fixed 16-byte engine encoding
// - json:     JSON string/number tokens and serde impls        (feature "serde")
// - xml:      element text / attribute values, 2-digit output  (feature "serde")
// - sql:      SQL driver values
// - document: BSON typed numeric elements                      (feature "bson")
// - yaml:     YAML scalar nodes                                (feature "yaml")
//
// Decoders that accept several native shapes dispatch on a closed enum of
// those shapes. Lossy conversions and failures are reported to an injected
// ConversionObserver; the plain `decode` functions use NoOpObserver.

use crate::interfaces::{ConversionEvent, ConversionObserver};
use crate::numeric::{NumericResult, Value};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod binary;
pub mod sql;
pub mod text;

#[cfg(feature = "bson")]
pub mod document;
#[cfg(feature = "serde")]
pub mod json;
#[cfg(feature = "serde")]
pub mod xml;
#[cfg(feature = "yaml")]
pub mod yaml;

/// External representation a codec adapter translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Format {
    Text,
    Json,
    Xml,
    Sql,
    Document,
    Yaml,
    Binary,
}

impl Format {
    pub const fn name(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Sql => "sql",
            Format::Document => "document",
            Format::Yaml => "yaml",
            Format::Binary => "binary",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Shared Decode Helpers
// ============================================================================

/// Convert a float source, reporting the lossy hop.
pub(crate) fn decode_float(
    format: Format,
    input: f64,
    observer: &dyn ConversionObserver,
) -> NumericResult<Value> {
    let value = Value::from_f64(input)?;
    observer.on_event(ConversionEvent::LossyFloat {
        format,
        input,
        decoded: value.to_string(),
    });
    Ok(value)
}

/// Pass a decode result through, reporting failures.
pub(crate) fn report(
    format: Format,
    result: NumericResult<Value>,
    observer: &dyn ConversionObserver,
) -> NumericResult<Value> {
    if let Err(error) = &result {
        observer.on_event(ConversionEvent::Rejected {
            format,
            reason: error.to_string(),
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::RecordingObserver;
    use crate::numeric::NumericError;

    #[test]
    fn test_format_display() {
        assert_eq!(Format::Document.to_string(), "document");
        assert_eq!(Format::Yaml.to_string(), "yaml");
        assert_eq!(Format::Binary.to_string(), "binary");
    }

    #[test]
    fn test_decode_float_reports_event() {
        let observer = RecordingObserver::default();
        let value = decode_float(Format::Sql, 12.5, &observer).unwrap();
        assert_eq!(value.to_string(), "12.5");
        assert_eq!(
            observer.events(),
            vec![ConversionEvent::LossyFloat {
                format: Format::Sql,
                input: 12.5,
                decoded: "12.5".to_string(),
            }]
        );
    }

    #[test]
    fn test_report_only_failures() {
        let observer = RecordingObserver::default();
        let _ = report(Format::Text, Ok(Value::ONE), &observer);
        assert!(observer.events().is_empty());

        let _ = report(Format::Text, Err(NumericError::NonFinite), &observer);
        assert_eq!(
            observer.events(),
            vec![ConversionEvent::Rejected {
                format: Format::Text,
                reason: "value is not a finite number".to_string(),
            }]
        );
    }
}
