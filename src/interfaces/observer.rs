// ============================================================================
// Conversion Observer Interface
// Defines the contract for reporting codec decode diagnostics
// ============================================================================

use crate::codec::Format;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by codec adapters while decoding
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// A binary float was converted; the result may carry float error
    LossyFloat {
        format: Format,
        input: f64,
        decoded: String,
    },

    /// An explicit null was coerced to zero
    NullAsZero { format: Format },

    /// Decoding failed and the error was returned to the caller
    Rejected { format: Format, reason: String },
}

/// Observer trait for codec diagnostics.
/// Implementations can log, count, or collect events; adapters never read
/// process-wide state to decide where diagnostics go.
pub trait ConversionObserver: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);
}

/// No-op observer, used by the plain `decode` functions
pub struct NoOpObserver;

impl ConversionObserver for NoOpObserver {
    fn on_event(&self, _event: ConversionEvent) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl ConversionObserver for LoggingObserver {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Rejected { format, reason } => {
                tracing::warn!(%format, %reason, "value decode rejected");
            },
            _ => tracing::debug!("Value conversion event: {:?}", event),
        }
    }
}

/// Collects events for assertions
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingObserver {
    events: std::sync::Mutex<Vec<ConversionEvent>>,
}

#[cfg(test)]
impl RecordingObserver {
    pub(crate) fn events(&self) -> Vec<ConversionEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl ConversionObserver for RecordingObserver {
    fn on_event(&self, event: ConversionEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer() {
        let observer = NoOpObserver;
        observer.on_event(ConversionEvent::NullAsZero {
            format: Format::Json,
        });
        // Should not panic
    }

    #[test]
    fn test_logging_observer_emits_through_tracing() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            LoggingObserver.on_event(ConversionEvent::Rejected {
                format: Format::Sql,
                reason: "unsupported sql source type: bool".to_string(),
            });
            LoggingObserver.on_event(ConversionEvent::LossyFloat {
                format: Format::Yaml,
                input: 0.1,
                decoded: "0.1".to_string(),
            });
        });
    }

    #[test]
    fn test_recording_observer() {
        let observer = RecordingObserver::default();
        observer.on_event(ConversionEvent::NullAsZero {
            format: Format::Json,
        });
        assert_eq!(
            observer.events(),
            vec![ConversionEvent::NullAsZero {
                format: Format::Json
            }]
        );
    }
}
