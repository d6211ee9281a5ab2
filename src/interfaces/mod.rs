// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod observer;

pub use observer::{ConversionEvent, ConversionObserver, LoggingObserver, NoOpObserver};

#[cfg(test)]
pub(crate) use observer::RecordingObserver;
