// ============================================================================
// Observer Integration Tests
// Decoders reporting through LoggingObserver into a tracing subscriber
// ============================================================================

use money_value::codec::sql::{self, SqlValue};
use money_value::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured<F: FnOnce()>(f: F) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = capture.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_rejected_scan_is_logged() {
    let output = captured(|| {
        let result = sql::scan_observed(&SqlValue::Bool(true), &LoggingObserver);
        assert!(result.is_err());
    });

    assert!(output.contains("WARN"), "{}", output);
    assert!(output.contains("value decode rejected"), "{}", output);
    assert!(output.contains("sql"), "{}", output);
}

#[test]
fn test_no_op_observer_is_silent() {
    let output = captured(|| {
        let _ = sql::scan_observed(&SqlValue::Bool(true), &NoOpObserver);
        let _ = sql::scan_observed(&SqlValue::Float(1.5), &NoOpObserver);
    });

    assert!(output.is_empty(), "{}", output);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_null_is_logged_at_debug() {
    use money_value::codec::json;

    let output = captured(|| {
        assert!(json::decode_observed("null", &LoggingObserver).unwrap().is_zero());
    });

    assert!(output.contains("DEBUG"), "{}", output);
}
