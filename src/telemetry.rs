//! Application telemetry events and sinks.
//!
//! Vitrine is a local demo, but it still benefits from lightweight telemetry
//! to support debugging and to capture operational signals such as accepted
//! reviews and cart churn.

use std::io;

use serde::{Deserialize, Serialize};

use crate::catalog::CartAction;

/// A structured telemetry event emitted by Vitrine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records an accepted review submission.
    ReviewAccepted {
        /// Rating carried by the accepted record, 1-5.
        rating: u8,
    },
    /// Records a cart mutation after it applied.
    CartChanged {
        /// Whether the mutation added or removed an entry.
        action: CartAction,
        /// Cart size after the mutation.
        entry_count: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
