//! Sink for non-fatal row diagnostics.
//!
//! Skipped rows are reported out of band instead of aborting the parse.
//! The sink is injectable so callers (and tests) can capture warnings
//! without going through a global logging channel.

/// Receives one warning per skipped row.
pub trait Diagnostics {
    fn warn(&mut self, message: &str);
}

/// Forwards warnings to the `log` facade. This is the sink used by the
/// plain [`parse`](crate::parse) entry point.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&mut self, message: &str) {
        log::warn!("{message}");
    }
}

/// Collects warnings in memory so they can be inspected after parsing.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    warnings: Vec<String>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
