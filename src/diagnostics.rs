//! Diagnostic output for the validator and graph builder.
//!
//! Library code never writes to a global logger directly. Callers hand in a
//! [`DiagnosticSink`]; the convenience entry points use [`LogSink`], which
//! forwards to the `log` facade.

use log::Level;

/// Log target used by [`LogSink`]
pub const LOG_TARGET: &str = "topograph";

/// Receiver for diagnostic messages
pub trait DiagnosticSink {
    fn emit(&mut self, level: Level, message: &str);

    fn error(&mut self, message: &str) {
        self.emit(Level::Error, message);
    }

    fn warn(&mut self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn info(&mut self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn debug(&mut self, message: &str) {
        self.emit(Level::Debug, message);
    }
}

/// Forwards every message to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{}", message);
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _level: Level, _message: &str) {}
}

/// Keeps every message in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub messages: Vec<(Level, String)>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages emitted at exactly `level`
    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(move |(l, _)| *l == level)
            .map(|(_, message)| message.as_str())
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|(level, _)| *level == Level::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|(level, _)| *level == Level::Warn)
    }

    /// Replay collected messages into another sink
    pub fn drain_into(&mut self, sink: &mut dyn DiagnosticSink) {
        for (level, message) in self.messages.drain(..) {
            sink.emit(level, &message);
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, level: Level, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}
