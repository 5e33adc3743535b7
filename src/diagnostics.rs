//! Diagnostic sink for data-quality warnings.
//!
//! Collision events are collected here instead of being written to an ambient
//! channel, so the pipeline stays a pure function for testing. Every recorded
//! event is mirrored to `tracing` at warn level.

use std::fmt;

use tracing::warn;

/// A single data-quality warning. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Two endpoints were indistinguishable at the wire level.
    DuplicateEndpoint { client: String, key: String },
    /// Two endpoints would generate methods with the same call signature.
    DuplicateSignature { client: String, signature: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateEndpoint { client, key } => write!(
                f,
                "client '{client}': duplicate endpoint '{key}', keeping the later definition"
            ),
            Diagnostic::DuplicateSignature { client, signature } => write!(
                f,
                "client '{client}': duplicate method signature '{signature}', keeping the later definition"
            ),
        }
    }
}

/// Ordered collection of warnings emitted during a generation run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    events: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.events.push(diagnostic);
    }

    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    /// Render the collected events as the line-oriented warning output.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
