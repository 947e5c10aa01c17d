//! Diagnostics emitted while extracting a record.
//!
//! The engine holds no logger. Every extraction call receives a
//! [`DiagnosticSink`]; callers choose whether diagnostics are collected in
//! memory ([`Diagnostics`]) or forwarded to `tracing` ([`TracingSink`]).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// Input below the minimum length, no record produced
    InsufficientText,
    /// Input above the size guard, tail ignored
    TextTruncated,
    /// Per-call time budget ran out, remaining parts left at defaults
    TimeBudgetExceeded,
    /// A field fell back to its documented default
    FieldDefaulted,
    /// A date-shaped match that is not a calendar date
    InvalidDate,
    /// More distinct entities found than a record holds
    ListCapped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub code: DiagnosticCode,
    pub message: String,
}

impl Diagnostic {
    pub fn info(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            code,
            message: message.into(),
        }
    }
}

/// Receiver for diagnostics produced during one extraction call
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// In-memory collector
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warning)
    }

    pub fn contains(&self, code: DiagnosticCode) -> bool {
        self.entries.iter().any(|d| d.code == code)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl DiagnosticSink for Diagnostics {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`, tagged with the document they belong to
pub struct TracingSink<'a> {
    document: &'a str,
    warnings: usize,
}

impl<'a> TracingSink<'a> {
    pub fn new(document: &'a str) -> Self {
        Self {
            document,
            warnings: 0,
        }
    }

    /// Number of warnings forwarded so far
    pub fn warnings(&self) -> usize {
        self.warnings
    }
}

impl DiagnosticSink for TracingSink<'_> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Info => {
                tracing::debug!(document = self.document, code = ?diagnostic.code, "{}", diagnostic.message);
            }
            DiagnosticLevel::Warning => {
                self.warnings += 1;
                tracing::warn!(document = self.document, code = ?diagnostic.code, "{}", diagnostic.message);
            }
        }
    }
}
