pub mod assembler;
pub mod config;
pub mod dates;
pub mod diagnostics;
pub mod error;
pub mod extractors;
pub mod taxonomy;
pub mod text;

pub use config::{EngineConfig, Geography};
pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticLevel, DiagnosticSink, Diagnostics, TracingSink};
pub use error::EngineError;
pub use taxonomy::TaxonomyRegistry;

use shared_types::{ConvenioRecord, ExtractedRecord, RawDocument, ResolutionRecord};
use std::time::Instant;

/// ConvenioEngine entry point.
///
/// Holds only its configuration, so one engine can be shared across threads
/// and used for any number of documents.
pub struct ConvenioEngine {
    config: EngineConfig,
}

impl ConvenioEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract one record from a document.
    ///
    /// Fails only when the text is too short to be worth reading. Everything
    /// else degrades to defaults and is reported through `sink`.
    pub fn extract(
        &self,
        document: &RawDocument,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<ExtractedRecord, EngineError> {
        let found = document.text.trim().chars().count();
        if found < self.config.min_text_chars {
            let error = EngineError::InsufficientText {
                found,
                required: self.config.min_text_chars,
            };
            sink.emit(Diagnostic::warning(DiagnosticCode::InsufficientText, error.to_string()));
            return Err(error);
        }

        let text = text::clip_to_bytes(&document.text, self.config.max_text_bytes);
        if text.len() < document.text.len() {
            sink.emit(Diagnostic::warning(
                DiagnosticCode::TextTruncated,
                format!(
                    "Text is {} bytes, only the first {} are read",
                    document.text.len(),
                    text.len()
                ),
            ));
        }

        let mut budget = Budget::start(&self.config);
        let locator = document.source_locator.as_str();

        let resolution = if budget.allows("resolution", sink) {
            extractors::extract_resolution(text, locator, sink)
        } else {
            ResolutionRecord::for_locator(locator)
        };

        let convenio = if budget.allows("convenio", sink) {
            extractors::extract_convenio(text, sink)
        } else {
            ConvenioRecord::default()
        };

        let institutions = if budget.allows("institutions", sink) {
            extractors::extract_institutions(text, &self.config.geography, sink)
        } else {
            Vec::new()
        };

        let signers = if budget.allows("signers", sink) {
            extractors::extract_signers(text, sink)
        } else {
            Vec::new()
        };

        Ok(assembler::assemble(resolution, convenio, institutions, signers))
    }
}

impl Default for ConvenioEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Wall-clock guard checked between extraction passes
struct Budget {
    deadline: Option<Instant>,
    exceeded: bool,
}

impl Budget {
    fn start(config: &EngineConfig) -> Self {
        Self {
            deadline: config.time_budget().map(|budget| Instant::now() + budget),
            exceeded: false,
        }
    }

    /// Whether the next pass may run. Reports the overrun once.
    fn allows(&mut self, pass: &str, sink: &mut dyn DiagnosticSink) -> bool {
        if self.exceeded {
            return false;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.exceeded = true;
                sink.emit(Diagnostic::warning(
                    DiagnosticCode::TimeBudgetExceeded,
                    format!("Time budget exhausted before the {} pass, returning a partial record", pass),
                ));
                false
            }
            _ => true,
        }
    }
}
