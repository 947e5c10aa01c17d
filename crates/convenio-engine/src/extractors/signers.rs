// Signatories and their titles
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use crate::taxonomy::TaxonomyRegistry;
use crate::text::context_window;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Cargo, Signer};
use std::collections::HashSet;

/// Maximum number of signers kept per document
pub const MAX_SIGNERS: usize = 5;

/// Characters of context read on each side of a name to find its title
pub const TITLE_CONTEXT_CHARS: usize = 100;

lazy_static! {
    /// Case-sensitive: a name is a run of capitalised words
    static ref NAME_PATTERNS: Vec<Regex> = vec![
        Regex::new(
            r"([A-ZÁÉÍÓÚÑ][a-záéíóúñü]+)\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñü]+(?:\s+[A-ZÁÉÍÓÚÑ][a-záéíóúñü]+)*)"
        )
        .unwrap(),
        Regex::new(r"Dra?\.\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñü]+)\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñü]+)").unwrap(),
        Regex::new(r"Ing\.\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñü]+)\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñü]+)").unwrap(),
        Regex::new(r"Lic\.\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñü]+)\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñü]+)").unwrap(),
    ];
}

/// Name parts of two characters or fewer are rejected
const MIN_PART_CHARS: usize = 2;

/// Find the signatories named in `text`.
///
/// The title of each signer is looked up in the text surrounding the name;
/// without a recognisable title the signer is taken to be the rector.
pub fn extract_signers(text: &str, sink: &mut dyn DiagnosticSink) -> Vec<Signer> {
    let taxonomy = &TaxonomyRegistry::global().signer_titles;
    let mut seen = HashSet::new();
    let mut signers = Vec::new();

    'scan: for pattern in NAME_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let (nombre, apellido) = (&caps[1], &caps[2]);
            if nombre.chars().count() <= MIN_PART_CHARS || apellido.chars().count() <= MIN_PART_CHARS {
                continue;
            }
            if !seen.insert(format!("{} {}", nombre, apellido).to_lowercase()) {
                continue;
            }
            if signers.len() == MAX_SIGNERS {
                sink.emit(Diagnostic::info(
                    DiagnosticCode::ListCapped,
                    format!("More than {} signers, dropping {} {} and later", MAX_SIGNERS, nombre, apellido),
                ));
                break 'scan;
            }

            let (start, end) = caps.get(0).map_or((0, 0), |m| (m.start(), m.end()));
            let window = context_window(text, start, end, TITLE_CONTEXT_CHARS);
            let cargo = taxonomy.lookup_substring_or(window, Cargo::default());
            signers.push(Signer::new(nombre, apellido, cargo));
        }
    }

    signers
}
