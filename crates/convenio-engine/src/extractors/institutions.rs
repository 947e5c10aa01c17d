// Participating institutions
use crate::config::Geography;
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use crate::taxonomy::TaxonomyRegistry;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Institution, TipoInstitucion};
use std::collections::HashSet;

/// Maximum number of institutions kept per document
pub const MAX_INSTITUTIONS: usize = 5;

/// Names of this many characters or fewer are discarded
const MIN_NAME_CHARS: usize = 5;

lazy_static! {
    /// Head noun followed by the rest of the line, up to a comma
    static ref INSTITUTION_PATTERNS: Vec<Regex> = [
        r"(?i)\buniversidad\s+[^,\n]+",
        r"(?i)\binstituto\s+[^,\n]+",
        r"(?i)\bministerio\s+[^,\n]+",
        r"(?i)\bgobierno\s+[^,\n]+",
        r"(?i)\bprovincia\s+de\s+\w+",
        r"(?i)\bmunicipalidad\s+[^,\n]+",
        r"(?i)\bfundaci[oó]n\s+[^,\n]+",
        r"(?i)\bempresa\s+[^,\n]+",
        r"(?i)\basociaci[oó]n\s+[^,\n]+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();

    /// Where a name stops when the sentence carries on past it
    static ref NAME_BOUNDARY: Regex = Regex::new(
        r"(?i);|\.\s|\s*\(|\s+(?:y|e)\s+(?:el|la|los|las|al)\s|\s+(?:representad[oa]s?|en\s+adelante|con\s+domicilio)\b"
    )
    .unwrap();
}

/// Candidate name from a raw match: cut at the first clause boundary, then trimmed
fn clean_name(raw: &str) -> &str {
    let name = match NAME_BOUNDARY.find(raw) {
        Some(boundary) => &raw[..boundary.start()],
        None => raw,
    };
    name.trim().trim_end_matches('.').trim_end()
}

/// Find, classify and deduplicate the institutions mentioned in `text`.
///
/// Patterns are scanned in declaration order and each one left to right.
/// Names are deduplicated case-insensitively; the first five survive.
pub fn extract_institutions(
    text: &str,
    geography: &Geography,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Institution> {
    let taxonomy = &TaxonomyRegistry::global().institution_types;
    let mut seen = HashSet::new();
    let mut institutions = Vec::new();

    'scan: for pattern in INSTITUTION_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            let name = clean_name(found.as_str());
            if name.chars().count() <= MIN_NAME_CHARS || !seen.insert(name.to_lowercase()) {
                continue;
            }
            if institutions.len() == MAX_INSTITUTIONS {
                sink.emit(Diagnostic::info(
                    DiagnosticCode::ListCapped,
                    format!("More than {} institutions, dropping {:?} and later", MAX_INSTITUTIONS, name),
                ));
                break 'scan;
            }
            institutions.push(Institution {
                nombre: name.to_string(),
                tipo: taxonomy.lookup_substring_or(name, TipoInstitucion::default()),
                pais: geography.pais.clone(),
                provincia: geography.provincia.clone(),
                localidad: geography.localidad.clone(),
            });
        }
    }

    institutions
}
