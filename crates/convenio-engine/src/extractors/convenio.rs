// Agreement-level attributes: type, title, duration, signing date, scope, renewal, purpose
use crate::dates::{parse_spanish_date, SIGNING_DATE_PATTERNS};
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use crate::taxonomy::TaxonomyRegistry;
use crate::text::truncate_chars;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ConvenioRecord, TipoConvenio};

/// Maximum stored length of `titulo`, in characters
pub const TITLE_MAX_CHARS: usize = 255;

/// Maximum stored length of `objeto`, in characters
pub const PURPOSE_MAX_CHARS: usize = 500;

lazy_static! {
    /// Rest of the sentence after the word "convenio"
    static ref TITLE_PATTERN: Regex = Regex::new(r"(?i)\bconvenio\s+(.+?)(?:\n|\.)").unwrap();

    /// "duración: 4 años", "vigencia de cinco (5) años", "plazo 2 años"
    static ref DURATION_PATTERNS: Vec<Regex> = ["duraci[oó]n", "vigencia", "plazo"]
        .iter()
        .map(|keyword| {
            Regex::new(&format!(
                r"(?i){}\s*:?\s*(?:de\s+)?(?:\w+\s+)?\(?([0-9]+)\)?\s*a[ñn]os?",
                keyword
            ))
            .unwrap()
        })
        .collect();

    static ref INTERNATIONAL_PATTERN: Regex =
        Regex::new(r"(?i)\b(?:internacional|extranjero|exterior)\b").unwrap();

    /// "objeto: ..." up to a blank line or a sentence ending before a capital letter
    static ref PURPOSE_PATTERNS: Vec<Regex> = ["objeto", "prop[oó]sito", "finalidad"]
        .iter()
        .map(|keyword| {
            Regex::new(&format!(
                r"(?s)\b(?i:{})\b\s*:?\s*(.+?)(?:\n[ \t\r]*\n|\.\s*[A-ZÁÉÍÓÚÑ])",
                keyword
            ))
            .unwrap()
        })
        .collect();
}

/// Extract the agreement attributes of a document.
///
/// Every field has an independent rule; a field without a match keeps its
/// default (`Marco` for the type, empty or `false` for the rest).
pub fn extract_convenio(text: &str, sink: &mut dyn DiagnosticSink) -> ConvenioRecord {
    let taxonomy = TaxonomyRegistry::global();

    let tipo_convenio = match taxonomy.agreement_types.lookup_whole_word(text) {
        Some(tipo) => tipo,
        None => {
            sink.emit(Diagnostic::info(
                DiagnosticCode::FieldDefaulted,
                format!("No agreement type found, using {}", TipoConvenio::default()),
            ));
            TipoConvenio::default()
        }
    };

    ConvenioRecord {
        tipo_convenio,
        titulo: extract_title(text),
        duracion: extract_duration(text),
        fecha_firma: parse_spanish_date(text, &SIGNING_DATE_PATTERNS, sink),
        tipo_renovacion: taxonomy.renewal_types.lookup_whole_word(text),
        internacional: INTERNATIONAL_PATTERN.is_match(text),
        objeto: extract_purpose(text),
        observaciones: String::new(),
    }
}

fn extract_title(text: &str) -> String {
    TITLE_PATTERN
        .captures(text)
        .map(|caps| truncate_chars(caps[1].trim(), TITLE_MAX_CHARS))
        .unwrap_or_default()
}

fn extract_duration(text: &str) -> String {
    DURATION_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

fn extract_purpose(text: &str) -> String {
    PURPOSE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .map(|caps| truncate_chars(caps[1].trim(), PURPOSE_MAX_CHARS))
        .unwrap_or_default()
}
