// Resolution number, date and case file (expediente)
use crate::dates::{parse_spanish_date, DOCUMENT_DATE_PATTERNS};
use crate::diagnostics::DiagnosticSink;
use crate::text::expand_year_token;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ResolutionRecord;

lazy_static! {
    /// Published file name: `R-DR-<year>-<number>.pdf`
    static ref LOCATOR_PATTERN: Regex =
        Regex::new(r"R-DR-([0-9]{4})-([0-9]{3,4})\.pdf").unwrap();

    /// "Expediente N° 12345/19", "Expte. Nro. 2101-2018"; the year has two or four digits
    static ref CASE_FILE_PATTERN: Regex = Regex::new(
        r"(?i)(?:expediente|expte\.?)\s*(?:n(?:ro)?[°º.]?\s*)?([0-9]+)[/\-]([0-9]{4}|[0-9]{2})\b"
    )
    .unwrap();
}

/// Build the resolution part of a record from the document text and its locator.
///
/// The locator supplies number and year; a case file in the text overrides the year.
pub fn extract_resolution(
    text: &str,
    source_locator: &str,
    sink: &mut dyn DiagnosticSink,
) -> ResolutionRecord {
    let mut resolution = ResolutionRecord::for_locator(source_locator);

    if let Some(caps) = LOCATOR_PATTERN.captures(source_locator) {
        resolution.expediente_anio = caps[1].to_string();
        resolution.numero = caps[2].to_string();
    }

    resolution.fecha = parse_spanish_date(text, &DOCUMENT_DATE_PATTERNS, sink);

    if let Some(caps) = CASE_FILE_PATTERN.captures(text) {
        resolution.expediente_numero = caps[1].to_string();
        resolution.expediente_anio = expand_year_token(&caps[2]);
    }

    resolution
}
