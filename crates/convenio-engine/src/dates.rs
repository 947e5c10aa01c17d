//! Spanish date recognition.
//!
//! A date pattern pairs a regex with the layout of its three capture groups.
//! [`parse_spanish_date`] tries a list of patterns in order and returns the
//! first match that is a real calendar date.

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use crate::text::{expand_year, fold};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Month names, folded; "setiembre" is the Argentine spelling of September
const MONTHS: &[(&str, u32)] = &[
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

/// Month number for a spelled month. Unknown words map to January.
pub fn month_number(name: &str) -> u32 {
    let folded = fold(name);
    MONTHS
        .iter()
        .find(|(month, _)| *month == folded)
        .map(|(_, number)| *number)
        .unwrap_or(1)
}

/// Order and kind of the three captured components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `15 de marzo de 2020`
    DaySpelledMonthYear,
    /// `15/03/2020`, `15/3/20`
    DayMonthYear,
    /// `2020-03-15`
    YearMonthDay,
}

impl DateLayout {
    fn to_date(self, caps: &Captures<'_>) -> Option<NaiveDate> {
        let (first, second, third) = (&caps[1], &caps[2], &caps[3]);
        let (year, month, day) = match self {
            DateLayout::DaySpelledMonthYear => (expand_year(third)?, month_number(second), first),
            DateLayout::DayMonthYear => (expand_year(third)?, second.parse().ok()?, first),
            DateLayout::YearMonthDay => (expand_year(first)?, second.parse().ok()?, third),
        };
        NaiveDate::from_ymd_opt(year, month, day.parse().ok()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DatePattern {
    regex: &'static Regex,
    layout: DateLayout,
}

impl DatePattern {
    pub fn layout(&self) -> DateLayout {
        self.layout
    }
}

lazy_static! {
    static ref SPELLED_DATE: Regex =
        Regex::new(r"(?i)([0-9]{1,2})\s+de\s+(\w+)\s+de\s+([0-9]{4})").unwrap();

    static ref SLASH_DATE: Regex =
        Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4}|[0-9]{2})\b").unwrap();

    static ref DASH_ISO_DATE: Regex =
        Regex::new(r"([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})").unwrap();

    /// "firmado el 15/03/2020", "suscripto el 1-4-19"
    static ref SIGNED_NUMERIC_DATE: Regex = Regex::new(
        r"(?i)(?:firmad[oa]|suscr[ií]p?t[oa])\s+el\s+([0-9]{1,2})[/\-]([0-9]{1,2})[/\-]([0-9]{4}|[0-9]{2})\b"
    )
    .unwrap();

    /// "suscripto el 15 de marzo de 2020"
    static ref SIGNED_SPELLED_DATE: Regex = Regex::new(
        r"(?i)(?:firmad[oa]|suscr[ií]p?t[oa])\s+el\s+([0-9]{1,2})\s+de\s+(\w+)\s+de\s+([0-9]{4})"
    )
    .unwrap();

    /// Any date in the document: spelled, then slashed, then ISO-ordered
    pub static ref DOCUMENT_DATE_PATTERNS: Vec<DatePattern> = vec![
        DatePattern { regex: &*SPELLED_DATE, layout: DateLayout::DaySpelledMonthYear },
        DatePattern { regex: &*SLASH_DATE, layout: DateLayout::DayMonthYear },
        DatePattern { regex: &*DASH_ISO_DATE, layout: DateLayout::YearMonthDay },
    ];

    /// Signing date: numeric first, then spelled
    pub static ref SIGNING_DATE_PATTERNS: Vec<DatePattern> = vec![
        DatePattern { regex: &*SIGNED_NUMERIC_DATE, layout: DateLayout::DayMonthYear },
        DatePattern { regex: &*SIGNED_SPELLED_DATE, layout: DateLayout::DaySpelledMonthYear },
    ];
}

/// First calendar date found by `patterns`, tried in order.
///
/// Within a pattern, matches are visited left to right. A match that does not
/// name a real day (e.g. `31/02/2020`) is reported and skipped.
pub fn parse_spanish_date(
    text: &str,
    patterns: &[DatePattern],
    sink: &mut dyn DiagnosticSink,
) -> Option<NaiveDate> {
    for pattern in patterns {
        for caps in pattern.regex.captures_iter(text) {
            match pattern.layout.to_date(&caps) {
                Some(date) => return Some(date),
                None => sink.emit(Diagnostic::warning(
                    DiagnosticCode::InvalidDate,
                    format!("Ignoring impossible date {:?}", &caps[0]),
                )),
            }
        }
    }
    None
}
