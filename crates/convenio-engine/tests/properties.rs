//! Property tests over the extraction rules

use chrono::{Datelike, NaiveDate};
use convenio_engine::dates::{parse_spanish_date, DOCUMENT_DATE_PATTERNS};
use convenio_engine::extractors::convenio::{PURPOSE_MAX_CHARS, TITLE_MAX_CHARS};
use convenio_engine::extractors::institutions::MAX_INSTITUTIONS;
use convenio_engine::extractors::signers::MAX_SIGNERS;
use convenio_engine::extractors::{extract_convenio, extract_institutions, extract_signers};
use convenio_engine::text::expand_year;
use convenio_engine::{ConvenioEngine, Diagnostics, Geography};
use proptest::prelude::*;
use shared_types::{RawDocument, TipoConvenio};
use std::collections::HashSet;

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn calendar_date() -> impl Strategy<Value = NaiveDate> {
    (1951i32..=2050, 1u32..=12, 1u32..=31)
        .prop_filter_map("not a calendar day", |(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

fn parse(text: &str) -> Option<NaiveDate> {
    parse_spanish_date(text, &DOCUMENT_DATE_PATTERNS, &mut Diagnostics::new())
}

fn capitalised_word() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{3,8}"
}

proptest! {
    /// Property: every supported rendering of a date parses back to it
    #[test]
    fn date_round_trip(date in calendar_date(), padded in any::<bool>()) {
        let (y, m, d) = (date.year(), date.month(), date.day());
        let month_name = MONTH_NAMES[(m - 1) as usize];

        let renderings = if padded {
            vec![
                format!("Salta, {:02} de {} de {}", d, month_name, y),
                format!("fecha {:02}/{:02}/{}", d, m, y),
                format!("fecha {:02}/{:02}/{:02}", d, m, y % 100),
                format!("registro {}-{:02}-{:02}", y, m, d),
            ]
        } else {
            vec![
                format!("Salta, {} de {} de {}", d, month_name.to_uppercase(), y),
                format!("fecha {}/{}/{}", d, m, y),
                format!("fecha {}/{}/{:02}", d, m, y % 100),
                format!("registro {}-{}-{}", y, m, d),
            ]
        };

        for text in renderings {
            prop_assert_eq!(parse(&text), Some(date), "rendering {:?}", text);
        }
    }

    /// Property: two-digit years pivot at 50
    #[test]
    fn two_digit_year_pivot(n in 0i32..100) {
        let expected = if n > 50 { 1900 + n } else { 2000 + n };
        prop_assert_eq!(expand_year(&format!("{:02}", n)), Some(expected));
    }

    /// Property: the earlier declared term wins wherever the later one sits
    #[test]
    fn declared_order_beats_text_order(
        prefix in "[0-9 ]{0,30}",
        middle in "[0-9 ]{1,30}",
        suffix in "[0-9 ]{0,30}",
    ) {
        let text = format!("{} marco {} marco de cooperacion {}", prefix, middle, suffix);
        let convenio = extract_convenio(&text, &mut Diagnostics::new());
        prop_assert_eq!(convenio.tipo_convenio, TipoConvenio::MarcoDeCooperacion);
    }

    /// Property: institution lists are capped and case-insensitively unique
    #[test]
    fn institutions_capped_and_unique(
        names in prop::collection::vec((capitalised_word(), any::<bool>()), 0..12)
    ) {
        let text: String = names
            .iter()
            .map(|(name, shout)| {
                let line = format!("Universidad {}", name);
                if *shout { line.to_uppercase() } else { line }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let institutions = extract_institutions(&text, &Geography::default(), &mut Diagnostics::new());
        prop_assert!(institutions.len() <= MAX_INSTITUTIONS);

        let keys: HashSet<String> = institutions.iter().map(|i| i.nombre.to_lowercase()).collect();
        prop_assert_eq!(keys.len(), institutions.len());
    }

    /// Property: signer lists are capped and case-insensitively unique
    #[test]
    fn signers_capped_and_unique(
        names in prop::collection::vec((capitalised_word(), capitalised_word()), 0..12)
    ) {
        let text: String = names
            .iter()
            .map(|(nombre, apellido)| format!("{} {}", nombre, apellido))
            .collect::<Vec<_>>()
            .join("; ");

        let signers = extract_signers(&text, &mut Diagnostics::new());
        prop_assert!(signers.len() <= MAX_SIGNERS);

        let keys: HashSet<String> = signers.iter().map(|s| s.full_name().to_lowercase()).collect();
        prop_assert_eq!(keys.len(), signers.len());
    }

    /// Property: title and purpose never exceed their limits
    #[test]
    fn title_and_purpose_truncated(body in "[a-zñáé ]{200,800}") {
        let text = format!("convenio {}.\nobjeto: {}\n\n", body, body);
        let convenio = extract_convenio(&text, &mut Diagnostics::new());

        prop_assert!(convenio.titulo.chars().count() <= TITLE_MAX_CHARS);
        prop_assert!(convenio.objeto.chars().count() <= PURPOSE_MAX_CHARS);

        let trimmed = body.trim().chars().count();
        prop_assert_eq!(convenio.titulo.chars().count(), trimmed.min(TITLE_MAX_CHARS));
    }

    /// Property: extraction never panics on arbitrary input
    #[test]
    fn engine_never_panics(text in "\\PC*", locator in "\\PC{0,40}") {
        let engine = ConvenioEngine::default();
        let _ = engine.extract(&RawDocument::new(text, locator), &mut Diagnostics::new());
    }
}
