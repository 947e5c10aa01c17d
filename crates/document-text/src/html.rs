//! HTML to plain text.
//!
//! Scripts, styles and comments are dropped. Line breaks and block ends start
//! new lines, other tags are removed and entities are decoded. The remaining
//! text is reflowed: lines are trimmed, double spaces split phrases onto their
//! own lines and empty lines disappear.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref NON_TEXT_BLOCK: Regex =
        Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->").unwrap();
    static ref LINE_BREAK_TAG: Regex =
        Regex::new(r"(?i)<br\s*/?>|</(?:p|div|h[1-6]|li|tr|td|th|table|section)\s*>").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref ENTITY: Regex = Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").unwrap();
}

/// Named entities common in Spanish administrative pages
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("nbsp", " "),
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("quot", "\""),
    ("apos", "'"),
    ("aacute", "á"),
    ("eacute", "é"),
    ("iacute", "í"),
    ("oacute", "ó"),
    ("uacute", "ú"),
    ("Aacute", "Á"),
    ("Eacute", "É"),
    ("Iacute", "Í"),
    ("Oacute", "Ó"),
    ("Uacute", "Ú"),
    ("ntilde", "ñ"),
    ("Ntilde", "Ñ"),
    ("uuml", "ü"),
    ("Uuml", "Ü"),
    ("ordm", "º"),
    ("ordf", "ª"),
    ("deg", "°"),
    ("iquest", "¿"),
    ("iexcl", "¡"),
    ("laquo", "«"),
    ("raquo", "»"),
    ("ndash", "–"),
    ("mdash", "—"),
];

fn decode_entity(caps: &Captures<'_>) -> String {
    let body = &caps[1];
    let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32).map(String::from)
    } else if let Some(decimal) = body.strip_prefix('#') {
        decimal.parse().ok().and_then(char::from_u32).map(String::from)
    } else {
        NAMED_ENTITIES
            .iter()
            .find(|(name, _)| *name == body)
            .map(|(_, value)| value.to_string())
    };
    // unknown entities are kept as written
    decoded.unwrap_or_else(|| caps[0].to_string())
}

/// Visible text of an HTML page, one phrase per line
pub fn html_to_text(html: &str) -> String {
    let without_blocks = NON_TEXT_BLOCK.replace_all(html, "");
    let with_breaks = LINE_BREAK_TAG.replace_all(&without_blocks, "\n");
    let without_tags = TAG.replace_all(&with_breaks, "");
    let decoded = ENTITY.replace_all(&without_tags, decode_entity);

    decoded
        .lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_and_styles_are_dropped() {
        let html = "<html><head><style>p { color: red; }</style>\
                    <script type=\"text/javascript\">var x = '<b>';</script></head>\
                    <body><p>Convenio Marco</p><!-- oculto --></body></html>";
        assert_eq!(html_to_text(html), "Convenio Marco");
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = "<p>Resoluci&oacute;n N&ordm; 123 &ndash; A&Ntilde;O &#50;&#48;&#x32;&#x30; &amp; m&aacute;s</p>";
        assert_eq!(html_to_text(html), "Resolución Nº 123 – AÑO 2020 & más");
    }

    #[test]
    fn test_escaped_markup_is_not_stripped() {
        assert_eq!(html_to_text("<p>&lt;b&gt; literal</p>"), "<b> literal");
    }

    #[test]
    fn test_unknown_entities_are_kept() {
        assert_eq!(html_to_text("a &foo; b"), "a &foo; b");
    }

    #[test]
    fn test_block_tags_end_lines() {
        let html = "<h1>Resoluci&oacute;n</h1><p>SALTA, 3 de julio de 2021</p><p>Visto <b>el</b> expediente</p>";
        assert_eq!(html_to_text(html), "Resolución\nSALTA, 3 de julio de 2021\nVisto el expediente");
    }

    #[test]
    fn test_lines_are_reflowed() {
        let html = "<div>\n   VISTO:   el expediente\n\n\t<br/>CONSIDERANDO  </div>\n";
        assert_eq!(html_to_text(html), "VISTO:\nel expediente\nCONSIDERANDO");
    }
}
