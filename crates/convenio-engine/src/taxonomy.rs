//! Ordered vocabularies mapping free-text terms to canonical categories.
//!
//! Each table is a list of `(term, value)` pairs and the list order is the
//! tie-break: a lookup returns the value of the earliest declared term found
//! in the text, wherever in the text it occurs. Compound terms are therefore
//! declared ahead of the shorter terms they contain.
//!
//! Terms are written lower-case without diacritics; lookups fold the input
//! the same way (see [`crate::text::fold`]).

use crate::text::fold;
use lazy_static::lazy_static;
use regex::RegexSet;
use shared_types::{Cargo, TipoConvenio, TipoInstitucion, TipoRenovacion};

/// Agreement types, matched as whole words
pub const AGREEMENT_TYPE_TERMS: &[(&str, TipoConvenio)] = &[
    ("acta acuerdo", TipoConvenio::ActaAcuerdo),
    ("acta complemento", TipoConvenio::ActaComplemento),
    ("acta compromiso", TipoConvenio::ActaCompromiso),
    ("acta especifica", TipoConvenio::ActaEspecifica),
    ("acuerdo complementario", TipoConvenio::AcuerdoComplementario),
    ("acuerdo de cooperacion", TipoConvenio::AcuerdoCooperacion),
    ("acuerdo cooperacion", TipoConvenio::AcuerdoCooperacion),
    ("acuerdo especifico", TipoConvenio::AcuerdoEspecifico),
    ("acuerdo de investigacion", TipoConvenio::AcuerdoInvestigacion),
    ("acuerdo investigacion", TipoConvenio::AcuerdoInvestigacion),
    ("acuerdo", TipoConvenio::Acuerdo),
    ("adenda", TipoConvenio::Adenda),
    ("adhesion", TipoConvenio::Adhesion),
    ("anexo", TipoConvenio::Anexo),
    ("comision de estudio", TipoConvenio::ComisionDeEstudio),
    ("carta de intencion", TipoConvenio::CartaIntencion),
    ("carta intencion", TipoConvenio::CartaIntencion),
    ("protocolo especifico", TipoConvenio::ProtocoloEspecifico),
    ("especifico", TipoConvenio::Especifico),
    ("general", TipoConvenio::General),
    ("marco de colaboracion", TipoConvenio::MarcoDeColaboracion),
    ("marco de cooperacion", TipoConvenio::MarcoDeCooperacion),
    ("marco de investigacion", TipoConvenio::MarcoDeInvestigacion),
    ("marco de intercambio de alumnos", TipoConvenio::MarcoDeIntercambioDeAlumnos),
    ("marco de intercambio", TipoConvenio::MarcoDeIntercambio),
    ("marco de pasantias", TipoConvenio::MarcoDePasantias),
    ("marco", TipoConvenio::Marco),
    ("memorandum de entendimiento", TipoConvenio::MemorandumDeEntendimiento),
    ("memorandum", TipoConvenio::Memorandum),
    ("pps", TipoConvenio::Pps),
    ("protocolo adicional", TipoConvenio::ProtocoloAdicional),
    ("protocolo de colaboracion", TipoConvenio::ProtocoloDeColaboracion),
    ("protocolo de investigacion", TipoConvenio::ProtocoloDeInvestigacion),
    ("protocolo", TipoConvenio::Protocolo),
    ("proyecto", TipoConvenio::Proyecto),
    ("subvencion", TipoConvenio::Subvencion),
    ("transferencia tecnologica", TipoConvenio::TransferenciaTecnologica),
];

/// Institution types, matched as substrings of the institution name.
/// "universidad" precedes "nacional" so national universities stay universities.
pub const INSTITUTION_TYPE_TERMS: &[(&str, TipoInstitucion)] = &[
    ("agencia", TipoInstitucion::Agencia),
    ("agremiacion", TipoInstitucion::Agremiacion),
    ("asociacion", TipoInstitucion::Asociacion),
    ("club", TipoInstitucion::Club),
    ("educativa", TipoInstitucion::Educativa),
    ("empresa", TipoInstitucion::Empresa),
    ("ente", TipoInstitucion::Ente),
    ("fundacion", TipoInstitucion::Fundacion),
    ("gobierno", TipoInstitucion::Gobierno),
    ("gubernamental", TipoInstitucion::Gubernamental),
    ("investigadora", TipoInstitucion::Investigadora),
    ("instituto", TipoInstitucion::Instituto),
    ("universitaria", TipoInstitucion::Universitaria),
    ("universidad", TipoInstitucion::Universitaria),
    ("nacional", TipoInstitucion::Nacional),
    ("municipal", TipoInstitucion::Municipal),
    ("salud", TipoInstitucion::Salud),
    ("sindical", TipoInstitucion::Sindical),
    ("social", TipoInstitucion::Social),
    ("ong", TipoInstitucion::Ong),
    ("provincia", TipoInstitucion::Gubernamental),
    ("ministerio", TipoInstitucion::Gubernamental),
    ("direccion", TipoInstitucion::Gubernamental),
];

/// Renewal types, matched as whole words
pub const RENEWAL_TYPE_TERMS: &[(&str, TipoRenovacion)] = &[
    ("partes iguales", TipoRenovacion::PartesIguales),
    ("escalera", TipoRenovacion::Escalera),
    ("unica", TipoRenovacion::Unica),
    ("sin renovacion", TipoRenovacion::SinRenovacion),
    ("renovable de comun acuerdo", TipoRenovacion::RenovableDeComunAcuerdo),
    ("renovable", TipoRenovacion::RenovableDeComunAcuerdo),
];

/// Signer titles, matched as substrings of the text around a name.
/// "vicerrector" and "director" contain "rector", so they are declared first.
pub const SIGNER_TITLE_TERMS: &[(&str, Cargo)] = &[
    ("vicerrector", Cargo::Vicerrector),
    ("vicerrectora", Cargo::Vicerrector),
    ("vicedecano", Cargo::Vicedecano),
    ("vicedecana", Cargo::Vicedecano),
    ("director", Cargo::Director),
    ("directora", Cargo::Director),
    ("rector", Cargo::Rector),
    ("rectora", Cargo::Rector),
    ("secretario", Cargo::Secretario),
    ("secretaria", Cargo::Secretario),
    ("coordinador", Cargo::Coordinador),
    ("coordinadora", Cargo::Coordinador),
    ("decano", Cargo::Decano),
    ("decana", Cargo::Decano),
    ("investigador", Cargo::Investigador),
    ("investigadora", Cargo::Investigador),
    ("ministro", Cargo::Director),
    ("ministra", Cargo::Director),
    ("interventor", Cargo::Director),
    ("interventora", Cargo::Director),
];

/// One ordered vocabulary with its whole-word matcher
pub struct Taxonomy<T: 'static> {
    name: &'static str,
    terms: &'static [(&'static str, T)],
    whole_words: RegexSet,
}

impl<T: Copy + 'static> Taxonomy<T> {
    fn new(name: &'static str, terms: &'static [(&'static str, T)]) -> Self {
        let patterns = terms
            .iter()
            .map(|(term, _)| format!(r"\b{}\b", regex::escape(term)));
        // Terms are static, a failure here is a bug in the tables above
        let whole_words = RegexSet::new(patterns).unwrap();
        Self {
            name,
            terms,
            whole_words,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn terms(&self) -> &'static [(&'static str, T)] {
        self.terms
    }

    /// Value of the earliest declared term occurring in `text` as a whole word
    pub fn lookup_whole_word(&self, text: &str) -> Option<T> {
        let folded = fold(text);
        // SetMatches iterates indices in ascending order
        self.whole_words
            .matches(&folded)
            .iter()
            .next()
            .map(|index| self.terms[index].1)
    }

    /// Value of the earliest declared term contained anywhere in `text`
    pub fn lookup_substring(&self, text: &str) -> Option<T> {
        let folded = fold(text);
        self.terms
            .iter()
            .find(|(term, _)| folded.contains(term))
            .map(|(_, value)| *value)
    }

    /// [`Self::lookup_substring`] falling back to `default`
    pub fn lookup_substring_or(&self, text: &str, default: T) -> T {
        self.lookup_substring(text).unwrap_or(default)
    }
}

/// The four vocabularies, built once per process and never mutated
pub struct TaxonomyRegistry {
    pub agreement_types: Taxonomy<TipoConvenio>,
    pub institution_types: Taxonomy<TipoInstitucion>,
    pub renewal_types: Taxonomy<TipoRenovacion>,
    pub signer_titles: Taxonomy<Cargo>,
}

lazy_static! {
    static ref REGISTRY: TaxonomyRegistry = TaxonomyRegistry {
        agreement_types: Taxonomy::new("agreement type", AGREEMENT_TYPE_TERMS),
        institution_types: Taxonomy::new("institution type", INSTITUTION_TYPE_TERMS),
        renewal_types: Taxonomy::new("renewal type", RENEWAL_TYPE_TERMS),
        signer_titles: Taxonomy::new("signer title", SIGNER_TITLE_TERMS),
    };
}

impl TaxonomyRegistry {
    pub fn global() -> &'static TaxonomyRegistry {
        &REGISTRY
    }
}
