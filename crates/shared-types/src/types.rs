use crate::categories::{Cargo, TipoConvenio, TipoInstitucion, TipoRenovacion};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Resolution type code stamped on every record
pub const RESOLUTION_TYPE: &str = "DR";

/// Plain text of one document plus where it came from (file path or URL)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub text: String,
    pub source_locator: String,
}

impl RawDocument {
    pub fn new(text: impl Into<String>, source_locator: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_locator: source_locator.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRecord {
    pub numero: String,
    pub fecha: Option<NaiveDate>,
    pub tipo: String,
    pub expediente_numero: String,
    pub expediente_anio: String,
    /// No extraction rule exists for the issuing office; always empty
    pub dependencia_id: String,
    pub link: String,
}

impl ResolutionRecord {
    /// Empty resolution for a locator, before any field is extracted
    pub fn for_locator(link: &str) -> Self {
        Self {
            numero: String::new(),
            fecha: None,
            tipo: RESOLUTION_TYPE.to_string(),
            expediente_numero: String::new(),
            expediente_anio: String::new(),
            dependencia_id: String::new(),
            link: link.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvenioRecord {
    pub tipo_convenio: TipoConvenio,
    /// At most 255 characters
    pub titulo: String,
    /// Whole years as written in the document, empty when not stated
    pub duracion: String,
    pub fecha_firma: Option<NaiveDate>,
    pub tipo_renovacion: Option<TipoRenovacion>,
    pub internacional: bool,
    /// At most 500 characters
    pub objeto: String,
    /// Reserved, always empty
    pub observaciones: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    pub nombre: String,
    pub tipo: TipoInstitucion,
    pub pais: String,
    pub provincia: String,
    pub localidad: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    /// Not present in the documents; always empty
    pub dni: String,
    pub nombre: String,
    pub apellido: String,
    /// Not present in the documents; always empty
    pub email: String,
    pub cargo: Cargo,
}

impl Signer {
    pub fn new(nombre: &str, apellido: &str, cargo: Cargo) -> Self {
        Self {
            dni: String::new(),
            nombre: nombre.to_string(),
            apellido: apellido.to_string(),
            email: String::new(),
            cargo,
        }
    }

    /// "nombre apellido", the identity used for deduplication
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

/// Everything extracted from one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub resolution: ResolutionRecord,
    pub convenio: ConvenioRecord,
    pub institutions: Vec<Institution>,
    pub signers: Vec<Signer>,
}

/// Render an optional date as `YYYY-MM-DD`, or the empty string
pub fn iso_or_empty(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_defaults_for_locator() {
        let resolution = ResolutionRecord::for_locator("https://host/R-DR-2020-0123.pdf");
        assert_eq!(resolution.tipo, "DR");
        assert_eq!(resolution.link, "https://host/R-DR-2020-0123.pdf");
        assert!(resolution.dependencia_id.is_empty());
        assert!(resolution.fecha.is_none());
    }

    #[test]
    fn test_convenio_defaults() {
        let convenio = ConvenioRecord::default();
        assert_eq!(convenio.tipo_convenio, TipoConvenio::Marco);
        assert!(!convenio.internacional);
        assert!(convenio.tipo_renovacion.is_none());
        assert!(convenio.observaciones.is_empty());
    }

    #[test]
    fn test_iso_or_empty() {
        assert_eq!(iso_or_empty(NaiveDate::from_ymd_opt(2020, 3, 5)), "2020-03-05");
        assert_eq!(iso_or_empty(None), "");
    }

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let resolution = ResolutionRecord::for_locator("x.pdf");
        let json = serde_json::to_value(&resolution).unwrap();
        assert!(json.get("expedienteNumero").is_some());
        assert!(json.get("dependenciaId").is_some());
    }

    #[test]
    fn test_signer_full_name() {
        let signer = Signer::new("Victor", "Claros", Cargo::Rector);
        assert_eq!(signer.full_name(), "Victor Claros");
        assert!(signer.dni.is_empty() && signer.email.is_empty());
    }
}
