//! Whole-document extraction through the public engine API

use chrono::NaiveDate;
use convenio_engine::{ConvenioEngine, DiagnosticCode, Diagnostics, EngineConfig, EngineError};
use pretty_assertions::assert_eq;
use shared_types::{
    Cargo, ExtractedRecord, Institution, RawDocument, TipoConvenio, TipoInstitucion, TipoRenovacion,
};

const COOPERATION_AGREEMENT: &str = "\
RESOLUCIÓN R-DR-2020-0123
SALTA, 2 de junio de 2020

VISTO el Acuerdo de Cooperacion firmado el 15 de marzo de 2020 entre la Universidad Nacional de Salta y el Ministerio de Educacion, y

CONSIDERANDO:
Que el acuerdo tiene por objeto: desarrollar actividades conjuntas de capacitación docente. Que el mismo tendrá una vigencia de dos (2) años y será renovable de común acuerdo.

Firman el Rector Dr. Víctor Claros y la Lic. Graciela Abán.
";

fn extract(text: &str, locator: &str) -> (Result<ExtractedRecord, EngineError>, Diagnostics) {
    let engine = ConvenioEngine::default();
    let mut sink = Diagnostics::new();
    let result = engine.extract(&RawDocument::new(text, locator), &mut sink);
    (result, sink)
}

#[test]
fn test_cooperation_agreement_scenario() {
    let (result, _) = extract(
        COOPERATION_AGREEMENT,
        "https://bo.unsa.edu.ar/dr/R-DR-2020-0123.pdf",
    );
    let record = result.unwrap();

    assert_eq!(record.convenio.tipo_convenio, TipoConvenio::AcuerdoCooperacion);
    assert_eq!(record.convenio.tipo_convenio.as_str(), "Acuerdo Cooperacion");
    assert_eq!(record.convenio.fecha_firma, NaiveDate::from_ymd_opt(2020, 3, 15));
    assert_eq!(record.resolution.expediente_anio, "2020");
    assert_eq!(record.resolution.numero, "0123");
    assert_eq!(record.resolution.tipo, "DR");

    let universidad = Institution {
        nombre: "Universidad Nacional de Salta".to_string(),
        tipo: TipoInstitucion::Universitaria,
        pais: "Argentina".to_string(),
        provincia: "Salta".to_string(),
        localidad: "Salta".to_string(),
    };
    let ministerio = Institution {
        nombre: "Ministerio de Educacion".to_string(),
        tipo: TipoInstitucion::Gubernamental,
        ..universidad.clone()
    };
    assert!(record.institutions.contains(&universidad));
    assert!(record.institutions.contains(&ministerio));
}

#[test]
fn test_cooperation_agreement_secondary_fields() {
    let (result, _) = extract(COOPERATION_AGREEMENT, "R-DR-2020-0123.pdf");
    let record = result.unwrap();

    // the document date is the first spelled date in the text
    assert_eq!(record.resolution.fecha, NaiveDate::from_ymd_opt(2020, 6, 2));
    assert_eq!(record.convenio.duracion, "2");
    assert_eq!(
        record.convenio.tipo_renovacion,
        Some(TipoRenovacion::RenovableDeComunAcuerdo)
    );
    assert_eq!(
        record.convenio.objeto,
        "desarrollar actividades conjuntas de capacitación docente"
    );
    assert!(!record.convenio.internacional);
    assert!(record.convenio.observaciones.is_empty());
    assert!(record.resolution.dependencia_id.is_empty());

    let aban = record
        .signers
        .iter()
        .find(|signer| signer.apellido == "Abán")
        .unwrap();
    assert_eq!(aban.nombre, "Graciela");
    assert!(record.signers.iter().all(|signer| signer.dni.is_empty()));
    assert!(record.signers.iter().any(|signer| signer.cargo == Cargo::Rector));
}

#[test]
fn test_short_text_produces_no_record() {
    let (result, sink) = extract("Resolución sin contenido útil", "R-DR-2020-0001.pdf");
    assert_eq!(
        result.unwrap_err(),
        EngineError::InsufficientText {
            found: 29,
            required: 50
        }
    );
    assert!(sink.contains(DiagnosticCode::InsufficientText));
}

#[test]
fn test_missing_agreement_type_defaults_to_marco() {
    let text = "Por la presente se aprueba lo actuado en las actuaciones de referencia \
                y se dispone su comunicación a las áreas pertinentes.";
    let (result, sink) = extract(text, "R-DR-2021-0042.pdf");
    let record = result.unwrap();

    assert_eq!(record.convenio.tipo_convenio, TipoConvenio::Marco);
    assert_eq!(record.convenio.tipo_convenio.as_str(), "Marco");
    assert!(sink.contains(DiagnosticCode::FieldDefaulted));
    assert_eq!(record.convenio.fecha_firma, None);
    assert_eq!(record.convenio.tipo_renovacion, None);
    assert!(record.institutions.is_empty());
}

#[test]
fn test_configured_geography_reaches_every_institution() {
    let config = EngineConfig::from_str(
        "[geography]\nprovincia = \"Jujuy\"\nlocalidad = \"San Salvador de Jujuy\"",
    )
    .unwrap();
    let engine = ConvenioEngine::new(config);
    let document = RawDocument::new(COOPERATION_AGREEMENT, "R-DR-2020-0123.pdf");
    let record = engine.extract(&document, &mut Diagnostics::new()).unwrap();

    assert!(!record.institutions.is_empty());
    for institution in &record.institutions {
        assert_eq!(institution.pais, "Argentina");
        assert_eq!(institution.provincia, "Jujuy");
        assert_eq!(institution.localidad, "San Salvador de Jujuy");
    }
}

#[test]
fn test_record_serializes_with_camel_case_keys() {
    let (result, _) = extract(COOPERATION_AGREEMENT, "R-DR-2020-0123.pdf");
    let json = serde_json::to_value(result.unwrap()).unwrap();

    assert_eq!(json["resolution"]["expedienteAnio"], "2020");
    assert_eq!(json["convenio"]["tipoConvenio"], "Acuerdo Cooperacion");
    assert_eq!(json["convenio"]["fechaFirma"], "2020-03-15");
}
