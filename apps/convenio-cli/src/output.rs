//! Import file: one CSV row per extracted record.
//!
//! Composite columns pack their parts with `|`, and list columns separate
//! entries with `;`.

use anyhow::Context;
use convenio_engine::Geography;
use serde::Serialize;
use shared_types::{iso_or_empty, ExtractedRecord};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub const COLUMNS: [&str; 12] = [
    "resolucion",
    "tipo_convenio",
    "titulo",
    "duracion",
    "fecha_firma",
    "tipo_renovacion",
    "internacional",
    "objeto",
    "observaciones",
    "instituciones",
    "dependencias",
    "firmantes",
];

/// One line of the import file, in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvRow {
    pub resolucion: String,
    pub tipo_convenio: String,
    pub titulo: String,
    pub duracion: String,
    pub fecha_firma: String,
    pub tipo_renovacion: String,
    pub internacional: String,
    pub objeto: String,
    pub observaciones: String,
    pub instituciones: String,
    pub dependencias: String,
    pub firmantes: String,
}

impl CsvRow {
    /// Flatten a record. Signers carry `geography` since the text never states theirs.
    pub fn from_record(record: &ExtractedRecord, dependencias: &str, geography: &Geography) -> Self {
        let resolution = &record.resolution;
        let convenio = &record.convenio;

        let resolucion = [
            resolution.numero.as_str(),
            &iso_or_empty(resolution.fecha),
            resolution.tipo.as_str(),
            resolution.expediente_numero.as_str(),
            resolution.expediente_anio.as_str(),
            resolution.dependencia_id.as_str(),
            resolution.link.as_str(),
        ]
        .join("|");

        // nombre|tipo|cuit|web|pais|provincia|localidad
        let instituciones = record
            .institutions
            .iter()
            .map(|i| format!("{}|{}|||{}|{}|{}", i.nombre, i.tipo, i.pais, i.provincia, i.localidad))
            .collect::<Vec<_>>()
            .join(";");

        // dni|nombre|apellido|email|pais|provincia|localidad|||cargo|activo
        let firmantes = record
            .signers
            .iter()
            .map(|s| {
                format!(
                    "{}|{}|{}|{}|{}|{}|{}|||{}|true",
                    s.dni,
                    s.nombre,
                    s.apellido,
                    s.email,
                    geography.pais,
                    geography.provincia,
                    geography.localidad,
                    s.cargo
                )
            })
            .collect::<Vec<_>>()
            .join(";");

        Self {
            resolucion,
            tipo_convenio: convenio.tipo_convenio.to_string(),
            titulo: convenio.titulo.clone(),
            duracion: convenio.duracion.clone(),
            fecha_firma: iso_or_empty(convenio.fecha_firma),
            tipo_renovacion: convenio
                .tipo_renovacion
                .map(|tipo| tipo.to_string())
                .unwrap_or_default(),
            internacional: convenio.internacional.to_string(),
            objeto: convenio.objeto.clone(),
            observaciones: convenio.observaciones.clone(),
            instituciones,
            dependencias: dependencias.to_string(),
            firmantes,
        }
    }
}

/// CSV writer that emits the header before any row
pub struct ConvenioWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl ConvenioWriter<File> {
    /// Create the file, and its parent directory when missing
    pub fn create<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Self::new(file)
    }
}

impl<W: Write> ConvenioWriter<W> {
    pub fn new(writer: W) -> anyhow::Result<Self> {
        let mut inner = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        inner.write_record(COLUMNS)?;
        Ok(Self { inner })
    }

    pub fn write_row(&mut self, row: &CsvRow) -> anyhow::Result<()> {
        self.inner.serialize(row)?;
        Ok(())
    }

    pub fn into_inner(self) -> anyhow::Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
    }
}
