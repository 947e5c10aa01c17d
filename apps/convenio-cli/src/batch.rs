//! Sequential processing of a list of documents.
//!
//! A document that cannot be read or is too short is logged and counted; the
//! batch always runs to the end.

use crate::config::CliConfig;
use crate::output::{ConvenioWriter, CsvRow};
use anyhow::Context;
use convenio_engine::{ConvenioEngine, TracingSink};
use document_text::TextExtractor;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Documents between two progress lines
const PROGRESS_EVERY: usize = 10;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub errors: usize,
}

/// Read a list file: one path per line, blank lines ignored
pub fn read_list(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read list file: {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Locator recorded as the resolution link
pub fn locator_for(path: &Path, link_prefix: Option<&str>) -> String {
    match (link_prefix, path.file_name()) {
        (Some(prefix), Some(name)) => format!("{}{}", prefix, name.to_string_lossy()),
        _ => path.display().to_string(),
    }
}

pub struct Batch<'a> {
    engine: ConvenioEngine,
    config: &'a CliConfig,
    link_prefix: Option<&'a str>,
}

impl<'a> Batch<'a> {
    pub fn new(config: &'a CliConfig, link_prefix: Option<&'a str>) -> Self {
        Self {
            engine: ConvenioEngine::new(config.engine.clone()),
            config,
            link_prefix,
        }
    }

    /// Extract one document into a row
    pub fn process(&self, path: &Path) -> anyhow::Result<CsvRow> {
        let locator = locator_for(path, self.link_prefix);
        let document = TextExtractor::from_path(path)
            .with_context(|| format!("Failed to extract text from {}", path.display()))?
            .into_raw_document(locator.as_str());

        let mut sink = TracingSink::new(&locator);
        let record = self.engine.extract(&document, &mut sink)?;
        if sink.warnings() > 0 {
            tracing::info!(document = %locator, warnings = sink.warnings(), "Extracted with warnings");
        }

        Ok(CsvRow::from_record(
            &record,
            &self.config.output.dependencias,
            &self.config.engine.geography,
        ))
    }

    /// Process every input in order, writing one row per successful document
    pub fn run<W: Write>(
        &self,
        inputs: &[PathBuf],
        writer: &mut ConvenioWriter<W>,
    ) -> anyhow::Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        tracing::info!("Processing {} documents", inputs.len());

        for (index, path) in inputs.iter().enumerate() {
            let position = index + 1;
            tracing::info!("Processing {}/{}: {}", position, inputs.len(), path.display());

            match self.process(path) {
                Ok(row) => {
                    writer.write_row(&row)?;
                    summary.processed += 1;
                }
                Err(e) => {
                    summary.errors += 1;
                    tracing::error!(path = %path.display(), "Failed to process document: {:#}", e);
                }
            }

            if position % PROGRESS_EVERY == 0 {
                tracing::info!(
                    processed = summary.processed,
                    errors = summary.errors,
                    "Progress: {}/{}",
                    position,
                    inputs.len()
                );
            }
        }

        tracing::info!(
            processed = summary.processed,
            errors = summary.errors,
            "Batch complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_with_prefix_uses_file_name() {
        let path = Path::new("/data/pdfs/R-DR-2020-0123.pdf");
        assert_eq!(
            locator_for(path, Some("https://bo.unsa.edu.ar/dr/")),
            "https://bo.unsa.edu.ar/dr/R-DR-2020-0123.pdf"
        );
        assert_eq!(locator_for(path, None), "/data/pdfs/R-DR-2020-0123.pdf");
    }

    #[test]
    fn test_read_list_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("lista.txt");
        std::fs::write(&list, "a.pdf\n\n  b.html  \n\t\nc.txt\n").unwrap();

        let paths = read_list(&list).unwrap();
        assert_eq!(
            paths,
            vec![PathBuf::from("a.pdf"), PathBuf::from("b.html"), PathBuf::from("c.txt")]
        );
    }

    #[test]
    fn test_read_list_missing_file() {
        assert!(read_list(Path::new("/nonexistent/lista.txt")).is_err());
    }
}
