//! Batch driver for the convenio extraction engine.
//!
//! Reads stored resolutions, extracts one record from each and writes the
//! records as an import CSV.

pub mod batch;
pub mod config;
pub mod output;

pub use batch::{Batch, BatchSummary};
pub use config::CliConfig;
pub use output::{ConvenioWriter, CsvRow};
