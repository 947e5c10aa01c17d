//! Convenio extraction CLI
//!
//! Turns a batch of resolution files into the agreement import CSV.

use anyhow::bail;
use clap::Parser;
use convenio_cli::{batch, Batch, CliConfig, ConvenioWriter};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "convenio-cli")]
#[command(version, about = "Extract agreement records from resolution documents")]
struct Args {
    /// Documents to process (PDF, HTML or plain text)
    files: Vec<PathBuf>,

    /// File listing one document path per line
    #[arg(short, long)]
    list: Option<PathBuf>,

    /// Output CSV file
    #[arg(short, long, default_value = "convenios_output/convenios.csv")]
    output: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Published URL prefix; the link becomes prefix + file name
    #[arg(long)]
    link_prefix: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout stays free for other tools, logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting convenio-cli v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    let mut inputs = args.files.clone();
    if let Some(list) = &args.list {
        inputs.extend(batch::read_list(list)?);
    }
    if inputs.is_empty() {
        bail!("No input documents: pass files or --list");
    }

    let mut writer = ConvenioWriter::create(&args.output)?;
    let summary = Batch::new(&config, args.link_prefix.as_deref()).run(&inputs, &mut writer)?;
    writer.into_inner()?;

    tracing::info!(
        "Completed: {} processed, {} errors. CSV written to {}",
        summary.processed,
        summary.errors,
        args.output.display()
    );
    Ok(())
}
