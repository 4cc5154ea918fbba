//! Command-line interface for ristei.
//!
//! Usage:
//!   ristei `<source>...` [--indent `<n>`] [--pad-months] [--parallel] [--type `<CODE=KIND>`]
//!
//! The TEI document goes to standard output; warnings about skipped files,
//! records and fields go to standard error. Set `RUST_LOG` to change verbosity.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ristei::config::DEFAULT_INDENT;
use ristei::{Catalog, DateAttrStyle, RecordKind, TeiConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert RIS files to a TEI listBibl", long_about = None)]
struct Cli {
    /// Path to source RIS file
    #[arg(value_name = "SOURCE", required = true)]
    sources: Vec<PathBuf>,

    /// Spaces per indentation level (0 writes a single line)
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Zero-pad months in date `when` attributes (1998-05 instead of 1998-5)
    #[arg(long)]
    pad_months: bool,

    /// Render records in parallel
    #[arg(long)]
    parallel: bool,

    /// Map an extra RIS type code onto a record kind, e.g. CHAP=book
    #[arg(long = "type", value_name = "CODE=KIND", value_parser = parse_type_mapping)]
    types: Vec<(String, RecordKind)>,
}

impl Cli {
    fn config(&self) -> TeiConfig {
        let mut config = TeiConfig::new();
        config
            .set_indent(self.indent)
            .set_run_in_parallel(self.parallel);
        if self.pad_months {
            config.set_date_style(DateAttrStyle::ZeroPadded);
        }
        for (code, kind) in &self.types {
            config.set_type_mapping(code, *kind);
        }
        config
    }
}

fn parse_type_mapping(value: &str) -> Result<(String, RecordKind), String> {
    let (code, kind) = value
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=KIND, found \"{}\"", value))?;
    let code = code.trim();
    if code.is_empty() {
        return Err("RIS type code must not be empty".to_string());
    }
    Ok((code.to_string(), kind.parse()?))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut catalog = Catalog::with_config(cli.config());
    catalog.parse(&cli.sources);
    tracing::info!(records = catalog.len(), "Writing TEI document");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    catalog
        .write_to(&mut out)
        .context("Unable to write TEI document")?;
    out.flush().context("Unable to flush standard output")?;

    Ok(())
}
