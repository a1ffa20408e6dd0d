//! pedigree-loader - validate a pedigree file and print the verified people
//!
//! Usage: `pedigree-loader people.tsv -o errors.txt`

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use pedigree_loader::error::util::open_append_file;
use pedigree_loader::{LoaderConfig, OutputFormat, ValidationPipeline, load_file, report};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Load related people from a tab-delimited file
#[derive(Debug, Parser)]
#[command(name = "pedigree-loader", version, about)]
struct Cli {
    /// Input file: id, name, father id, mother id, gender per line
    infile: PathBuf,

    /// Append error reports to this file instead of printing them
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Rendering of the verified people
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Reject mothers that are not female and fathers that are not male
    #[arg(long)]
    check_parent_gender: bool,
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = LoaderConfig::default()
        .with_output_format(cli.format.into())
        .with_parent_gender_check(cli.check_parent_gender);
    log::debug!("{config}");

    let pipeline = ValidationPipeline::new(config);
    let outcome = load_file(&cli.infile, &pipeline)
        .with_context(|| format!("Failed to load {}", cli.infile.display()))?;

    if let Some(path) = &cli.outfile {
        let mut sink = open_append_file(path, "writing error report")?;
        report::write_errors(&mut sink, &outcome.errors)
            .with_context(|| format!("Failed to write errors to {}", path.display()))?;
    } else {
        report::write_errors(&mut io::stdout().lock(), &outcome.errors)?;
    }

    report::log_verified(&outcome.registry);
    report::write_registry(
        &mut io::stdout().lock(),
        &outcome.registry,
        pipeline.config().output_format,
    )?;

    info!("{}", outcome.statistics);
    Ok(())
}
