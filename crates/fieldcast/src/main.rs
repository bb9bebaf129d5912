//! fieldcast - sample derived fields from a snapshot onto a uniform grid.
//!
//! Rows go to stderr unless `--output` names a file. While stderr carries
//! rows, log events below `ERROR` go to stdout so the row stream stays
//! clean; with `--output` every event goes to stderr. `RUST_LOG` sets the
//! filter (default `warn`).

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use fieldcast_extract::{ExtractError, Extraction, ExtractionConfig, RunSummary, USAGE};
use fieldcast_kernels::Geometry;
use fieldcast_mesh::{EdgeBehavior, SnapshotReader};
use tempfile::NamedTempFile;
use tracing::{error, info, Level};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fieldcast", version)]
#[command(about = "Sample strain rate and velocity magnitude from a snapshot onto a uniform grid")]
#[command(override_usage = "fieldcast [OPTIONS] <filename> <xmin> <ymin> <xmax> <ymax> <ny>")]
struct Cli {
    /// Strain-rate geometry: axisymmetric (axi) or planar (2d)
    #[arg(long, env = "FIELDCAST_GEOMETRY", default_value_t = Geometry::Axisymmetric)]
    geometry: Geometry,

    /// Stencil behavior past the mesh edge: clamp or wrap
    #[arg(long, env = "FIELDCAST_EDGE", default_value_t = EdgeBehavior::Clamp)]
    edge: EdgeBehavior,

    /// Write rows to this file instead of stderr
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// <filename> <xmin> <ymin> <xmax> <ymax> <ny>
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

impl Cli {
    fn rows_on_stderr(&self) -> bool {
        self.output.is_none()
    }
}

fn init_tracing(rows_on_stderr: bool) {
    let (writer, ansi) = if rows_on_stderr {
        (
            BoxMakeWriter::new(io::stderr.with_max_level(Level::ERROR).or_else(io::stdout)),
            io::stdout().is_terminal(),
        )
    } else {
        (BoxMakeWriter::new(io::stderr), io::stderr().is_terminal())
    };

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version print to stdout and succeed
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.rows_on_stderr());

    match run(&cli) {
        Ok(summary) => {
            info!(
                nx = summary.nx,
                ny = summary.ny,
                rows = summary.rows,
                outside = summary.outside,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            if e.is_usage() {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<RunSummary, ExtractError> {
    let config = ExtractionConfig::from_args(&cli.args)?;
    let extraction = Extraction::new(config, cli.geometry);
    extraction.plan()?;
    let reader = SnapshotReader::new(cli.edge);

    match &cli.output {
        Some(path) => {
            // an existing file is only replaced by a complete run
            let mut staged = NamedTempFile::new_in(staging_dir(path))?;
            let summary = extraction.run(&reader, &mut staged)?;
            staged.persist(path).map_err(|e| e.error)?;
            Ok(summary)
        }
        None => extraction.run(&reader, io::stderr().lock()),
    }
}

fn staging_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
