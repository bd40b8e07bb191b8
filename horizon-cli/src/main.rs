//! Horizon local invocation: runs one request through the adapter against the
//! reference forecaster, playing the part of the hosting runtime.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use horizon_handler::Handler;
use horizon_model_naive::NaiveForecaster;

#[derive(Parser, Debug)]
#[command(name = "horizon-invoke", about = "Run a forecast request through the Horizon adapter")]
struct Cli {
    /// Request payload file (JSON with an `inputs` field), or `-` for stdin
    #[arg(long)]
    payload: PathBuf,

    /// Declared request content type
    #[arg(long, default_value = "application/json")]
    content_type: String,

    /// Declared response content type
    #[arg(long, default_value = "application/json")]
    accept: String,

    /// Seed for the reference forecaster's sampler
    #[arg(long)]
    seed: Option<u64>,

    /// Write the prediction here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print the prediction
    #[arg(long)]
    pretty: bool,
}

/// Where log lines go. Stdout, unless stdout carries the prediction body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogStream {
    Stdout,
    Stderr,
}

impl LogStream {
    fn for_cli(cli: &Cli) -> Self {
        if cli.output.is_some() {
            LogStream::Stdout
        } else {
            LogStream::Stderr
        }
    }

    fn init(self) {
        let (writer, ansi) = match self {
            LogStream::Stdout => (BoxMakeWriter::new(io::stdout), io::stdout().is_terminal()),
            LogStream::Stderr => (BoxMakeWriter::new(io::stderr), io::stderr().is_terminal()),
        };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(writer)
            .with_ansi(ansi)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    LogStream::for_cli(&cli).init();

    let payload = read_payload(&cli.payload)?;
    let body = forecast_body(&payload, &cli)?;

    match &cli.output {
        Some(path) => fs::write(path, &body)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&body)?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Run the adapter against the reference forecaster and serialize the
/// prediction, as the hosting runtime would.
fn forecast_body(payload: &[u8], cli: &Cli) -> anyhow::Result<Vec<u8>> {
    let model = NaiveForecaster::new(cli.seed);
    let handler = Handler::from_default();

    let prediction = handler.invoke(payload, &cli.content_type, &model, &cli.accept)?;
    info!(shape = ?prediction.shape(), "forecast ready");

    let body = if cli.pretty {
        serde_json::to_vec_pretty(&prediction)?
    } else {
        serde_json::to_vec(&prediction)?
    };
    Ok(body)
}

fn read_payload(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read payload from stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
