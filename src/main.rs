use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use lexis::printer;
use lexis::scanner;

#[derive(Parser, Debug)]
#[command(name = "lexis", about = "Dump the tokens of a source file")]
struct Cli {
    /// Source file to scan (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Token listing format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Log scanner activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow!("initialize logging: {e}"))
}

fn read_source(cli: &Cli) -> Result<(String, String)> {
    match &cli.file {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("read source file '{}'", path.display()))?;
            Ok((path.display().to_string(), source))
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("read source from stdin")?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let (name, source) = read_source(&cli)?;
    debug!(%name, bytes = source.len(), "scanning");

    let tokens = match scanner::scan_lines(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            let report = miette::Report::new(e.with_source_code(name, source));
            eprintln!("{report:?}");
            bail!("scan failed");
        }
    };

    match cli.format.as_str() {
        "json" => println!("{}", printer::to_json(&tokens)),
        _ => print!("{}", printer::to_text(&tokens)),
    }
    Ok(())
}
