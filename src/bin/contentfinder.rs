//! Command line front end: reads an HTML document from a file or stdin and
//! prints its main content.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rs_contentfinder::{extract_reader, ExtractResult, Options};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "contentfinder")]
#[command(about = "Extract the main content of an HTML document")]
#[command(version)]
struct Cli {
    /// HTML file to read (stdin when absent or "-")
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Keep elements whose class/id looks like boilerplate
    #[arg(long)]
    preserve_unlikely: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Cleaned markup of the content container
    #[default]
    Html,
    /// Visible text only
    Text,
    /// Full result as JSON
    Json,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    } else {
        EnvFilter::new(default_level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = Options {
        preserve_unlikely_candidates: cli.preserve_unlikely,
        ..Options::default()
    };

    let result = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            extract_reader(file, &options).with_context(|| format!("failed to read {}", path.display()))?
        }
        _ => extract_reader(io::stdin().lock(), &options).context("failed to read stdin")?,
    };

    let rendered = render(&result, cli.format)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("failed to write output")?;
    Ok(())
}

fn render(result: &ExtractResult, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Html => result.content_html.clone(),
        Format::Text => result.content_text.clone(),
        Format::Json => serde_json::to_string_pretty(result)?,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::error!(error = %err, "extraction failed");
        eprintln!("error: {err:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
