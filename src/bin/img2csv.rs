use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use img_to_csv::{ExtractOptions, ExtractionReport, TesseractEngine, extract_image_to_csv};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "img2csv",
    version,
    about = "OCR an image into a raw text file and a CSV table"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Recognize text in an image and write text + CSV outputs.
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Input image path.
    #[arg(short, long)]
    input: PathBuf,

    /// Raw text output path. Defaults to the input path with a .txt extension.
    #[arg(long)]
    output_text: Option<PathBuf>,

    /// CSV output path. Defaults to the input path with a .csv extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tesseract language.
    #[arg(long, default_value = "eng")]
    lang: String,

    /// Source image DPI hint passed to tesseract.
    #[arg(long)]
    dpi: Option<i32>,

    /// Tesseract page segmentation mode.
    #[arg(long)]
    psm: Option<i32>,

    /// Tesseract OCR engine mode.
    #[arg(long)]
    oem: Option<i32>,

    /// Output delimiter character.
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_options(args: &ExtractArgs) -> Result<ExtractOptions> {
    if !args.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }

    Ok(ExtractOptions {
        lang: args.lang.clone(),
        dpi: args.dpi,
        psm: args.psm,
        oem: args.oem,
        delimiter: args.delimiter as u8,
    })
}

fn log_report(report: &ExtractionReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!("  - {:?}: {}", warning.code, warning.message);
        }
    }
}

fn run_extract(args: &ExtractArgs) -> Result<Option<ExtractionReport>> {
    if !args.input.exists() {
        println!("image file {} not found", args.input.display());
        return Ok(None);
    }

    let options = parse_options(args)?;
    let output_text = args
        .output_text
        .clone()
        .unwrap_or_else(|| args.input.with_extension("txt"));
    let output_csv = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("csv"));

    let engine = TesseractEngine::new(&options);
    let report = extract_image_to_csv(&engine, &args.input, &output_text, &output_csv, &options)
        .with_context(|| format!("failed to extract text from '{}'", args.input.display()))?;

    println!("extracted text saved to {}", output_text.display());
    println!(
        "CSV with {} row(s) saved to {}",
        report.row_count,
        output_csv.display()
    );
    Ok(Some(report))
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("img_to_csv=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract(args) => match run_extract(&args) {
            Ok(Some(report)) => {
                log_report(&report, args.verbose);
                ExitCode::SUCCESS
            }
            Ok(None) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
