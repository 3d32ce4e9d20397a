use clap::Parser;
use colored::Colorize;
use miette::Result;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn};

mod analysis;
mod ast;
mod discovery;
mod parser;
mod report;
mod walk;

use discovery::AstFileFinder;
use report::{FileReport, Reporter};

/// StyleSweep - Fast unused-style detection for React Native
///
/// Analyzes ESTree JSON documents (`.ast.json`, as produced by Babel or
/// Espree) and reports StyleSheet styles that are defined but never used.
#[derive(Parser, Debug)]
#[command(name = "stylesweep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a project directory or a single .ast.json document
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Analyze files in parallel
    #[arg(long)]
    parallel: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for report::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => report::ReportFormat::Terminal,
            OutputFormat::Json => report::ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("StyleSweep v{}", env!("CARGO_PKG_VERSION"));

    run_analysis(&cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run_analysis(cli: &Cli) -> Result<()> {
    use std::time::Instant;

    let start_time = Instant::now();

    // Step 1: Discover AST documents
    info!("Discovering AST documents...");
    let finder = AstFileFinder::new();
    let files = finder.find_files(&cli.path);

    info!("Found {} documents to analyze", files.len());

    if files.is_empty() {
        println!("{}", "No .ast.json documents found.".yellow());
        return Ok(());
    }

    // Step 2: Parse and analyze, each file fully independent
    let reports: Vec<FileReport> = if cli.parallel {
        files.par_iter().filter_map(analyze_file).collect()
    } else {
        files.iter().filter_map(analyze_file).collect()
    };

    // Step 3: Report results
    let reporter = Reporter::new(cli.format.clone().into(), cli.output.clone());
    reporter.report(&reports)?;

    let elapsed = start_time.elapsed();
    info!(
        "Analyzed {} files in {:.2}s",
        reports.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

/// Analyze one document with a fresh analyzer; unreadable documents are
/// skipped with a warning rather than aborting the batch
fn analyze_file(path: &PathBuf) -> Option<FileReport> {
    match parser::parse_file(path) {
        Ok(program) => {
            let findings = analysis::analyze(&program);
            Some(FileReport::new(path.clone(), findings))
        }
        Err(err) => {
            warn!("Skipping {}: {}", path.display(), err);
            None
        }
    }
}
