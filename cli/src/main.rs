//! unoutline CLI - document title and heading outline extraction

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unoutline::batch::{Outcome, DEFAULT_WORKERS};
use unoutline::{
    BatchOptions, BatchProcessor, DocumentProcessor, InferOptions, JsonDirSink, JsonFormat,
    NoisePolicy, TextDirSource,
};

#[derive(Parser)]
#[command(name = "unoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract document titles and heading outlines from page text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of one page-text dump (pages split by form feeds)
    Outline {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Running header/footer policy
        #[arg(long, value_enum, default_value = "permissive")]
        noise: NoiseLevel,
    },

    /// Extract outlines for every .txt dump in a directory
    Batch {
        /// Input directory
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Output directory for <name>.json files
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Number of worker threads
        #[arg(short, long, env = "UNOUTLINE_WORKERS", default_value_t = DEFAULT_WORKERS)]
        workers: usize,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Running header/footer policy
        #[arg(long, value_enum, default_value = "permissive")]
        noise: NoiseLevel,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum NoiseLevel {
    /// Keep recurring lines (default)
    Permissive,
    /// Drop lines recurring on most pages
    Majority,
}

impl From<NoiseLevel> for NoisePolicy {
    fn from(level: NoiseLevel) -> Self {
        match level {
            NoiseLevel::Permissive => NoisePolicy::Permissive,
            NoiseLevel::Majority => NoisePolicy::Majority,
        }
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline {
            input,
            output,
            compact,
            noise,
        } => cmd_outline(&input, output.as_deref(), compact, noise),
        Commands::Batch {
            input,
            output,
            workers,
            compact,
            noise,
        } => cmd_batch(&input, &output, workers, compact, noise),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn processor(noise: NoiseLevel) -> unoutline::Result<DocumentProcessor> {
    DocumentProcessor::with_options(InferOptions::new().with_noise_policy(noise.into()))
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    noise: NoiseLevel,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let result = processor(noise)?.process_text(&String::from_utf8_lossy(&bytes))?;
    log::debug!(
        "{}: title {:?}, {} headings",
        input.display(),
        result.title,
        result.heading_count()
    );
    let json = unoutline::render::to_json(&result, json_format(compact))?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    workers: usize,
    compact: bool,
    noise: NoiseLevel,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = json_format(compact);
    let source = TextDirSource::open(input)?;
    let sink = JsonDirSink::create(output)?.with_format(format);
    let documents = source.list_documents()?;
    log::debug!("found {} documents in {}", documents.len(), input.display());

    if documents.is_empty() {
        println!("{} {}", "No .txt files in".yellow(), input.display());
        return Ok(());
    }

    let options = BatchOptions::new().with_workers(workers);
    let batch = BatchProcessor::new(processor(noise)?, options)?;

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = batch.run_with_progress(&documents, &source, &sink, |outcome| {
        match outcome {
            Outcome::Done { id, result } => pb.println(format!(
                "{} {} -> {}.json ({} headings)",
                "Processed".green(),
                id,
                id,
                result.heading_count()
            )),
            Outcome::Failed { id, error } => {
                pb.println(format!("{} {}: {}", "Failed".red(), id, error))
            }
        }
        pb.inc(1);
    })?;

    pb.finish_and_clear();

    println!(
        "\n{} {} processed, {} failed in {} ms",
        "Done!".green().bold(),
        report.processed.len(),
        report.failures.len(),
        report.elapsed().num_milliseconds()
    );

    if !report.is_success() {
        for failure in &report.failures {
            eprintln!("  {} {}", "└─".dimmed(), failure);
        }
        return Err(format!("{} documents failed", report.failures.len()).into());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document title and outline extraction tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/unoutline".dimmed()
    );
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_outline_writes_json_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("report.txt");
        let output = dir.path().join("report.json");
        fs::write(&input, "ANNUAL REPORT\n1. Introduction\n\x0CREFERENCES\n").unwrap();

        cmd_outline(&input, Some(&output), false, NoiseLevel::Permissive).unwrap();

        let result = unoutline::render::from_json(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(result.title, "ANNUAL REPORT");
        assert_eq!(result.outline.last().map(|h| h.page), Some(2));
    }

    #[test]
    fn test_outline_rejects_empty_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        fs::write(&input, "").unwrap();

        assert!(cmd_outline(&input, None, true, NoiseLevel::Majority).is_err());
    }

    #[test]
    fn test_batch_reports_failures() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        fs::write(input.path().join("good.txt"), "GOOD TITLE\n").unwrap();
        fs::write(input.path().join("bad.txt"), "").unwrap();

        let result = cmd_batch(input.path(), output.path(), 2, true, NoiseLevel::Permissive);
        assert!(result.is_err());
        assert!(output.path().join("good.json").exists());
    }
}
