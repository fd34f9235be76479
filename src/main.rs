mod collection;
mod domain;
mod error;
mod extract;
mod parser;
mod pipeline;
mod rank;
mod refine;
mod report;
mod settings;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{error, info};

use collection::Collection;
use extract::{PageSource, PdfPages};
use pipeline::Pipeline;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "persona_digest",
    about = "Rank the document sections most relevant to a persona and task"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every collection under a root directory
    Run {
        /// Directory holding the collection folders
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
        /// Process collections and documents in parallel
        #[arg(short, long)]
        parallel: bool,
    },
    /// Process a single collection directory
    Analyze {
        collection: PathBuf,
        /// Print the result instead of writing the output file
        #[arg(long)]
        stdout: bool,
    },
    /// Show the scored candidate pool of a collection
    Candidates {
        collection: PathBuf,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
    /// Print the domain a persona and task resolve to
    Classify {
        #[arg(long)]
        persona: String,
        #[arg(long)]
        task: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load().context("loading settings")?;
    info!(settings = ?settings, "Starting persona digest");

    match cli.command {
        Commands::Run { root, parallel } => {
            settings.parallel |= parallel;
            run_all(&root, &settings, &PdfPages).map(|_| ())
        }
        Commands::Analyze { collection, stdout } => {
            let c = open_collection(&collection, &settings)?;
            let result = c.analyze(&settings, &PdfPages)?;
            if stdout {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                c.write(&result)?;
                println!(
                    "Generated {} sections -> {}",
                    result.extracted_sections.len(),
                    c.output_path.display()
                );
            }
            Ok(())
        }
        Commands::Candidates { collection, limit } => {
            let c = open_collection(&collection, &settings)?;
            print_candidates(&c, &settings, limit)
        }
        Commands::Classify { persona, task } => {
            println!("{}", domain::classify(&persona, &task));
            Ok(())
        }
    }
}

fn open_collection(dir: &Path, settings: &Settings) -> anyhow::Result<Collection> {
    Collection::at(dir, settings).with_context(|| {
        format!(
            "{} needs {} and a {}/ directory",
            dir.display(),
            settings.input_file,
            settings.documents_dir
        )
    })
}

#[derive(Debug, PartialEq)]
struct RunCounts {
    processed: usize,
    failed: usize,
    sections: usize,
}

fn run_all(root: &Path, settings: &Settings, source: &dyn PageSource) -> anyhow::Result<RunCounts> {
    let t0 = Instant::now();
    let collections = collection::discover(root, settings)?;
    println!("Found {} collections", collections.len());

    let pb = collection_progress(collections.len())?;

    let process = |c: &Collection| {
        pb.set_message(c.name.clone());
        let outcome = c.analyze(settings, source).and_then(|r| {
            c.write(&r)?;
            Ok(r)
        });
        pb.inc(1);
        outcome
    };

    // One collection failing never stops the others.
    let outcomes: Vec<_> = if settings.parallel {
        collections.par_iter().map(process).collect()
    } else {
        collections.iter().map(process).collect()
    };
    pb.finish_and_clear();

    let mut counts = RunCounts {
        processed: 0,
        failed: 0,
        sections: 0,
    };
    for (c, outcome) in collections.iter().zip(outcomes) {
        match outcome {
            Ok(result) => {
                counts.processed += 1;
                counts.sections += result.extracted_sections.len();
                println!(
                    "{}: {} sections -> {}",
                    c.name,
                    result.extracted_sections.len(),
                    c.output_path.display()
                );
            }
            Err(e) => {
                counts.failed += 1;
                error!(collection = %c.name, "Failed: {:#}", anyhow::Error::from(e));
                println!("{}: FAILED", c.name);
            }
        }
    }

    println!(
        "\nProcessed {} collections ({} failed), {} sections total, in {}.",
        counts.processed,
        counts.failed,
        counts.sections,
        format_duration(t0.elapsed())
    );
    Ok(counts)
}

/// A bar only when there is more than one collection to track.
fn collection_progress(len: usize) -> anyhow::Result<ProgressBar> {
    let pb = if len > 1 {
        ProgressBar::new(len as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn print_candidates(c: &Collection, settings: &Settings, limit: usize) -> anyhow::Result<()> {
    let input = c.load_input()?;
    let documents = c.documents(&settings.document_extension)?;
    let domain = domain::classify(&input.persona.role, &input.job_to_be_done.task);
    let pool = Pipeline::new(&PdfPages)
        .parallel(settings.parallel)
        .ranked_pool(domain, &input.job_to_be_done.task, &documents);

    if pool.is_empty() {
        println!("No candidate sections found (domain: {}).", domain);
        return Ok(());
    }

    println!(
        "{:>3} | {:>6} | {:>4} | {:<28} | {:<50}",
        "#", "Score", "Page", "Document", "Title"
    );
    println!("{}", "-".repeat(103));
    for (i, s) in pool.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:>6.1} | {:>4} | {:<28} | {:<50}",
            i + 1,
            s.score,
            s.section.page_number,
            truncate(&s.section.document, 28),
            truncate(&s.section.title, 50)
        );
    }
    println!("\n{} candidates | domain: {}", pool.len(), domain);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
