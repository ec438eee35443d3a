mod analyzer;
mod batch;
mod parser;
mod record;
mod recognizer;
mod text;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use recognizer::HeuristicRecognizer;

#[derive(Parser)]
#[command(name = "resume_miner", about = "Batch resume field extraction and analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse all resumes in a directory into a rectangular CSV
    Parse {
        /// Directory holding .pdf / .docx resumes
        dir: PathBuf,
        /// Output CSV path
        #[arg(short, long, default_value = "parsed_resumes.csv")]
        output: PathBuf,
    },
    /// Analyze a CSV previously written by `parse`
    Analyze {
        csv: PathBuf,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Parse + analyze in one pipeline
    Run {
        /// Directory holding .pdf / .docx resumes
        dir: PathBuf,
        /// Output CSV path
        #[arg(short, long, default_value = "parsed_resumes.csv")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { dir, output } => {
            let (table, stats) = batch::parse_directory(&dir, &HeuristicRecognizer)?;
            // An empty batch still writes the base-field header
            table.write_csv_file(&output)?;
            print_batch_summary(&stats, &output);
            Ok(())
        }
        Commands::Analyze { csv, json } => {
            let table = record::ResumeTable::read_csv_file(&csv)?;
            let report = analyzer::analyze(&table);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            Ok(())
        }
        Commands::Run { dir, output } => {
            let (table, stats) = batch::parse_directory(&dir, &HeuristicRecognizer)?;
            table.write_csv_file(&output)?;
            print_batch_summary(&stats, &output);
            println!();
            println!("{}", analyzer::analyze(&table));
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn print_batch_summary(stats: &batch::BatchStats, output: &std::path::Path) {
    println!(
        "Parsed {} of {} documents ({} skipped), wrote {}",
        stats.parsed,
        stats.total,
        stats.skipped,
        output.display()
    );
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
