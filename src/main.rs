use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use exam_schedule::parser::walker;
use exam_schedule::{extract_schedule, render, source, SectionCode, Settings};

#[derive(Parser)]
#[command(name = "exam_schedule", about = "Exam seat-plan lookup over extracted page text")]
struct Cli {
    /// Config file (TOML, JSON or YAML); EXAM_* environment variables override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the exam schedule of one section across all documents
    Lookup {
        /// Section code, e.g. 66_A
        section: String,
        /// Directory of extracted documents (.txt split on form feeds, or .json)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the date, exam type and slot detected in one document
    Inspect {
        file: PathBuf,
        /// Also look up the course for this section's prefix
        #[arg(short, long)]
        section: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Lookup { section, dir, json } => {
            let code: SectionCode = section.parse()?;
            let dir = dir.unwrap_or_else(|| settings.pages_dir.clone());
            let documents = source::load_dir(&dir)?;
            if documents.is_empty() {
                println!("No documents found in {}.", dir.display());
                return Ok(());
            }
            let records = extract_schedule(&documents, code.as_str(), &settings.parse)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("{}", render::render_records(code.as_str(), &records));
            }
            Ok(())
        }
        Commands::Inspect { file, section } => {
            let code = section.map(|s| s.parse::<SectionCode>()).transpose()?;
            let document = source::load_file(&file)?;
            let prefix = code.as_ref().map(SectionCode::prefix);
            let (meta, course) = walker::scan_metadata(&document, prefix, &settings.parse);
            let shown = code.as_ref().map(|_| &course);
            println!("{}", render::render_metadata(&document.name, &meta, shown));
            println!("  Pages:     {}", document.pages.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
