use anyhow::Context;
use clap::{Parser, Subcommand};
use name_score::{
    pipeline, providers::parse_name_records, RunOptions, ScoreEngine, Settings,
    TracingObserver,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "name-score")]
#[command(about = "Score a list of names and submit the total", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every scored name
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch names, score them, and submit the total
    Run {
        /// YAML settings file (defaults to NAME_SCORE_* environment variables)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Subject name reported with the result
        #[arg(short, long)]
        subject: Option<String>,

        /// Submit as a test run
        #[arg(long)]
        test: bool,

        /// Compute the score but do not submit it
        #[arg(long)]
        dry_run: bool,
    },

    /// Score names locally without any network access
    Score {
        /// JSON file of records with a NAME field
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the per-name breakdown
        #[arg(short, long)]
        breakdown: bool,

        /// Names to score
        names: Vec<String>,
    },
}

/// `RUST_LOG` (or `name_score=info`) as the base filter; `-v` adds
/// `name_score=debug` on top of whatever the base says
fn build_filter(env_filter: Option<&str>, verbose: bool) -> anyhow::Result<EnvFilter> {
    let filter = match env_filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid RUST_LOG: {}", directives))?,
        None => EnvFilter::new("name_score=info"),
    };

    if verbose {
        Ok(filter.add_directive("name_score=debug".parse::<Directive>()?))
    } else {
        Ok(filter)
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(env_filter.as_deref(), verbose)?)
        .with_target(false)
        .init();

    Ok(())
}

fn load_settings(config: Option<PathBuf>) -> name_score::Result<Settings> {
    match config {
        Some(path) => Settings::from_yaml_file(path),
        None => Settings::from_env(),
    }
}

async fn run(
    config: Option<PathBuf>,
    subject: Option<String>,
    test: bool,
    dry_run: bool,
) -> name_score::Result<()> {
    let mut settings = load_settings(config)?;
    if let Some(subject) = subject {
        settings = settings.with_subject(subject);
    }
    if test {
        settings = settings.with_test(true);
    }

    let engine = ScoreEngine::from_settings(&settings)?.with_observer(Arc::new(TracingObserver));
    let outcome = engine.run(RunOptions { submit: !dry_run }).await?;

    println!("Total Score: {}", outcome.total);
    println!("   Names: {}", outcome.name_count);
    println!("   Latency: {:.2}ms", outcome.latency_ms);

    if let Some(receipt) = outcome.receipt {
        println!("Response Code: {}", receipt.status);
        println!("Response Body: {}", receipt.body);
    }

    Ok(())
}

fn score(file: Option<PathBuf>, breakdown: bool, mut names: Vec<String>) -> anyhow::Result<()> {
    if let Some(path) = file {
        let body = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut records = parse_name_records(&body)?;
        records.append(&mut names);
        names = records;
    }

    let report = pipeline::compute(&names);

    if breakdown {
        for entry in &report.breakdown {
            println!(
                "{:>6}. {:<20} value {:>4}  score {:>8}",
                entry.position, entry.name, entry.letter_sum, entry.score
            );
        }
    }

    println!("Total Score: {}", report.total);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Run { config, subject, test, dry_run } => {
            run(config, subject, test, dry_run).await.map_err(|e| {
                let phase = e.phase();
                anyhow::Error::new(e).context(format!("{} phase failed", phase))
            })?;
        }

        Commands::Score { file, breakdown, names } => {
            score(file, breakdown, names)?;
        }
    }

    Ok(())
}
