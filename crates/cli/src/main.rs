use anyhow::{bail, Context as AnyhowContext, Result};
use clap::Parser;
use repobrief_classifier::classify;
use repobrief_context::assemble;
use repobrief_engine::{local, render, BriefingConfig, BriefingSource, RemoteBriefingClient};
use repobrief_scanner::ProjectScanner;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "repobrief")]
#[command(about = "Orient yourself inside any codebase", long_about = None)]
#[command(version)]
struct Cli {
    /// Project directory to analyze
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Save the briefing to a file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the briefing as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    if !cli.directory.is_dir() {
        bail!("Directory not found: {}", cli.directory.display());
    }

    // The only place the process environment is consulted; everything
    // below receives the credential as an explicit argument.
    let config = BriefingConfig {
        api_key: std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.is_empty()),
        model: std::env::var("REPOBRIEF_MODEL").ok(),
    };

    let report = run(&cli.directory, &config, cli.json).await?;
    println!("{report}");

    if let Some(path) = &cli.output {
        fs::write(path, &report)
            .with_context(|| format!("failed to save briefing to {}", path.display()))?;
        log::info!("Saved briefing to {}", path.display());
    }

    Ok(())
}

/// Scan → classify → assemble → infer (local or remote) → render.
async fn run(root: &Path, config: &BriefingConfig, json: bool) -> Result<String> {
    let records = ProjectScanner::new(root).scan()?;
    let classification = classify(&records);
    log::info!(
        "Detected {} ({})",
        classification.type_label,
        classification.language_label
    );

    let context = assemble(root, &records, &classification);

    let (briefing, source) = match config.api_key.as_deref() {
        Some(key) => {
            let client = RemoteBriefingClient::new(key, config.model());
            match client.generate(&context).await {
                Ok(briefing) => (briefing, BriefingSource::Remote),
                Err(e) => {
                    log::warn!("Remote briefing failed, using local engine: {e:#}");
                    (local::infer(&context), BriefingSource::Local)
                }
            }
        }
        None => (local::infer(&context), BriefingSource::Local),
    };

    if json {
        serde_json::to_string_pretty(&briefing).context("failed to serialize briefing")
    } else {
        Ok(render(&briefing, &context, source))
    }
}
