//! HnTrends - Hacker News trend analyzer
//!
//! A CLI tool that fetches the current top stories, analyzes title
//! word frequency and sentiment, renders two PNG charts, and exports
//! the enriched story list as JSON.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (network, config, output failure, etc.)

mod analysis;
mod cli;
mod config;
mod fetch;
mod models;
mod report;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use fetch::HnClient;
use models::RunSummary;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("HnTrends v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the analysis pipeline
    match run_analysis(args).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .hntrends.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".hntrends.toml");

    if path.exists() {
        eprintln!("⚠️  .hntrends.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .hntrends.toml")?;

    println!("✅ Created .hntrends.toml with default settings.");
    println!("   Edit it to customize the fetch limit, stop words, chart sizes, and more.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete fetch-analyze-report pipeline. Returns exit code 0.
async fn run_analysis(args: Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let out_root = PathBuf::from(&config.output.dir);

    println!("🚀 Starting Hacker News top stories analysis\n");

    // Step 1: Fetch the ranked id list (fatal on failure)
    println!("📡 Fetching top story ids from {}", config.fetch.api_base);
    let client = HnClient::new(
        config.fetch.api_base.clone(),
        Duration::from_millis(config.fetch.delay_ms),
        config.fetch.timeout_seconds,
    );

    let ids = client
        .fetch_top_ids(config.fetch.limit)
        .await
        .context("Failed to fetch the top story list")?;
    info!("Got {} story ids", ids.len());

    // Handle --dry-run: list ids and exit
    if args.dry_run {
        return handle_dry_run(&ids);
    }

    // Step 2: Fetch per-story details, sequentially
    println!("🔍 Fetching details for {} stories...\n", ids.len());
    let mut outcome = client.fetch_stories(&ids, !args.quiet).await;

    if outcome.stories.is_empty() {
        anyhow::bail!(
            "No stories with titles were fetched ({} skipped, {} failed)",
            outcome.skipped_untitled,
            outcome.failed
        );
    }
    if outcome.failed > 0 {
        warn!("{} story fetches failed and were dropped", outcome.failed);
    }

    // Step 3: Analysis
    analysis::attach_sentiment(&mut outcome.stories);

    let average_sentiment = analysis::average_sentiment(&outcome.stories);
    let tone = models::Tone::from_score(average_sentiment);

    let titles: Vec<String> = outcome.stories.iter().map(|s| s.title.clone()).collect();
    let stop_words = analysis::default_stop_words(&config.analysis.extra_stop_words);

    println!("📊 Analyzing common words...");
    let words = analysis::word_frequency(
        &titles,
        &stop_words,
        config.analysis.min_word_len,
        config.analysis.top_words,
    );

    println!("📈 Analyzing score distribution...");
    let bins = analysis::score_histogram(&outcome.stories, config.charts.bins);
    let top = analysis::top_story(&outcome.stories);

    // Step 4: Render charts and export JSON
    let chart_size = (config.charts.width, config.charts.height);

    let words_path = out_root.join(report::WORDS_CHART_FILE);
    report::render_word_chart(&words, &words_path, chart_size)?;
    println!("💾 Saved plot: {}", words_path.display());

    let scores_path = out_root.join(report::SCORES_CHART_FILE);
    report::render_score_histogram(&bins, &scores_path, chart_size)?;
    println!("💾 Saved plot: {}", scores_path.display());

    let json_path = out_root.join(report::STORIES_JSON_FILE);
    report::write_stories_json(&outcome.stories, &json_path)?;
    println!("💾 Raw data saved to: {}\n", json_path.display());

    // Step 5: Print the summary
    let summary = RunSummary {
        fetched: outcome.stories.len(),
        skipped_untitled: outcome.skipped_untitled,
        failed: outcome.failed,
        average_sentiment,
        tone,
    };
    print!("{}", report::summary_text(&summary, top));

    println!("\n🎉 Analysis complete!");
    Ok(0)
}

/// Handle --dry-run: list the ids that would be fetched, then exit.
fn handle_dry_run(ids: &[u64]) -> Result<i32> {
    println!("\n🔍 Dry run: listing top story ids (no detail fetches)...\n");

    if ids.is_empty() {
        println!("   The ranking endpoint returned no ids.");
    } else {
        for id in ids {
            println!("     📄 {}", id);
        }
        println!("\n   Total: {} ids", ids.len());
    }

    println!("\n✅ Dry run complete. No story details were fetched.");
    Ok(0)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .hntrends.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
