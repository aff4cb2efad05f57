// SPDX-License-Identifier: PMPL-1.0-or-later
//! pitchbot CLI - Single-page Weakness Reporter

use clap::{Parser, Subcommand};
use pitchbot::config::{self, Config};
use pitchbot::report::{self, OutputFormat};
use pitchbot::signals::rules::{self, Locale};
use pitchbot::{signals, sink, Fetcher};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// pitchbot: Single-page Weakness Reporter
///
/// Fetches one web page and writes a heuristic report on discoverability,
/// AI-answer visibility and accessibility risk.
#[derive(Parser)]
#[command(name = "pitchbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a page and write its report
    Scan {
        /// Page to analyze
        #[arg(env = "TARGET_URL")]
        url: String,

        /// Report file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Print the report instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Analyze a saved markup file without fetching
    Analyze {
        /// Markup file
        file: PathBuf,

        /// Target label shown in the report (defaults to the file name)
        #[arg(long)]
        label: Option<String>,

        /// Output format (text, json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Initialize configuration file
    Init {
        /// Output format (yaml, toml)
        #[arg(long, default_value = "yaml")]
        format: String,
    },

    /// Show current configuration and rule tables
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);

    let config = match config::load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Scan {
            url,
            output,
            format,
            stdout,
        } => handle_scan(&config, &url, output, format, stdout).await,
        Command::Analyze {
            file,
            label,
            format,
        } => handle_analyze(&config, &file, label, format),
        Command::Init { format } => handle_init(&config_path, &format),
        Command::Show => handle_show(&config),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn handle_scan(
    config: &Config,
    url: &str,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    stdout: bool,
) -> ExitCode {
    let fetcher = match Fetcher::new(&config.fetch) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Fetching markup from {}", url);
    let markup = match fetcher.fetch(url).await {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error fetching {}: {}", url, e);
            return ExitCode::FAILURE;
        }
    };

    let text = analyze_markup(config, &markup, url, format);

    if stdout {
        println!("{}", text);
        return ExitCode::SUCCESS;
    }

    let path = output.unwrap_or_else(|| config.report.output_path.clone());
    match sink::write_report(&path, &text) {
        Ok(()) => {
            println!("{} generated", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing report to {}: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn handle_analyze(
    config: &Config,
    file: &Path,
    label: Option<String>,
    format: Option<OutputFormat>,
) -> ExitCode {
    let markup = match std::fs::read(file) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            eprintln!("Error reading {}: {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let label = label.unwrap_or_else(|| {
        file.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string())
    });

    println!("{}", analyze_markup(config, &markup, &label, format));
    ExitCode::SUCCESS
}

fn analyze_markup(
    config: &Config,
    markup: &str,
    label: &str,
    format: Option<OutputFormat>,
) -> String {
    let signals = signals::extract(markup, label);
    info!(
        seo = signals.scores.seo,
        ai_visibility = signals.scores.ai_visibility,
        accessibility = signals.scores.accessibility,
        contrast_risk = %signals.contrast_risk,
        "analysis complete"
    );

    let report = report::build_report(&signals, label, config.report.finding_options());
    report::render(&report, format.unwrap_or(config.report.format))
}

fn handle_init(config_path: &Path, format: &str) -> ExitCode {
    let path = if format == "toml" {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    match config::write_default_config(&path) {
        Ok(()) => {
            println!("Created configuration file: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error creating config: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn handle_show(config: &Config) -> ExitCode {
    println!("\nCurrent Configuration:");
    println!("======================\n");

    println!("Fetch:");
    println!("  Max redirects: {}", config.fetch.max_redirects);
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);
    println!("  Max body: {} bytes", config.fetch.max_body_bytes);
    println!();

    println!("Report:");
    println!("  Output path: {}", config.report.output_path.display());
    println!("  Format: {}", config.report.format);
    println!("  Navigation finding: {}", config.report.include_navigation);
    println!("  Page weight finding: {}", config.report.include_page_weight);
    println!();

    println!("Rules:");
    for locale in [Locale::Norwegian, Locale::English] {
        let service: Vec<_> = rules::keywords_for(rules::SERVICE_KEYWORDS, locale).collect();
        let faq: Vec<_> = rules::keywords_for(rules::FAQ_KEYWORDS, locale).collect();
        println!("  {:?} service keywords: {}", locale, service.join(", "));
        println!("  {:?} FAQ keywords: {}", locale, faq.join(", "));
    }
    println!("  Muted classes: {}", rules::MUTED_CLASS_TOKENS.join(", "));

    ExitCode::SUCCESS
}
