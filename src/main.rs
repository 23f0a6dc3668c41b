//! myds main entry point
//!
//! This is the command-line interface for the myds toolkit.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use myds::config::{load_config_with_hash, Config};
use myds::crawler::{
    build_http_client, expand_one_level_with, fetch_document, ExpandOptions, LinkSources,
};
use myds::output::{print_page_report, write_markdown_report, PageReport};
use myds::stats;
use myds::url::{filter_by_image_extension, parse_start_url};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// myds: sample size estimation and one-hop link crawling
#[derive(Parser, Debug)]
#[command(name = "myds")]
#[command(version)]
#[command(about = "Sample size estimation and one-hop link crawling", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the links on each page, then the links one hop away
    Links {
        /// Pages to fetch; arguments that are not http(s) URLs are skipped
        #[arg(value_name = "URL", required = true)]
        urls: Vec<String>,

        /// Path to TOML configuration file
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,

        /// Do not fetch the discovered links
        #[arg(long)]
        no_follow: bool,

        /// Write a markdown report to this path
        #[arg(long, value_name = "PATH")]
        summary: Option<PathBuf>,
    },

    /// Sample size required for a maximum error
    SampleSize {
        /// Standard deviation
        #[arg(long)]
        std: f64,

        /// Maximum error
        #[arg(long)]
        max_error: f64,

        #[command(flatten)]
        multiplier: Multiplier,
    },

    /// Maximum error for a sample size
    Error {
        /// Sample size
        #[arg(long)]
        sample_size: f64,

        /// Standard deviation
        #[arg(long)]
        std: f64,

        #[command(flatten)]
        multiplier: Multiplier,
    },

    /// Print the standard normal PDF and CDF between ppf(0.001) and ppf(0.999)
    NormalTable {
        /// Number of evenly spaced points
        #[arg(long, default_value_t = 100)]
        points: usize,
    },
}

/// Either a z-multiplier or a confidence level
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Multiplier {
    /// z-multiplier
    #[arg(long)]
    z: Option<f64>,

    /// Two-sided confidence level, e.g. 0.95
    #[arg(long)]
    confidence: Option<f64>,
}

enum Spread {
    Z(f64),
    Confidence(f64),
}

impl Multiplier {
    fn spread(&self) -> anyhow::Result<Spread> {
        match (self.z, self.confidence) {
            (Some(z), None) => Ok(Spread::Z(z)),
            (None, Some(confidence)) => Ok(Spread::Confidence(confidence)),
            _ => anyhow::bail!("exactly one of --z or --confidence is required"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Links {
            urls,
            config,
            no_follow,
            summary,
        } => handle_links(urls, config, no_follow, summary).await,
        Command::SampleSize {
            std,
            max_error,
            multiplier,
        } => {
            let n = match multiplier.spread()? {
                Spread::Z(z) => stats::sample_size_from_z(z, std, max_error),
                Spread::Confidence(confidence) => {
                    stats::sample_size_from_confidence(confidence, std, max_error)
                }
            };
            println!("{}", n);
            Ok(())
        }
        Command::Error {
            sample_size,
            std,
            multiplier,
        } => {
            let error = match multiplier.spread()? {
                Spread::Z(z) => stats::error_from_sample_size(sample_size, z, std),
                Spread::Confidence(confidence) => {
                    stats::error_from_confidence(sample_size, confidence, std)
                }
            };
            println!("{}", error);
            Ok(())
        }
        Command::NormalTable { points } => {
            handle_normal_table(points);
            Ok(())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("myds=info,warn"),
            1 => EnvFilter::new("myds=debug,info"),
            2 => EnvFilter::new("myds=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the `links` subcommand
async fn handle_links(
    urls: Vec<String>,
    config_path: Option<PathBuf>,
    no_follow: bool,
    summary: Option<PathBuf>,
) -> anyhow::Result<()> {
    let (config, config_hash) = match &config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (cfg, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, Some(hash))
        }
        None => (Config::default(), None),
    };

    let client = build_http_client(&config.user_agent)?;
    let sources = LinkSources {
        include_images: config.crawler.include_images,
    };
    let options = ExpandOptions {
        resolution: config.crawler.resolution,
        sources,
    };
    let follow = config.crawler.follow_next_level && !no_follow;

    let mut reports = Vec::new();

    for arg in &urls {
        if let Err(e) = parse_start_url(arg) {
            tracing::warn!("Skipping {}: {}", arg, e);
            continue;
        }

        let Some(doc) = fetch_document(&client, arg).await else {
            continue;
        };

        let all_links = sources.all_links(&doc);
        let image_links = if sources.include_images {
            filter_by_image_extension(&all_links)
        } else {
            Vec::new()
        };
        let next_level = if follow {
            expand_one_level_with(&client, &all_links, arg, options).await
        } else {
            Vec::new()
        };

        let report = PageReport {
            url: arg.clone(),
            local_links: sources.local_links(&doc),
            all_links,
            image_links,
            next_level,
        };
        print_page_report(&report);
        reports.push(report);
    }

    let summary_path = summary.or_else(|| config.output.summary_path.as_ref().map(PathBuf::from));
    if let Some(path) = summary_path {
        write_markdown_report(&reports, config_hash.as_deref(), &path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!("Report written to {}", path.display());
    }

    Ok(())
}

/// Handles the `normal-table` subcommand
fn handle_normal_table(points: usize) {
    println!("{:>12} {:>14} {:>14}", "x", "pdf(x)", "cdf(x)");
    for x in stats::linspace(stats::ppf(0.001), stats::ppf(0.999), points) {
        println!("{:>12.6} {:>14.8} {:>14.8}", x, stats::pdf(x), stats::cdf(x));
    }
}
