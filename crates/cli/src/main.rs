//! queue-url CLI - check and inspect SQS queue URLs

mod logging;

use std::io::BufRead;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use queue_url_core::{
    AccountIdPolicy, QueueNamePolicy, QueueUrl, QueueUrlValidator, ValidatorConfig,
};
use serde::Serialize;
use tabled::{Table, Tabled};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "queue-url")]
#[command(about = "Validate and inspect SQS queue URLs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Require 12-digit account ids
    #[arg(long, global = true, env = "QUEUE_URL_STRICT_ACCOUNT_ID")]
    strict_account_id: bool,

    /// Require AWS queue naming rules (80 chars of [A-Za-z0-9_-], optional .fifo)
    #[arg(long, global = true, env = "QUEUE_URL_STRICT_QUEUE_NAME")]
    strict_queue_name: bool,
}

impl Cli {
    fn validator_config(&self) -> ValidatorConfig {
        let mut config = ValidatorConfig::default();
        if self.strict_account_id {
            config.account_id_policy = AccountIdPolicy::Strict;
        }
        if self.strict_queue_name {
            config.queue_name_policy = QueueNamePolicy::Aws;
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check one or more URLs (reads stdin, one per line, when none given)
    Check {
        /// URLs to check
        urls: Vec<String>,
    },

    /// Parse a URL and print its components
    Parse {
        /// URL to parse
        url: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize, Tabled)]
struct ParsedRow {
    url: String,
    region: String,
    account_id: String,
    queue_name: String,
    fifo: bool,
}

impl From<&QueueUrl> for ParsedRow {
    fn from(url: &QueueUrl) -> Self {
        Self {
            url: url.to_string(),
            region: url.region().to_string(),
            account_id: url.account_id().to_string(),
            queue_name: url.queue_name().to_string(),
            fifo: url.is_fifo(),
        }
    }
}

/// Non-blank lines of `reader`
fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Returns `true` when every input is a queue URL
fn run_check(
    validator: &QueueUrlValidator,
    urls: Vec<String>,
    fallback: impl BufRead,
) -> Result<bool> {
    let inputs = if urls.is_empty() {
        debug!("No URLs given, reading stdin");
        read_lines(fallback)?
    } else {
        urls
    };

    let result = validator.partition(&inputs);

    for url in &result.valid {
        println!("{} {}", "✓".green().bold(), url);
    }
    for rejection in &result.rejected {
        println!(
            "{} {} {}",
            "✗".red().bold(),
            rejection.input.trim(),
            format!("({})", rejection.error).yellow()
        );
    }

    info!(
        valid = result.valid.len(),
        rejected = result.rejected.len(),
        "Check finished"
    );

    Ok(result.all_valid())
}

/// Returns `false` when `url` is not a queue URL
fn run_parse(validator: &QueueUrlValidator, url: &str, json: bool) -> Result<bool> {
    let parsed = match validator.parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{} {}", "✗ Not a queue URL:".red().bold(), e);
            return Ok(false);
        }
    };

    let row = ParsedRow::from(&parsed);
    if json {
        let out = serde_json::to_string_pretty(&row).context("Failed to serialize result")?;
        println!("{}", out);
    } else {
        println!("{}", Table::new(vec![row]));
    }

    Ok(true)
}

fn main() -> Result<ExitCode> {
    logging::init_logging()?;

    let cli = Cli::parse();

    let validator = QueueUrlValidator::new(cli.validator_config());
    debug!(
        account_id_policy = %validator.config().account_id_policy,
        queue_name_policy = %validator.config().queue_name_policy,
        "Validator configured"
    );

    let ok = match cli.command {
        Commands::Check { urls } => run_check(&validator, urls, std::io::stdin().lock())?,
        Commands::Parse { url, json } => run_parse(&validator, &url, json)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
