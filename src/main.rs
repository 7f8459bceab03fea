mod analyze;
mod audit;
mod cli;
mod config;
mod error;
mod page;
mod report;
mod scan;
mod server;
mod types;

use crate::error::{AuditError, Result};
use crate::page::fetch::{parse_target, HttpFetcher};
use crate::types::config::AuditConfig;
use crate::types::report::AuditReport;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn audit_page(page: &cli::PageCommand, config: &AuditConfig) -> Result<AuditReport> {
    match &page.html {
        Some(path) => {
            let url = parse_target(&page.url)?;
            let html = std::fs::read_to_string(path)?;
            Ok(audit::audit_html(url.as_str(), &html))
        }
        None => {
            let fetcher = HttpFetcher::new(&config.fetch_settings())?;
            audit::audit_url(&fetcher, &page.url)
        }
    }
}

fn outcome_code(report: &AuditReport) -> i32 {
    if report.has_high_priority() {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let root = std::env::current_dir()?;
    let loaded = config::load_config(&root, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let report = audit_page(&cmd.page, &loaded)?;
            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Flat) => report::OutputFormat::Flat,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => report::OutputFormat::from_name(loaded.default_format())
                    .unwrap_or(report::OutputFormat::Md),
            };
            let rendered = report::render(&report, output_format)?;
            println!("{rendered}");
            Ok(outcome_code(&report))
        }
        cli::Commands::Suggest(cmd) => {
            let report = audit_page(&cmd, &loaded)?;

            if report.recommendations.is_empty() {
                println!("suggest: no recommendations");
                return Ok(exit_code::SUCCESS);
            }

            println!("suggestions:");
            for recommendation in &report.recommendations {
                println!(
                    "- [{}] {} ({}, effort {:?}): {}",
                    recommendation.priority.label(),
                    recommendation.id,
                    recommendation.category,
                    recommendation.effort,
                    recommendation.action
                );
            }
            Ok(outcome_code(&report))
        }
        cli::Commands::Checks(cmd) => {
            let report = audit_page(&cmd, &loaded)?;
            let checks = report.quick_checks();
            for (label, passed) in checks.entries() {
                println!("{} {}", if passed { "PASS" } else { "FAIL" }, label);
            }
            if checks.entries().iter().all(|(_, passed)| *passed) {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Serve(cmd) => {
            let bind = cmd.bind.unwrap_or_else(|| {
                let port = std::env::var("PORT").ok();
                loaded.serve_address(port.as_deref())
            });
            let addr: SocketAddr = bind
                .parse()
                .map_err(|_| AuditError::ConfigParse(format!("invalid bind address: {bind}")))?;

            // The blocking HTTP client must be built and dropped outside the runtime.
            let fetcher = Arc::new(HttpFetcher::new(&loaded.fetch_settings())?);
            let state = server::AppState::new(fetcher.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(addr, state))?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
