use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aeo-audit",
    version,
    about = "Answer Engine Optimization audit for a single web page"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read configuration from this file instead of the layered lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a page and print the full report
    Analyze(AnalyzeCommand),
    /// Print the prioritized recommendations for a page
    Suggest(PageCommand),
    /// Print the pass/fail quick checks for a page
    Checks(PageCommand),
    /// Run the HTTP API
    Serve(ServeCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Flat,
    Md,
}

#[derive(Args)]
pub struct PageCommand {
    pub url: String,
    /// Audit markup saved at this path instead of fetching the URL
    #[arg(long)]
    pub html: Option<PathBuf>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub page: PageCommand,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ServeCommand {
    /// Socket address to listen on, e.g. 127.0.0.1:8080
    #[arg(long, env = "AEO_AUDIT_BIND")]
    pub bind: Option<String>,
}
