use clap::{Parser, ValueEnum};
use std::fmt;

#[derive(Parser)]
#[command(name = "webtally")]
#[command(about = "Summarize a web-server access log in combined log format", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the access-log file
    pub path: String,

    /// Output rendering: pretty JSON or an aligned console view
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
