use super::args::Cli;
use super::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    handlers::summarize::handle(&cli.path, cli.format)
}
