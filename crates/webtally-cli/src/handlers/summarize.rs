use crate::args::OutputFormat;
use crate::output;
use anyhow::Result;
use std::path::Path;
use webtally_engine::summarize_file;

pub fn handle(path: &str, format: OutputFormat) -> Result<()> {
    let summary = summarize_file(Path::new(path))?;

    match format {
        OutputFormat::Json => println!("{}", output::render_json(&summary)?),
        OutputFormat::Plain => print!("{}", output::render_plain(&summary)),
    }

    Ok(())
}
