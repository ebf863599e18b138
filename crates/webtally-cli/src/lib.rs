mod args;
mod commands;
mod handlers;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use commands::run;
