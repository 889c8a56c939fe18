//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::cli::{AppContext, Commands};
use crate::error::Result;

pub mod config;
pub mod generate;
pub mod instructor;
pub mod skills;
pub mod student;
pub mod template;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Instructor(args) => instructor::run(ctx, args),
        Commands::Template(args) => template::run(ctx, args),
        Commands::Student(args) => student::run(ctx, args),
        Commands::Skills(args) => skills::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
        Commands::Generate(args) => generate::run(ctx, args),
    }
}

/// Split `KEY=VALUE`.
pub(crate) fn split_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}
