//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::config::AppPaths;
use crate::error::Result;
use crate::session::Session;

pub mod commands;
pub mod output;

/// Instructor Assistant - fill the Record and Referral form from a skill ledger
#[derive(Parser, Debug)]
#[command(name = "ia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit machine-readable JSON instead of human output
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Data directory holding config.ini and the JSON stores
    /// (default: $IA_DATA_DIR, then the platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage stored instructors
    Instructor(commands::instructor::InstructorArgs),

    /// Manage saved course templates
    Template(commands::template::TemplateArgs),

    /// Validate student lists
    Student(commands::student::StudentArgs),

    /// List the skill catalog with its labels
    Skills(commands::skills::SkillsArgs),

    /// Show or change config.ini settings
    Config(commands::config::ConfigArgs),

    /// Fill the form for one student
    Generate(commands::generate::GenerateArgs),
}

/// State shared by every command.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: AppPaths,
    pub machine: bool,
    pub today: NaiveDate,
}

impl AppContext {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            paths: AppPaths::discover(cli.data_dir.as_deref()),
            machine: cli.machine,
            today: Local::now().date_naive(),
        }
    }

    /// Open a session over the data directory.
    pub fn session(&self) -> Result<Session> {
        Session::open(self.paths.clone(), self.today)
    }
}
