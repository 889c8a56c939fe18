//! ia student - validate student lists.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_ok};
use crate::error::Result;
use crate::student::{StudentRoster, import_csv};

#[derive(Args, Debug)]
pub struct StudentArgs {
    #[command(subcommand)]
    pub command: StudentCommand,
}

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    /// Check a student CSV and list the students it holds
    Import(StudentImportArgs),
}

#[derive(Args, Debug)]
pub struct StudentImportArgs {
    /// CSV file with one student per row
    pub path: PathBuf,
}

pub fn run(ctx: &AppContext, args: &StudentArgs) -> Result<()> {
    match &args.command {
        StudentCommand::Import(import) => run_import(ctx, import),
    }
}

fn run_import(ctx: &AppContext, args: &StudentImportArgs) -> Result<()> {
    let mut roster = StudentRoster::new();
    let report = import_csv(&args.path, &mut roster)?;

    if ctx.machine {
        return emit_ok(serde_json::json!({
            "added": report.added,
            "replaced": report.replaced,
            "students": roster.iter().collect::<Vec<_>>(),
        }));
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("{} students", roster.len()));
    for student in roster.iter() {
        layout.bullet(&student.to_string());
    }
    if report.replaced > 0 {
        layout.push_line(format!("{} duplicate rows replaced earlier ones", report.replaced));
    }
    emit_human(layout);
    Ok(())
}
