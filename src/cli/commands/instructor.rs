//! ia instructor - manage the instructor directory.

use clap::{Args, Subcommand};

use crate::cli::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_ok};
use crate::error::Result;
use crate::instructor::{InstructorDirectory, NewInstructor};

#[derive(Args, Debug)]
pub struct InstructorArgs {
    #[command(subcommand)]
    pub command: InstructorCommand,
}

#[derive(Subcommand, Debug)]
pub enum InstructorCommand {
    /// Add or replace an instructor
    Add(InstructorAddArgs),
    /// Remove an instructor
    Remove(InstructorRemoveArgs),
    /// List stored instructors
    List,
}

#[derive(Args, Debug)]
pub struct InstructorAddArgs {
    /// Full name, used as the directory key
    pub name: String,

    #[arg(long)]
    pub initials: String,

    /// Instructor certification number
    #[arg(long)]
    pub number: String,

    #[arg(long, default_value = "")]
    pub dive_center: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Sign-off password
    #[arg(long, env = "IA_INSTRUCTOR_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct InstructorRemoveArgs {
    pub name: String,
}

pub fn run(ctx: &AppContext, args: &InstructorArgs) -> Result<()> {
    let mut directory = InstructorDirectory::open(ctx.paths.instructors())?;
    match &args.command {
        InstructorCommand::Add(add) => run_add(ctx, &mut directory, add),
        InstructorCommand::Remove(remove) => run_remove(ctx, &mut directory, remove),
        InstructorCommand::List => run_list(ctx, &directory),
    }
}

fn run_add(ctx: &AppContext, directory: &mut InstructorDirectory, args: &InstructorAddArgs) -> Result<()> {
    let added = directory.add(NewInstructor {
        name: args.name.clone(),
        initials: args.initials.clone(),
        cert_number: args.number.clone(),
        dive_center: args.dive_center.clone(),
        phone: args.phone.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
    })?;

    if ctx.machine {
        return emit_ok(serde_json::json!({
            "added": added.name,
            "initials": added.initials,
        }));
    }
    println!("Added instructor {} ({})", added.name, added.initials);
    Ok(())
}

fn run_remove(ctx: &AppContext, directory: &mut InstructorDirectory, args: &InstructorRemoveArgs) -> Result<()> {
    let removed = directory.remove(&args.name)?;
    if ctx.machine {
        return emit_ok(serde_json::json!({ "removed": removed.name }));
    }
    println!("Removed instructor {}", removed.name);
    Ok(())
}

fn run_list(ctx: &AppContext, directory: &InstructorDirectory) -> Result<()> {
    if ctx.machine {
        let payload: Vec<_> = directory
            .iter()
            .map(|instructor| {
                serde_json::json!({
                    "name": instructor.name,
                    "initials": instructor.initials,
                    "number": instructor.cert_number,
                    "dive_center": instructor.dive_center,
                })
            })
            .collect();
        return emit_ok(serde_json::json!({
            "count": directory.len(),
            "instructors": payload,
        }));
    }

    let mut layout = HumanLayout::new();
    layout.title("Instructors");
    if directory.is_empty() {
        layout.push_line("(none)");
    }
    for instructor in directory.iter() {
        layout.kv(
            &instructor.name,
            &format!("{} #{}", instructor.initials, instructor.cert_number),
        );
    }
    emit_human(layout);
    Ok(())
}
