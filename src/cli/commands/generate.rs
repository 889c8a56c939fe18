//! ia generate - fill the form for one student.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::catalog::{FLEX_COUNT, QUIZ_COUNT, SlotId, flex_slot};
use crate::cli::AppContext;
use crate::cli::commands::split_assignment;
use crate::cli::output::{HumanLayout, emit_human, emit_ok};
use crate::error::{IaError, Result};
use crate::form::JsonFormWriter;
use crate::instructor::SignOff;
use crate::ledger::SkillValue;
use crate::session::Session;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Student CSV to load the roster from
    #[arg(long)]
    pub students: PathBuf,

    /// Full name of the student the form is for
    #[arg(long)]
    pub student: String,

    /// Template applied after the ledger is reset
    #[arg(long)]
    pub template: Option<String>,

    /// Use the eLearning review instead of classroom sections 1-5
    #[arg(long)]
    pub elearning: bool,

    /// Switch a slot off before signing (e.g. CW14)
    #[arg(long = "off", value_name = "SLOT")]
    pub off: Vec<SlotId>,

    /// Flex skill text as INDEX=TEXT
    #[arg(long = "flex", value_name = "INDEX=TEXT")]
    pub flex: Vec<String>,

    /// Knowledge quiz text as INDEX=TEXT
    #[arg(long = "quiz", value_name = "INDEX=TEXT")]
    pub quiz: Vec<String>,

    /// Instructor signing off the enabled skills
    #[arg(long, requires = "password")]
    pub instructor: Option<String>,

    /// Password of the signing instructor
    #[arg(long, env = "IA_INSTRUCTOR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

pub fn run(ctx: &AppContext, args: &GenerateArgs) -> Result<()> {
    let mut session = ctx.session()?;
    session.reset();
    prepare_ledger(&mut session, args)?;

    session.import_students(&args.students)?;
    session.select_student(&args.student)?;

    let sign_off = match (&args.instructor, &args.password) {
        (Some(instructor), Some(password)) => Some(session.sign_off(instructor, password)?),
        (Some(_), None) => {
            return Err(IaError::Validation("--instructor needs --password".to_string()));
        }
        _ => None,
    };

    let written = session.generate(&JsonFormWriter)?;
    info!(path = %written.display(), student = %args.student, "form generated");
    report(ctx, &written, sign_off.as_ref())
}

/// Template, switch and text changes, in the order an instructor makes them.
fn prepare_ledger(session: &mut Session, args: &GenerateArgs) -> Result<()> {
    if let Some(name) = &args.template {
        session.select_template(name)?;
        session.apply_selected_template()?;
    }
    if args.elearning {
        session.ledger.toggle_elearning();
    }
    for id in &args.off {
        session.ledger.set_enabled(*id, false);
    }
    for raw in &args.flex {
        let (index, text) = indexed(raw, FLEX_COUNT)?;
        if let Some(id) = flex_slot(index) {
            session.ledger.set_value(id, SkillValue::Text(text))?;
        }
    }
    for raw in &args.quiz {
        let (index, text) = indexed(raw, QUIZ_COUNT)?;
        session.ledger.set_quiz(index, text);
    }
    Ok(())
}

fn indexed(raw: &str, limit: usize) -> Result<(usize, String)> {
    let (key, value) = split_assignment(raw).map_err(IaError::Validation)?;
    let index = key
        .parse::<usize>()
        .ok()
        .filter(|index| *index < limit)
        .ok_or_else(|| IaError::Validation(format!("index '{key}' must be below {limit}")))?;
    Ok((index, value))
}

fn report(ctx: &AppContext, written: &std::path::Path, sign_off: Option<&SignOff>) -> Result<()> {
    if ctx.machine {
        return emit_ok(serde_json::json!({
            "written": written,
            "sign_off": sign_off,
        }));
    }
    let mut layout = HumanLayout::new();
    layout.title("Form generated").kv("Written", &written.display().to_string());
    if let Some(sign_off) = sign_off {
        layout
            .kv("Slots signed", &sign_off.slots_attributed.to_string())
            .kv("Header", &format!("{:?}", sign_off.header));
    }
    emit_human(layout);
    Ok(())
}
