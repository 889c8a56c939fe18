//! ia template - saved course templates.

use clap::{Args, Subcommand, ValueEnum};

use crate::catalog::{SkillCode, SlotId};
use crate::cli::AppContext;
use crate::cli::commands::split_assignment;
use crate::cli::output::{HumanLayout, emit_human, emit_ok};
use crate::error::{IaError, Result};
use crate::ledger::CourseOptions;
use crate::templates::{FlexEntry, Template, TemplateDraft, TemplateRecord, TemplateStore};

#[derive(Args, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommand,
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// List saved templates
    List,
    /// Show one template
    Show(TemplateNameArgs),
    /// Save a template, replacing any with the same name
    Save(TemplateSaveArgs),
    /// Delete a template
    Delete(TemplateNameArgs),
}

#[derive(Args, Debug)]
pub struct TemplateNameArgs {
    pub name: String,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CourseOption {
    RdpTable,
    Erdpml,
    Computer,
}

#[derive(Args, Debug)]
pub struct TemplateSaveArgs {
    pub name: String,

    /// Calendar entry as CODE=VALUE, VALUE being a code, `--` or a date
    #[arg(long = "entry", value_name = "CODE=VALUE")]
    pub entries: Vec<String>,

    /// Switch a slot off (e.g. OW3 or KD[5])
    #[arg(long = "off", value_name = "SLOT")]
    pub off: Vec<SlotId>,

    /// Use the eLearning review instead of classroom sections 1-5
    #[arg(long)]
    pub elearning: bool,

    /// Knowledge quiz text as INDEX=TEXT
    #[arg(long = "quiz", value_name = "INDEX=TEXT")]
    pub quiz: Vec<String>,

    /// Flex skill text as INDEX=TEXT
    #[arg(long = "flex", value_name = "INDEX=TEXT")]
    pub flex: Vec<String>,

    /// Course options to select
    #[arg(long = "course", value_enum, value_delimiter = ',')]
    pub course: Vec<CourseOption>,
}

pub fn run(ctx: &AppContext, args: &TemplateArgs) -> Result<()> {
    let mut store = TemplateStore::open(ctx.paths.templates())?;
    match &args.command {
        TemplateCommand::List => run_list(ctx, &store),
        TemplateCommand::Show(show) => run_show(ctx, &store, &show.name),
        TemplateCommand::Save(save) => run_save(ctx, &mut store, save),
        TemplateCommand::Delete(delete) => run_delete(ctx, &mut store, &delete.name),
    }
}

fn run_list(ctx: &AppContext, store: &TemplateStore) -> Result<()> {
    if ctx.machine {
        let names: Vec<&str> = store.names().collect();
        return emit_ok(serde_json::json!({
            "count": names.len(),
            "templates": names,
        }));
    }

    let mut layout = HumanLayout::new();
    layout.title("Templates");
    if store.is_empty() {
        layout.push_line("(none)");
    }
    for name in store.names() {
        layout.bullet(name);
    }
    emit_human(layout);
    Ok(())
}

fn run_show(ctx: &AppContext, store: &TemplateStore, name: &str) -> Result<()> {
    let template = store.get(name)?;
    if ctx.machine {
        return emit_ok(serde_json::json!({
            "name": name,
            "template": TemplateRecord::from(template),
        }));
    }
    emit_human(describe(name, template));
    Ok(())
}

fn describe(name: &str, template: &Template) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(&format!("Template: {name}"));

    layout.section("Calendar");
    for (code, entry) in SkillCode::all().zip(template.calendar) {
        let def = code.slot().def();
        layout.kv(&format!("{:>2} {}", code.value(), code.slot()), &format!("{entry}  {}", def.name));
    }

    let disabled: Vec<String> = template.disabled_slots().map(|id| id.to_string()).collect();
    layout.section("Switched off");
    layout.push_line(if disabled.is_empty() {
        "(none)".to_string()
    } else {
        disabled.join(" ")
    });

    layout.section("Flex skills");
    for (id, entry) in template.flex_entries() {
        let text = match entry {
            FlexEntry::Skip => "--",
            FlexEntry::Literal(text) => text.as_str(),
        };
        layout.kv(&id.to_string(), text);
    }

    layout.section("Knowledge quiz");
    for (index, text) in template.quiz.iter().enumerate() {
        layout.kv(&format!("Quiz {}", index + 1), text);
    }

    let course = template.course;
    layout.section("Course options");
    layout
        .kv("RDP table", yes_no(course.rdp_table))
        .kv("eRDPML", yes_no(course.erdpml))
        .kv("Computer", yes_no(course.computer));
    layout
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn parse_index(raw: &str, limit: usize) -> Result<usize> {
    raw.parse::<usize>()
        .ok()
        .filter(|index| *index < limit)
        .ok_or_else(|| IaError::Validation(format!("index '{raw}' must be below {limit}")))
}

fn build_draft(args: &TemplateSaveArgs) -> Result<TemplateDraft> {
    let mut draft = TemplateDraft::new();
    if args.elearning {
        draft.toggle_elearning();
    }
    for id in &args.off {
        draft.set_switch(*id, false);
    }
    for raw in &args.entries {
        let (key, value) = split_assignment(raw).map_err(IaError::Validation)?;
        let code = key
            .parse::<u8>()
            .ok()
            .and_then(SkillCode::new)
            .ok_or_else(|| IaError::Validation(format!("unknown skill code '{key}'")))?;
        draft.set_entry(code, value.trim());
    }
    for raw in &args.quiz {
        let (key, value) = split_assignment(raw).map_err(IaError::Validation)?;
        draft.set_quiz(parse_index(&key, crate::catalog::QUIZ_COUNT)?, value);
    }
    for raw in &args.flex {
        let (key, value) = split_assignment(raw).map_err(IaError::Validation)?;
        draft.set_flex(parse_index(&key, crate::catalog::FLEX_COUNT)?, value);
    }
    draft.set_course(CourseOptions {
        rdp_table: args.course.contains(&CourseOption::RdpTable),
        erdpml: args.course.contains(&CourseOption::Erdpml),
        computer: args.course.contains(&CourseOption::Computer),
    });
    Ok(draft)
}

fn run_save(ctx: &AppContext, store: &mut TemplateStore, args: &TemplateSaveArgs) -> Result<()> {
    let draft = build_draft(args)?;
    let template = store.save(&args.name, &draft)?;
    if ctx.machine {
        return emit_ok(serde_json::json!({
            "saved": args.name,
            "template": TemplateRecord::from(&template),
        }));
    }
    println!(
        "Saved template {} ({} slots switched off)",
        args.name,
        template.disabled_slots().count()
    );
    Ok(())
}

fn run_delete(ctx: &AppContext, store: &mut TemplateStore, name: &str) -> Result<()> {
    store.delete(name)?;
    if ctx.machine {
        return emit_ok(serde_json::json!({ "deleted": name }));
    }
    println!("Deleted template {name}");
    Ok(())
}
