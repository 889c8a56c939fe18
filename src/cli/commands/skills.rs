//! ia skills - the form's skill catalog.

use clap::Args;

use crate::catalog::{CATALOG, Category};
use crate::cli::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_ok};
use crate::error::Result;
use crate::labels::SkillLabels;

#[derive(Args, Debug)]
pub struct SkillsArgs {
    /// Only list one category (cw, kd, ow)
    #[arg(long, value_parser = parse_category)]
    pub category: Option<Category>,
}

fn parse_category(raw: &str) -> std::result::Result<Category, String> {
    match raw.to_ascii_lowercase().as_str() {
        "cw" => Ok(Category::Cw),
        "kd" => Ok(Category::Kd),
        "ow" => Ok(Category::Ow),
        other => Err(format!("unknown category '{other}'")),
    }
}

pub fn run(ctx: &AppContext, args: &SkillsArgs) -> Result<()> {
    let labels = SkillLabels::load(&ctx.paths.labels())?;
    let rows: Vec<_> = CATALOG
        .iter()
        .filter(|def| args.category.is_none_or(|category| def.slot.category() == category))
        .collect();

    if ctx.machine {
        let payload: Vec<_> = rows
            .iter()
            .map(|def| {
                serde_json::json!({
                    "slot": def.slot.to_string(),
                    "code": def.code,
                    "kind": def.kind,
                    "label": labels.label(def.slot),
                })
            })
            .collect();
        return emit_ok(serde_json::json!({ "skills": payload }));
    }

    let mut layout = HumanLayout::new();
    layout.title("Skills");
    let mut current = None;
    for def in rows {
        let category = def.slot.category();
        if current != Some(category) {
            current = Some(category);
            layout.section(category.label());
        }
        let code = def.code.map_or_else(|| "  ".to_string(), |code| format!("{:>2}", code.value()));
        layout.kv(&format!("{code} {}", def.slot), labels.label(def.slot));
    }
    emit_human(layout);
    Ok(())
}
