//! Resolve command implementation

use anyhow::{Context, Result};
use jp_core::Path as RelPath;

use super::common::Project;
use crate::cli::{GlobalArgs, ResolveArgs, ResolveOutput};

/// Execute the resolve command
pub fn execute(args: &ResolveArgs, global: &GlobalArgs) -> Result<()> {
    let project = Project::load(global)?;
    let path = project.resolve(&args.root, &args.path)?;

    match args.output {
        ResolveOutput::Table => print!("{}", format_table(&path)),
        ResolveOutput::Json => println!(
            "{}",
            serde_json::to_string_pretty(&path).context("Failed to serialize path")?
        ),
    }
    Ok(())
}

/// One row per hop: relationship, target, kind and join condition
fn format_table(path: &RelPath) -> String {
    let rows: Vec<[String; 4]> = path
        .iter()
        .map(|hop| {
            let join = match &hop.junction {
                Some(junction) => format!(
                    "{} VIA {} ON {}",
                    hop.primary_join, junction.table, junction.junction_join
                ),
                None => hop.primary_join.to_string(),
            };
            [
                format!("{}.{}", hop.owning.name, hop.name),
                hop.target.to_string(),
                hop.kind().to_string(),
                join,
            ]
        })
        .collect();

    let width = |i: usize, header: &str| {
        rows.iter()
            .map(|r| r[i].len())
            .max()
            .unwrap_or(0)
            .max(header.len())
    };
    let (rel_w, target_w, kind_w) = (
        width(0, "RELATIONSHIP"),
        width(1, "TARGET"),
        width(2, "KIND"),
    );

    let mut out = format!(
        "{:<rel_w$}  {:<target_w$}  {:<kind_w$}  JOIN\n",
        "RELATIONSHIP", "TARGET", "KIND"
    );
    out.push_str(&format!(
        "{:-<rel_w$}  {:-<target_w$}  {:-<kind_w$}  {}\n",
        "",
        "",
        "",
        "-".repeat(40)
    ));
    for [rel, target, kind, join] in &rows {
        out.push_str(&format!(
            "{:<rel_w$}  {:<target_w$}  {:<kind_w$}  {}\n",
            rel, target, kind, join
        ));
    }
    out
}
