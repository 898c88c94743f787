//! Rendering of the tag corpus for the command line.

use std::io::Write;

use crate::{error::Result, project::Project};

/// Write projects as a human-readable listing.
pub fn format_human(out: &mut impl Write, projects: &[Project]) -> Result<()> {
    if projects.is_empty() {
        writeln!(out, "No projects registered.")?;
        return Ok(());
    }

    for project in projects {
        writeln!(out, "{} ({})", project.project_id(), project.project_name())?;

        let categories: Vec<_> = project
            .categories()
            .iter()
            .filter(|c| !c.name.is_empty())
            .map(|c| c.name.as_str())
            .collect();
        if !categories.is_empty() {
            writeln!(out, "  categories: {}", categories.join(", "))?;
        }

        for doc in project.docs() {
            let category = if doc.category().is_empty() {
                "-"
            } else {
                doc.category()
            };
            writeln!(
                out,
                "  {:<16} {:<12} {}",
                doc.doc_id(),
                category,
                doc.tags()
            )?;
        }
    }

    let doc_count: usize = projects.iter().map(|p| p.docs().len()).sum();
    writeln!(
        out,
        "\n{} project(s), {doc_count} document(s)",
        projects.len()
    )?;
    Ok(())
}

/// Write projects as the JSON array consumed by the search UI.
pub fn format_json(out: &mut impl Write, projects: &[Project]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, projects)?;
    writeln!(out)?;
    Ok(())
}

/// Write extracted keywords, one per line.
pub fn format_keywords(out: &mut impl Write, keywords: &[String]) -> Result<()> {
    for word in keywords {
        writeln!(out, "{word}")?;
    }
    Ok(())
}
