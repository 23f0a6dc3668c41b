//! Markdown report generation
//!
//! This module renders the links gathered for each starting URL, including
//! the one-hop expansion, as a markdown document.

use crate::output::{OutputResult, PageReport};
use chrono::{SecondsFormat, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown report and writes it to `output_path`
///
/// # Arguments
///
/// * `reports` - One report per starting URL
/// * `config_hash` - Hash of the configuration file, if one was used
/// * `output_path` - Path where the markdown file should be written
pub fn write_markdown_report(
    reports: &[PageReport],
    config_hash: Option<&str>,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_report(reports, config_hash);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats page reports as markdown
pub fn format_markdown_report(reports: &[PageReport], config_hash: Option<&str>) -> String {
    let mut md = String::new();

    md.push_str("# myds Link Report\n\n");

    md.push_str("## Run Information\n\n");
    md.push_str(&format!(
        "- **Generated**: {}\n",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    md.push_str(&format!("- **Pages**: {}\n", reports.len()));
    if let Some(hash) = config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overview table
    md.push_str("| Page | Links | Local | Images | Next Level Pages | Next Level Links |\n");
    md.push_str("|------|-------|-------|--------|------------------|------------------|\n");
    for report in reports {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            report.url,
            report.all_links.len(),
            report.local_links.len(),
            report.image_links.len(),
            report.next_level.len(),
            report.next_level_link_count()
        ));
    }
    md.push('\n');

    for report in reports {
        md.push_str(&format!("## {}\n\n", report.url));

        push_list(&mut md, "All Links", &report.all_links);
        push_list(&mut md, "Local Links", &report.local_links);
        if !report.image_links.is_empty() {
            push_list(&mut md, "Image Links", &report.image_links);
        }

        if !report.next_level.is_empty() {
            md.push_str("### Next Level\n\n");
            for entry in &report.next_level {
                md.push_str(&format!("#### {}\n\n", entry.url));
                push_items(&mut md, &entry.links);
            }
        }
    }

    md
}

fn push_list(md: &mut String, title: &str, items: &[String]) {
    md.push_str(&format!("### {} ({})\n\n", title, items.len()));
    push_items(md, items);
}

fn push_items(md: &mut String, items: &[String]) {
    if items.is_empty() {
        md.push_str("_None_\n\n");
        return;
    }

    for (i, item) in items.iter().enumerate() {
        md.push_str(&format!("{}. `{}`\n", i + 1, item));
    }
    md.push('\n');
}
