use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::qa::{self, QaDocument, source};

pub fn run(file: Option<PathBuf>, search: Option<&str>) -> Result<()> {
    let path = file.unwrap_or_else(|| Config::load_or_default().qa_path());
    let content = source::read(&path)?;
    let document = qa::parse(&content);
    let visible = match search {
        Some(term) => document.filter(term),
        None => document,
    };
    print!("{}", render(&visible));
    Ok(())
}

/// Topic index followed by the nested questions. Subsections without items are
/// left out, as on the Q&A page.
fn render(doc: &QaDocument) -> String {
    let mut out = String::new();
    if doc.is_empty() {
        out.push_str(&format!("{}\n", "No Q&A content available.".yellow()));
        return out;
    }

    out.push_str(&format!("{}\n", "Topics".bold()));
    for section in &doc.sections {
        out.push_str(&format!("  \u{2022} {}\n", section.title));
    }
    out.push('\n');

    for section in &doc.sections {
        out.push_str(&format!("{}\n", section.title.bold().underline()));
        for sub in section.subsections.iter().filter(|s| !s.items.is_empty()) {
            out.push_str(&format!("  {}\n", sub.subtitle.cyan().bold()));
            for item in &sub.items {
                out.push_str(&format!("    {} {}\n", "Q:".green().bold(), item.question));
                for line in item.answer.lines() {
                    out.push_str(&format!("       {}\n", line));
                }
            }
        }
        out.push('\n');
    }

    if doc.has_results() {
        out.push_str(&format!("{}\n", format!("{} questions", doc.item_count()).dimmed()));
    } else {
        out.push_str(&format!(
            "{}\n",
            "No questions found matching your search.".yellow()
        ));
    }
    out
}
