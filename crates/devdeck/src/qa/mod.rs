pub mod source;

use std::sync::LazyLock;

use regex::Regex;

/// `1. **Question text**`
static QUESTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+\*\*").unwrap());
/// Any numbered line. Never part of an answer.
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

const SECTION_MARKER: &str = "## ";
const SUBSECTION_MARKER: &str = "### ";
const ANSWER_LABEL: &str = "**Answer:**";
const BOLD: &str = "**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    pub subtitle: String,
    pub items: Vec<QaItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub subsections: Vec<Subsection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QaDocument {
    pub sections: Vec<Section>,
}

impl QaDocument {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// True when at least one subsection still has an item to show.
    pub fn has_results(&self) -> bool {
        self.sections
            .iter()
            .flat_map(|s| &s.subsections)
            .any(|sub| !sub.items.is_empty())
    }

    pub fn item_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.subsections)
            .map(|sub| sub.items.len())
            .sum()
    }

    /// Keep only items whose question or answer contains `term`, ignoring case.
    /// Sections and subsections are kept even when they end up empty.
    pub fn filter(&self, term: &str) -> QaDocument {
        let needle = term.to_lowercase();
        let matches = |item: &QaItem| {
            item.question.to_lowercase().contains(&needle)
                || item.answer.to_lowercase().contains(&needle)
        };
        QaDocument {
            sections: self
                .sections
                .iter()
                .map(|section| Section {
                    title: section.title.clone(),
                    subsections: section
                        .subsections
                        .iter()
                        .map(|sub| Subsection {
                            subtitle: sub.subtitle.clone(),
                            items: sub.items.iter().filter(|&i| matches(i)).cloned().collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// In-progress parse. Each `flush_*` commits one level into its parent.
#[derive(Debug, Default)]
struct ParseState {
    sections: Vec<Section>,
    section: Option<Section>,
    subsection: Option<Subsection>,
    question: String,
    answer: String,
    in_answer: bool,
}

impl ParseState {
    /// Commit the pending pair if it is complete; reset it either way.
    fn flush_item(&mut self) {
        let question = std::mem::take(&mut self.question);
        let answer = std::mem::take(&mut self.answer);
        self.in_answer = false;
        if question.is_empty() || answer.is_empty() {
            return;
        }
        if let Some(sub) = self.subsection.as_mut() {
            sub.items.push(QaItem { question, answer });
        }
    }

    fn flush_subsection(&mut self) {
        self.flush_item();
        if let Some(sub) = self.subsection.take() {
            if let Some(section) = self.section.as_mut() {
                section.subsections.push(sub);
            }
        }
    }

    fn flush_section(&mut self) {
        self.flush_subsection();
        if let Some(section) = self.section.take() {
            self.sections.push(section);
        }
    }

    fn line(mut self, raw: &str) -> Self {
        let line = raw.trim();

        if let Some(title) = line.strip_prefix(SECTION_MARKER) {
            self.flush_section();
            self.section = Some(Section {
                title: title.to_string(),
                subsections: Vec::new(),
            });
        } else if let Some(subtitle) = line.strip_prefix(SUBSECTION_MARKER) {
            self.flush_subsection();
            self.subsection = Some(Subsection {
                subtitle: subtitle.to_string(),
                items: Vec::new(),
            });
        } else if let Some(m) = QUESTION_RE.find(line) {
            self.flush_item();
            let rest = &line[m.end()..];
            self.question = rest.strip_suffix(BOLD).unwrap_or(rest).trim().to_string();
        } else if let Some(first) = line.strip_prefix(ANSWER_LABEL) {
            self.in_answer = true;
            self.answer = first.trim().to_string();
        } else if self.in_answer
            && !line.is_empty()
            && !line.starts_with('#')
            && !NUMBERED_RE.is_match(line)
        {
            if !self.answer.is_empty() {
                self.answer.push('\n');
            }
            self.answer.push_str(line);
        }

        self
    }

    fn finish(mut self) -> QaDocument {
        self.flush_section();
        QaDocument {
            sections: self.sections,
        }
    }
}

/// Parse a Q&A markdown document into sections, subsections and items.
///
/// The format is line based:
///
/// ```text
/// ## Section
/// ### Subsection
/// 1. **Question?**
/// **Answer:** First line.
/// More answer text.
/// ```
///
/// Incomplete question/answer pairs and content outside a subsection are dropped.
/// Never fails; garbage input yields an empty document.
pub fn parse(content: &str) -> QaDocument {
    content
        .lines()
        .fold(ParseState::default(), ParseState::line)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "## Topic A\n### Sub 1\n1. **Question one?**\n**Answer:** First line.\nSecond line.\n";

    fn item(question: &str, answer: &str) -> QaItem {
        QaItem {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_reference_document() {
        let doc = parse(REFERENCE);
        assert_eq!(
            doc,
            QaDocument {
                sections: vec![Section {
                    title: "Topic A".to_string(),
                    subsections: vec![Subsection {
                        subtitle: "Sub 1".to_string(),
                        items: vec![item("Question one?", "First line.\nSecond line.")],
                    }],
                }],
            }
        );
    }

    #[test]
    fn test_question_without_answer_is_dropped() {
        let doc = parse("## A\n### B\n1. **Lonely question?**\n\nSome prose.\n");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].subsections.len(), 1);
        assert!(doc.sections[0].subsections[0].items.is_empty());
    }

    #[test]
    fn test_answer_without_question_is_dropped() {
        let doc = parse("## A\n### B\n**Answer:** Nobody asked.\n");
        assert_eq!(doc.item_count(), 0);
    }

    #[test]
    fn test_multiple_items_sections_and_order() {
        let content = "\
# Q&A

## DevTools
### Basics
1. **What is DevTools?**
**Answer:** A set of tools.

2. **How do I open it?**
**Answer:** Press F12.
### Advanced
1. **Logpoints?**
**Answer:** Logs without code changes.

## AI
### Console
1. **What are Console Insights?**
**Answer:** AI explanations
for console errors.
";
        let doc = parse(content);
        let titles: Vec<&str> = doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["DevTools", "AI"]);

        let devtools = &doc.sections[0];
        assert_eq!(devtools.subsections.len(), 2);
        assert_eq!(
            devtools.subsections[0].items,
            vec![
                item("What is DevTools?", "A set of tools."),
                item("How do I open it?", "Press F12."),
            ]
        );
        assert_eq!(devtools.subsections[1].subtitle, "Advanced");
        assert_eq!(
            doc.sections[1].subsections[0].items,
            vec![item(
                "What are Console Insights?",
                "AI explanations\nfor console errors."
            )]
        );
    }

    #[test]
    fn test_empty_sections_are_recorded() {
        let doc = parse("## Empty\n## Also empty\n### Nothing here\n");
        assert_eq!(doc.sections.len(), 2);
        assert!(doc.sections[0].subsections.is_empty());
        assert_eq!(doc.sections[1].subsections.len(), 1);
        assert!(!doc.has_results());
    }

    #[test]
    fn test_subsection_without_section_is_discarded() {
        let doc = parse("### Orphan\n1. **Q?**\n**Answer:** A.\n## Real\n");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Real");
        assert!(doc.sections[0].subsections.is_empty());
    }

    #[test]
    fn test_answer_skips_headings_and_numbered_lines() {
        let content = "## S\n### T\n1. **Q?**\n**Answer:** One.\n#### Aside\n3. plain numbered\nTwo.\n";
        let doc = parse(content);
        // Unrelated headings and numbered lines are skipped, the answer continues
        assert_eq!(
            doc.sections[0].subsections[0].items,
            vec![item("Q?", "One.\nTwo.")]
        );
    }

    #[test]
    fn test_question_markers_are_stripped() {
        let doc = parse("## S\n### T\n12.   **  Spaced question?  **\n**Answer:**   padded  \n");
        assert_eq!(
            doc.sections[0].subsections[0].items,
            vec![item("Spaced question?", "padded")]
        );
    }

    #[test]
    fn test_indented_lines_and_crlf() {
        let doc = parse("  ## S\r\n  ### T\r\n  1. **Q?**\r\n  **Answer:** A.\r\n");
        assert_eq!(doc.sections[0].subsections[0].items, vec![item("Q?", "A.")]);
    }

    #[test]
    fn test_empty_answer_label_takes_following_lines() {
        let doc = parse("## S\n### T\n1. **Q?**\n**Answer:**\nOn the next line.\n");
        assert_eq!(
            doc.sections[0].subsections[0].items,
            vec![item("Q?", "On the next line.")]
        );
    }

    #[test]
    fn test_garbage_input() {
        assert!(parse("").is_empty());
        assert!(parse("just\nsome\ntext\n**Answer:** x").is_empty());
        assert!(parse("\u{0}\u{1}##").is_empty());
    }

    #[test]
    fn test_filter_matches_case_insensitively() {
        let doc = parse(REFERENCE);
        let filtered = doc.filter("ONE");
        assert_eq!(filtered.item_count(), 1);
        let filtered = doc.filter("second LINE");
        assert_eq!(filtered.item_count(), 1);
    }

    #[test]
    fn test_filter_without_match_keeps_shape() {
        let doc = parse(REFERENCE);
        let filtered = doc.filter("zzz");
        assert_eq!(filtered.sections.len(), 1);
        assert_eq!(filtered.sections[0].title, "Topic A");
        assert_eq!(filtered.sections[0].subsections.len(), 1);
        assert_eq!(filtered.sections[0].subsections[0].subtitle, "Sub 1");
        assert!(filtered.sections[0].subsections[0].items.is_empty());
        assert!(!filtered.has_results());
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let doc = parse(REFERENCE);
        assert_eq!(doc.filter(""), doc);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let content = "## A\n### B\n1. **Q1?**\n**Answer:** A1\n2. **Q2?**\n**Answer:** A2\n";
        assert_eq!(parse(content), parse(content));
    }
}
