//! The Q&A route: search, topic index and the nested question list.

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui::{self, RichText};

use super::text;
use crate::qa::source::{DocumentWatcher, LoadOutcome, PendingDocument};
use crate::qa::{self, QaDocument};
use crate::theme::Theme;

const POLL_INTERVAL: Duration = Duration::from_millis(200);
const SEARCH_ID: &str = "qa_search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QaViewAction {
    None,
    Back,
}

pub struct QaView {
    path: PathBuf,
    /// `None` until the first load completes.
    document: Option<QaDocument>,
    pending: Option<PendingDocument>,
    watcher: Option<DocumentWatcher>,
    search: String,
    scroll_to: Option<usize>,
}

impl QaView {
    /// Start loading `path` in the background and watch it for edits.
    pub fn open(path: PathBuf) -> Self {
        tracing::debug!(path = %path.display(), "opening Q&A view");
        let pending = PendingDocument::spawn(path.clone());
        let watcher = DocumentWatcher::new(&path);
        Self {
            path,
            document: None,
            pending: Some(pending),
            watcher,
            search: String::new(),
            scroll_to: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.document.is_none()
    }

    /// The document as currently filtered by the search box.
    pub fn visible(&self) -> Option<QaDocument> {
        self.document.as_ref().map(|doc| doc.filter(&self.search))
    }

    /// Pick up a finished load, and reload when the file changed on disk.
    /// The previous document stays on screen until the reload lands.
    pub fn poll(&mut self) {
        if self.watcher.as_ref().is_some_and(|w| w.changed()) {
            tracing::info!(path = %self.path.display(), "Q&A file changed, reloading");
            self.pending = Some(PendingDocument::spawn(self.path.clone()));
        }
        let Some(outcome) = self.pending.as_ref().and_then(|p| p.poll()) else {
            return;
        };
        self.pending = None;
        self.document = Some(match outcome {
            LoadOutcome::Loaded(content) => qa::parse(&content),
            LoadOutcome::Failed => QaDocument::default(),
        });
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> QaViewAction {
        self.poll();
        if self.is_loading() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        let mut action = QaViewAction::None;
        egui::TopBottomPanel::top("qa_header")
            .frame(egui::Frame::new().fill(theme.card_background).inner_margin(16.0))
            .show(ctx, |ui| {
                if ui
                    .link(RichText::new("\u{2190} Back to Presentation").size(theme.body_size))
                    .clicked()
                {
                    action = QaViewAction::Back;
                }
                ui.add_space(theme.small_size * 0.5);
                text::slide_header(
                    ui,
                    theme,
                    "Q&A: Potential Questions & Answers",
                    "DevFest 2025 Presentation - Chrome DevTools",
                );
            });

        if self.is_loading() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    text::paragraph(ui, theme, "Loading Q&A content...");
                });
            });
            return action;
        }

        let visible = egui::SidePanel::left("qa_toc")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| self.sidebar(ui, theme))
            .inner;

        let scroll_to = self.scroll_to.take();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_document(ui, theme, &visible, scroll_to);
                if visible.is_empty() {
                    text::note(ui, theme, "No Q&A content available.");
                } else if !visible.has_results() {
                    text::note(ui, theme, "No questions found matching your search.");
                }
            });
        });
        action
    }

    /// Search box and topic index. The filter is applied after the search box
    /// has taken this frame's input, so results never trail the typed text.
    fn sidebar(&mut self, ui: &mut egui::Ui, theme: &Theme) -> QaDocument {
        ui.add_space(theme.small_size);
        ui.add(
            egui::TextEdit::singleline(&mut self.search)
                .id(egui::Id::new(SEARCH_ID))
                .hint_text("Search questions...")
                .desired_width(f32::INFINITY),
        );
        let visible = self.visible().unwrap_or_default();
        ui.add_space(theme.small_size);
        text::heading(ui, theme, "Topics");
        for (i, section) in visible.sections.iter().enumerate() {
            if ui.link(&section.title).clicked() {
                self.scroll_to = Some(i);
            }
        }
        visible
    }
}

fn draw_document(ui: &mut egui::Ui, theme: &Theme, doc: &QaDocument, scroll_to: Option<usize>) {
    for (i, section) in doc.sections.iter().enumerate() {
        let title = ui.label(
            RichText::new(&section.title)
                .size(theme.heading_size)
                .strong()
                .color(theme.heading_color),
        );
        if scroll_to == Some(i) {
            title.scroll_to_me(Some(egui::Align::TOP));
        }
        for subsection in section.subsections.iter().filter(|s| !s.items.is_empty()) {
            text::heading(ui, theme, &subsection.subtitle);
            for item in &subsection.items {
                text::card(ui, theme, |ui| {
                    ui.label(
                        RichText::new(&item.question)
                            .size(theme.body_size)
                            .strong()
                            .color(theme.accent),
                    );
                    ui.add_space(theme.small_size * 0.5);
                    text::paragraph(ui, theme, &item.answer);
                });
                ui.add_space(theme.small_size * 0.5);
            }
        }
        ui.add_space(theme.body_size);
    }
}
