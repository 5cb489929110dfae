use crate::theme::Theme;
use eframe::egui::{self, RichText};

/// Slide header: big title plus a muted one-line subtitle.
pub fn slide_header(ui: &mut egui::Ui, theme: &Theme, title: &str, subtitle: &str) {
    ui.label(
        RichText::new(title)
            .size(theme.heading_size)
            .strong()
            .color(theme.heading_color),
    );
    if !subtitle.is_empty() {
        ui.label(
            RichText::new(subtitle)
                .size(theme.body_size)
                .color(theme.muted),
        );
    }
    ui.add_space(theme.body_size);
}

pub fn heading(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.add_space(theme.small_size * 0.5);
    ui.label(
        RichText::new(text)
            .size(theme.body_size * 1.2)
            .strong()
            .color(theme.heading_color),
    );
}

pub fn paragraph(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(RichText::new(text).size(theme.body_size).color(theme.foreground));
}

/// Outcome of a demo action, in the theme's success color.
pub fn success(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(
        RichText::new(text)
            .size(theme.body_size)
            .strong()
            .color(theme.success),
    );
}

pub fn note(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(
        RichText::new(text)
            .size(theme.small_size)
            .italics()
            .color(theme.muted),
    );
}

pub fn bullets(ui: &mut egui::Ui, theme: &Theme, items: &[&str]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("\u{2022}").size(theme.body_size).color(theme.accent));
            ui.label(RichText::new(*item).size(theme.body_size).color(theme.foreground));
        });
    }
}

pub fn numbered(ui: &mut egui::Ui, theme: &Theme, items: &[&str]) {
    for (i, item) in items.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new(format!("{}.", i + 1))
                    .size(theme.body_size)
                    .strong()
                    .color(theme.accent),
            );
            ui.label(RichText::new(*item).size(theme.body_size).color(theme.foreground));
        });
    }
}

pub fn card<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(theme.card_background)
        .stroke(egui::Stroke::new(1.0, Theme::with_opacity(theme.muted, 0.3)))
        .corner_radius(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub fn code_block(ui: &mut egui::Ui, theme: &Theme, code: &str) {
    egui::Frame::new()
        .fill(theme.code_background)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(code)
                    .monospace()
                    .size(theme.small_size)
                    .color(theme.code_foreground),
            );
        });
}

/// A zero-padded "01: Title" headline, as shown on feature slides.
pub fn numbered_title(id: u32, title: &str) -> String {
    format!("{id:02}: {title}")
}
