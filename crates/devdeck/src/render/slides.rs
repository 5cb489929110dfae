//! The hand-written slides that are not driven by the feature tables.

use std::time::Duration;

use eframe::egui::{self, RichText};

use super::text::{bullets, card, code_block, heading, note, numbered, paragraph, slide_header};
use super::{DemoState, SlideAction};
use crate::deck::content::{EVENT, LOCATION_PRESETS, MCP_CODELAB_URL, QA_CONTACT_URL, SNIPPETS, TOPICS};
use crate::theme::Theme;

const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

pub fn intro(ui: &mut egui::Ui, theme: &Theme) -> SlideAction {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(EVENT.event)
                .size(theme.title_size)
                .strong()
                .color(theme.heading_color),
        );
        ui.add_space(theme.body_size);
        card(ui, theme, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(EVENT.speaker)
                        .size(theme.heading_size)
                        .color(theme.foreground),
                );
                ui.label(RichText::new(EVENT.role).size(theme.body_size).color(theme.muted));
                ui.add_space(theme.body_size);
                heading(ui, theme, "\u{1F3AF} Topic");
                paragraph(ui, theme, EVENT.topic);
                ui.add_space(theme.body_size);
                note(ui, theme, &format!("\u{1F4C5} {}", EVENT.date));
                note(ui, theme, &format!("\u{1F4CD} {}", EVENT.venue));
            });
        });
    });
    SlideAction::None
}

pub fn topics(ui: &mut egui::Ui, theme: &Theme) -> SlideAction {
    ui.vertical_centered(|ui| {
        slide_header(
            ui,
            theme,
            "\u{1F4CB} What We'll Cover Today",
            "Overview of today's presentation topics",
        );
    });
    for (i, topic) in TOPICS.iter().enumerate() {
        card(ui, theme, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(format!("{:02}", i + 1))
                        .size(theme.heading_size)
                        .strong()
                        .color(theme.accent),
                );
                ui.label(RichText::new(*topic).size(theme.body_size * 1.1));
            });
        });
        ui.add_space(theme.small_size * 0.5);
    }
    SlideAction::None
}

pub fn geolocation_intro(ui: &mut egui::Ui, theme: &Theme) -> SlideAction {
    slide_header(
        ui,
        theme,
        "01: \u{1F30D} What is Geolocation Testing?",
        "Learn how to test geolocation functionality using Chrome DevTools",
    );
    paragraph(
        ui,
        theme,
        "Geolocation testing allows developers to simulate different geographic locations \
         without physically moving. This is crucial for testing location-based features, \
         timezone handling, and region-specific functionality in web applications.",
    );
    ui.add_space(theme.body_size);
    card(ui, theme, |ui| {
        heading(ui, theme, "\u{1F6E0} Chrome DevTools: Your Testing Companion");
        paragraph(
            ui,
            theme,
            "Chrome DevTools provides built-in tools for geolocation testing through the \
             Sensors panel. You can simulate any location worldwide and test how your \
             application responds to different geographic contexts.",
        );
    });
    SlideAction::None
}

pub fn sensors_panel(ui: &mut egui::Ui, theme: &Theme) -> SlideAction {
    slide_header(
        ui,
        theme,
        "The Sensors Panel",
        "Override geolocation, orientation and touch input",
    );
    paragraph(
        ui,
        theme,
        "The Sensors panel is where the magic happens! Here you can override your location \
         and test location-aware behavior.",
    );
    heading(ui, theme, "How to Use the Sensors Panel:");
    numbered(
        ui,
        theme,
        &[
            "Open the Command Menu (Cmd/Ctrl+Shift+P) and run \"Show Sensors\"",
            "Select a preset from the dropdown (or \"No override\" for the real location)",
            "Or manually enter latitude, longitude, timezone, and locale",
            "Set accuracy (default is 150 meters)",
            "Reload the page: your app now receives the simulated location",
        ],
    );
    SlideAction::None
}

pub fn location_settings(ui: &mut egui::Ui, theme: &Theme) -> SlideAction {
    slide_header(
        ui,
        theme,
        "Custom Location Settings",
        "Save your own presets for quick switching",
    );
    paragraph(
        ui,
        theme,
        "Before testing, you can create custom location presets in Chrome DevTools Settings. \
         This makes it easy to quickly switch between locations during testing.",
    );
    heading(ui, theme, "How to Add Custom Locations:");
    numbered(
        ui,
        theme,
        &[
            "Open DevTools Settings (F1)",
            "Select the Locations tab",
            "Click \"Add location\"",
            "Enter a name, latitude, longitude, timezone ID and locale",
            "Save; the preset now appears in the Sensors panel",
        ],
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "\u{1F4A1} Pro Tip:");
        paragraph(
            ui,
            theme,
            "To get accurate coordinates, right-click on any city in Google Maps and copy the \
             latitude and longitude.",
        );
    });
    SlideAction::None
}

pub fn geolocation_demo(ui: &mut egui::Ui, theme: &Theme, demo: &mut DemoState) -> SlideAction {
    slide_header(
        ui,
        theme,
        "Geolocation Demo",
        "Pick an override and watch the reported position change",
    );
    ui.horizontal_wrapped(|ui| {
        for (i, preset) in LOCATION_PRESETS.iter().enumerate() {
            let selected = demo.selected_location == Some(i);
            let button = egui::Button::new(RichText::new(preset.name).size(theme.body_size))
                .selected(selected);
            if ui.add(button).clicked() {
                tracing::debug!(location = preset.name, "location override selected");
                demo.selected_location = Some(i);
            }
        }
        if ui
            .button(RichText::new("No override").size(theme.body_size))
            .clicked()
        {
            demo.selected_location = None;
        }
    });
    ui.add_space(theme.body_size);

    card(ui, theme, |ui| {
        heading(ui, theme, "\u{1F4CD} Current Position");
        match demo.selected_location.and_then(|i| LOCATION_PRESETS.get(i)) {
            Some(preset) => {
                egui::Grid::new("current_position")
                    .num_columns(2)
                    .spacing([theme.body_size, theme.small_size * 0.5])
                    .show(ui, |ui| {
                        let rows = [
                            ("City", preset.name.to_string()),
                            ("Latitude", format!("{:.6}", preset.latitude)),
                            ("Longitude", format!("{:.6}", preset.longitude)),
                            ("Timezone", preset.timezone.to_string()),
                            ("Locale", preset.locale.to_string()),
                        ];
                        for (label, value) in rows {
                            ui.label(RichText::new(label).size(theme.body_size).color(theme.muted));
                            ui.label(RichText::new(value).size(theme.body_size).monospace());
                            ui.end_row();
                        }
                    });
            }
            None => note(ui, theme, "No override active. The browser reports your real location."),
        }
    });
    SlideAction::None
}

pub fn auto_closing_debug(ui: &mut egui::Ui, theme: &Theme) -> SlideAction {
    slide_header(
        ui,
        theme,
        "02: Debug Auto-Closing Elements",
        "Keep dropdowns, tooltips and popovers open while you inspect them",
    );
    heading(ui, theme, "Quick playbook:");
    ui.columns(2, |columns| {
        card(&mut columns[0], theme, |ui| {
            heading(ui, theme, "Method 1: Emulate Focus Mode");
            numbered(
                ui,
                theme,
                &[
                    "Open the Command Menu (Cmd/Ctrl+Shift+P).",
                    "Type \u{201C}emulate focus\u{201D} \u{2192} select \u{201C}Emulate a focused page\u{201D}.",
                    "Now menus stay open when DevTools is focused.",
                ],
            );
        });
        card(&mut columns[1], theme, |ui| {
            heading(ui, theme, "Method 2: Pause Script Execution");
            numbered(
                ui,
                theme,
                &[
                    "Go to the Sources tab.",
                    "Trigger the UI (e.g., open the dropdown).",
                    "Press F8 or Cmd/Ctrl+\\ to pause; the element stays put.",
                ],
            );
        });
    });
    note(
        ui,
        theme,
        "Also try Event Listener Breakpoints \u{2192} enable mouseleave or blur.",
    );
    SlideAction::None
}

pub fn snippets(ui: &mut egui::Ui, theme: &Theme, demo: &mut DemoState) -> SlideAction {
    slide_header(
        ui,
        theme,
        "Snippets: Reusable JavaScript in DevTools",
        "Write, save, and run reusable scripts on any page",
    );
    bullets(
        ui,
        theme,
        &[
            "Save commonly used scripts and run them anytime on any webpage.",
            "Perfect for quick automation, testing ideas, or adding temporary UI helpers.",
            "They persist in the browser, so saved snippets stay available.",
        ],
    );
    ui.add_space(theme.small_size);

    let copied = demo.copied_snippet.current().copied();
    for (i, snippet) in SNIPPETS.iter().enumerate() {
        ui.horizontal(|ui| {
            heading(ui, theme, &format!("{}. {}", i + 1, snippet.title));
            let label = if copied == Some(i) {
                RichText::new("Copied!").color(theme.success)
            } else {
                RichText::new("Copy")
            };
            if ui.button(label).clicked() {
                ui.ctx().copy_text(snippet.code.to_string());
                demo.copied_snippet.start(i, COPIED_FEEDBACK);
            }
        });
        code_block(ui, theme, snippet.code);
        ui.add_space(theme.small_size * 0.5);
    }
    if let Some(remaining) = demo.copied_snippet.remaining_at(std::time::Instant::now()) {
        ui.ctx().request_repaint_after(remaining);
    }
    SlideAction::None
}

pub fn mcp_deployment(ui: &mut egui::Ui, theme: &Theme) -> SlideAction {
    slide_header(
        ui,
        theme,
        "05: \u{2601} Deploy a Secure MCP Server on Cloud Run",
        "Build and deploy a Model Context Protocol (MCP) server as a secure, production-ready service",
    );
    heading(ui, theme, "What is MCP?");
    paragraph(
        ui,
        theme,
        "Model Context Protocol (MCP) servers provide LLMs with access to external tools and \
         services. They enable AI assistants to interact with APIs, databases, and other resources.",
    );
    heading(ui, theme, "Key Benefits:");
    bullets(
        ui,
        theme,
        &[
            "Secure Deployment: production-ready service on Cloud Run with authentication",
            "Scalable: auto-scales based on demand",
            "Cost-Effective: pay only for what you use",
            "Easy Integration: connect from Gemini CLI or other MCP clients",
        ],
    );
    heading(ui, theme, "What You'll Learn:");
    numbered(
        ui,
        theme,
        &[
            "Build an MCP server using FastMCP",
            "Deploy to Cloud Run with security best practices",
            "Configure authentication for secure access",
            "Connect from Gemini CLI to your remote server",
        ],
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "\u{1F517} Resources:");
        ui.hyperlink_to(
            "Google Codelab: Deploy Secure MCP Server on Cloud Run",
            MCP_CODELAB_URL,
        );
    });
    SlideAction::None
}

pub fn qa_invite(ui: &mut egui::Ui, theme: &Theme) -> SlideAction {
    let mut action = SlideAction::None;
    ui.vertical_centered(|ui| {
        slide_header(
            ui,
            theme,
            "\u{2753} Questions & Answers",
            "Thank you for your attention! Let's discuss",
        );
        ui.label(
            RichText::new("Have questions?")
                .size(theme.heading_size)
                .color(theme.heading_color),
        );
        paragraph(
            ui,
            theme,
            "Feel free to ask anything about Chrome DevTools, AI features, or debugging techniques!",
        );
        ui.add_space(theme.body_size);
        if ui
            .button(
                RichText::new("\u{1F4CB} View All Q&A Questions & Answers")
                    .size(theme.body_size),
            )
            .clicked()
        {
            action = SlideAction::OpenQa;
        }
        ui.add_space(theme.body_size);
        ui.label(RichText::new("Connect with me:").strong());
        ui.hyperlink(QA_CONTACT_URL);
    });
    action
}
