pub mod features;
pub mod mode;
pub mod qa_page;
pub mod registry;
pub mod slides;
pub mod text;

use eframe::egui::{self, RichText};

use crate::deck::{FeatureKey, Renderable, SlideDescriptor};
use crate::effects::TimedEffect;
use crate::theme::Theme;

use registry::FeatureRegistry;

/// What a slide asks the app to do after it has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    None,
    OpenPreview(FeatureKey),
    OpenQa,
}

/// Interactive state owned by the slide on screen. Replaced on every slide
/// change, which also cancels any running effect.
#[derive(Debug, Default)]
pub struct DemoState {
    pub selected_location: Option<usize>,
    pub logpoint_total: Option<i32>,
    /// Layout of the "Break on" demo list: a row when set, a column otherwise.
    pub movies_in_row: bool,
    pub copied_snippet: TimedEffect<usize>,
}

/// Render a single slide by its renderable variant.
pub fn render_slide(
    ui: &mut egui::Ui,
    slide: &SlideDescriptor,
    theme: &Theme,
    registry: &FeatureRegistry,
    demo: &mut DemoState,
) -> SlideAction {
    match slide.renderable {
        Renderable::Intro => slides::intro(ui, theme),
        Renderable::Topics => slides::topics(ui, theme),
        Renderable::GeolocationIntro => slides::geolocation_intro(ui, theme),
        Renderable::SensorsPanel => slides::sensors_panel(ui, theme),
        Renderable::LocationSettings => slides::location_settings(ui, theme),
        Renderable::GeolocationDemo => slides::geolocation_demo(ui, theme, demo),
        Renderable::AutoClosingDebug => slides::auto_closing_debug(ui, theme),
        Renderable::Feature(key) => render_feature(ui, key, theme, registry, demo),
        Renderable::Snippets => slides::snippets(ui, theme, demo),
        Renderable::McpDeployment => slides::mcp_deployment(ui, theme),
        Renderable::QaInvite => slides::qa_invite(ui, theme),
    }
}

/// Shared headline for table-driven slides, then the registered body.
/// Clicking the headline asks for the feature preview.
fn render_feature(
    ui: &mut egui::Ui,
    key: FeatureKey,
    theme: &Theme,
    registry: &FeatureRegistry,
    demo: &mut DemoState,
) -> SlideAction {
    let mut action = SlideAction::None;
    let Some(feature) = key.feature() else {
        tracing::warn!(?key, "feature slide has no table entry");
        return action;
    };

    let (group, tagline) = key.group_heading();
    ui.label(
        RichText::new(group)
            .size(theme.body_size)
            .strong()
            .color(theme.accent),
    );
    text::note(ui, theme, tagline);
    ui.add_space(theme.small_size);
    let headline = egui::Label::new(
        RichText::new(text::numbered_title(feature.id, feature.title))
            .size(theme.heading_size)
            .strong()
            .color(theme.heading_color),
    )
    .sense(egui::Sense::click());
    if ui
        .add(headline)
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
    {
        action = SlideAction::OpenPreview(key);
    }
    text::paragraph(ui, theme, feature.description);
    ui.add_space(theme.body_size);

    if !registry.contains(key) {
        tracing::trace!(?key, "no dedicated strategy, showing description only");
    }
    let body = registry.resolve(key)(ui, theme, demo);
    if body != SlideAction::None {
        action = body;
    }
    action
}

/// Contents of the feature preview overlay.
pub fn render_preview(ui: &mut egui::Ui, key: FeatureKey, theme: &Theme) {
    let Some(feature) = key.feature() else {
        return;
    };
    ui.label(
        RichText::new(text::numbered_title(feature.id, feature.title))
            .size(theme.heading_size)
            .strong()
            .color(theme.heading_color),
    );
    ui.add_space(theme.small_size);
    text::paragraph(ui, theme, feature.description);
    ui.add_space(theme.small_size);
    text::note(ui, theme, "Press Escape or click outside to close");
}
