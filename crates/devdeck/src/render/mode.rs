use std::sync::Arc;

use eframe::egui;

use crate::deck::SlideKind;
use crate::theme::Theme;

/// Presentation styling for one slide kind, held for as long as the guard lives.
///
/// Entering snapshots the context style; dropping the guard puts the snapshot
/// back. Switching kinds means dropping the old guard before entering a new one.
pub struct PresentationMode {
    ctx: egui::Context,
    kind: SlideKind,
    previous: Arc<egui::Style>,
}

impl PresentationMode {
    pub fn enter(ctx: &egui::Context, kind: SlideKind, theme: &Theme) -> Self {
        let previous = ctx.style();
        let mut style = (*previous).clone();
        style.visuals = theme.visuals();
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.item_spacing = match kind {
            SlideKind::Intro | SlideKind::Topics => egui::vec2(12.0, 14.0),
            SlideKind::Content => egui::vec2(10.0, 8.0),
        };
        style.interaction.selectable_labels = false;
        ctx.set_style(style);
        tracing::trace!(kind = kind.name(), "entered presentation mode");
        Self {
            ctx: ctx.clone(),
            kind,
            previous,
        }
    }

    pub fn kind(&self) -> SlideKind {
        self.kind
    }

    /// Intro and topics slides are laid out centered.
    pub fn centered(&self) -> bool {
        matches!(self.kind, SlideKind::Intro | SlideKind::Topics)
    }
}

impl Drop for PresentationMode {
    fn drop(&mut self) {
        self.ctx.set_style(self.previous.clone());
        tracing::trace!(kind = self.kind.name(), "left presentation mode");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_restores_style() {
        let ctx = egui::Context::default();
        let before = ctx.style().spacing.item_spacing;

        let mode = PresentationMode::enter(&ctx, SlideKind::Intro, &Theme::dark());
        assert_eq!(ctx.style().spacing.item_spacing, egui::vec2(12.0, 14.0));
        assert_eq!(mode.kind(), SlideKind::Intro);
        assert!(mode.centered());
        drop(mode);

        assert_eq!(ctx.style().spacing.item_spacing, before);
    }

    #[test]
    fn test_reenter_on_kind_change() {
        let ctx = egui::Context::default();
        let before = ctx.style().spacing.item_spacing;

        let mut mode = Some(PresentationMode::enter(&ctx, SlideKind::Topics, &Theme::light()));
        // Release before re-entering so the snapshot is the unstyled one
        mode.take();
        mode = Some(PresentationMode::enter(&ctx, SlideKind::Content, &Theme::light()));
        assert_eq!(ctx.style().spacing.item_spacing, egui::vec2(10.0, 8.0));
        assert!(!mode.as_ref().is_some_and(|m| m.centered()));

        mode.take();
        assert_eq!(ctx.style().spacing.item_spacing, before);
    }
}
