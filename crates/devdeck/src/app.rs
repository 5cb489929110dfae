use eframe::egui;
use std::path::PathBuf;

use crate::config::{Config, StartMode};
use crate::controller::{KeyAction, KeyInput, SlideController};
use crate::deck::{self, FeatureKey};
use crate::render::mode::PresentationMode;
use crate::render::qa_page::{QaView, QaViewAction};
use crate::render::registry::FeatureRegistry;
use crate::render::{self, DemoState, SlideAction};
use crate::storage::{self, KeyValueStore};
use crate::theme::Theme;

const WINDOW_TITLE: &str = "devdeck: Chrome DevTools at DevFest";

/// Keys the controller interprets, in the order they are fed to it.
const NAV_KEYS: [(egui::Key, KeyInput); 4] = [
    (egui::Key::ArrowRight, KeyInput::ArrowRight),
    (egui::Key::ArrowLeft, KeyInput::ArrowLeft),
    (egui::Key::Space, KeyInput::Space),
    (egui::Key::Escape, KeyInput::Escape),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Presentation,
    Qa,
}

/// Options from the command line for launching the presenter.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub windowed: bool,
    /// 1-indexed
    pub slide: Option<usize>,
    pub qa_path: Option<PathBuf>,
    pub fresh: bool,
}

struct DeckApp {
    controller: SlideController<Box<dyn KeyValueStore>>,
    theme: Theme,
    registry: FeatureRegistry,
    demo: DemoState,
    /// Index the demo state belongs to
    demo_index: usize,
    route: Route,
    mode: Option<PresentationMode>,
    preview: Option<FeatureKey>,
    qa: Option<QaView>,
    qa_path: PathBuf,
}

impl DeckApp {
    fn new(
        controller: SlideController<Box<dyn KeyValueStore>>,
        theme: Theme,
        qa_path: PathBuf,
    ) -> Self {
        let demo_index = controller.current_index();
        let registry = FeatureRegistry::builtin();
        tracing::debug!(strategies = registry.len(), "feature registry ready");
        Self {
            controller,
            theme,
            registry,
            demo: DemoState::default(),
            demo_index,
            route: Route::Presentation,
            mode: None,
            preview: None,
            qa: None,
            qa_path,
        }
    }

    fn apply(&mut self, action: SlideAction) {
        match action {
            SlideAction::None => {}
            SlideAction::OpenPreview(key) => {
                tracing::debug!(?key, "opening feature preview");
                self.preview = Some(key);
                self.controller.open_overlay();
            }
            SlideAction::OpenQa => self.open_qa(),
        }
    }

    fn close_preview(&mut self) {
        self.preview = None;
        self.controller.dismiss_overlay();
    }

    fn open_qa(&mut self) {
        self.mode = None;
        self.qa = Some(QaView::open(self.qa_path.clone()));
        self.route = Route::Qa;
    }

    fn close_qa(&mut self) {
        // Dropping the view stops its watcher and abandons any pending load
        self.qa = None;
        self.route = Route::Presentation;
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.mode = None;
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
        tracing::debug!(theme = %self.theme.name, "toggled theme");
    }

    /// A new slide gets fresh demo state, which also cancels pending effects.
    fn sync_demo(&mut self) {
        let current = self.controller.current_index();
        if current != self.demo_index {
            self.demo = DemoState::default();
            self.demo_index = current;
        }
    }

    /// Keep the presentation guard matched to the current slide kind.
    fn sync_mode(&mut self, ctx: &egui::Context) {
        let kind = self.controller.current_slide().map(|s| s.kind);
        if self.mode.as_ref().map(|m| m.kind()) == kind {
            return;
        }
        // Release the old guard first so the new snapshot is the base style
        self.mode = None;
        self.mode = kind.map(|k| PresentationMode::enter(ctx, k, &self.theme));
    }

    fn handle_keys(&mut self, ctx: &egui::Context) -> Vec<egui::ViewportCommand> {
        let mut viewport_cmds = Vec::new();
        let pressed: Vec<(egui::Key, KeyInput)> = ctx.input(|i| {
            NAV_KEYS
                .iter()
                .copied()
                .filter(|(key, _)| i.key_pressed(*key))
                .collect()
        });

        for (key, input) in pressed {
            let response = self.controller.handle_key(input);
            if response.prevent_default {
                ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key));
            }
            match response.action {
                KeyAction::OverlayDismissed => self.preview = None,
                KeyAction::Navigated(index) => tracing::trace!(index, "navigated"),
                KeyAction::Swallowed | KeyAction::Ignored => {}
            }
        }

        if self.controller.overlay_open() {
            // Nothing underneath the overlay may react to the keyboard
            ctx.input_mut(|i| {
                i.events.retain(|e| !matches!(e, egui::Event::Key { .. }));
            });
            return viewport_cmds;
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
            }
        });
        if ctx.input(|i| i.key_pressed(egui::Key::D)) {
            self.toggle_theme(ctx);
        }
        viewport_cmds
    }

    fn draw_navigation(&mut self, ctx: &egui::Context) {
        let nav = self.controller.navigation();
        let mut target = None;
        egui::TopBottomPanel::bottom("navigation")
            .frame(egui::Frame::new().fill(self.theme.card_background).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(nav.can_go_previous, egui::Button::new("\u{2190} Previous"))
                        .clicked()
                    {
                        target = Some(nav.current_index.saturating_sub(1));
                    }
                    for (i, slide) in self.controller.slides().iter().enumerate() {
                        let indicator = egui::Button::new(format!("{}", i + 1))
                            .selected(i == nav.current_index)
                            .small();
                        if ui.add(indicator).on_hover_text(&slide.title).clicked() {
                            target = Some(i);
                        }
                    }
                    if ui
                        .add_enabled(nav.can_go_next, egui::Button::new("Next \u{2192}"))
                        .clicked()
                    {
                        target = Some(nav.current_index + 1);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(nav.counter())
                                .monospace()
                                .color(self.theme.muted),
                        );
                    });
                });
            });
        if let Some(index) = target {
            self.controller.go_to(index);
        }
    }

    fn draw_presentation(&mut self, ctx: &egui::Context) {
        self.draw_navigation(ctx);
        self.sync_demo();
        self.sync_mode(ctx);

        let Some(slide) = self.controller.current_slide() else {
            return;
        };
        let centered = self.mode.as_ref().is_some_and(|m| m.centered());
        let mut action = SlideAction::None;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(48.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt(slide.id)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let mut draw = |ui: &mut egui::Ui| {
                            render::render_slide(ui, slide, &self.theme, &self.registry, &mut self.demo)
                        };
                        action = if centered {
                            ui.vertical_centered(draw).inner
                        } else {
                            draw(ui)
                        };
                    });
            });
        self.apply(action);

        if let Some(key) = self.preview {
            let modal = egui::Modal::new(egui::Id::new("feature_preview")).show(ctx, |ui| {
                ui.set_max_width(900.0);
                render::render_preview(ui, key, &self.theme);
            });
            if modal.should_close() {
                self.close_preview();
            }
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.route {
            Route::Presentation => {
                let viewport_cmds = self.handle_keys(ctx);
                self.draw_presentation(ctx);
                for cmd in viewport_cmds {
                    ctx.send_viewport_cmd(cmd);
                }
            }
            Route::Qa => {
                let action = match self.qa.as_mut() {
                    Some(view) => view.show(ctx, &self.theme),
                    None => QaViewAction::Back,
                };
                if action == QaViewAction::Back {
                    self.close_qa();
                }
            }
        }
    }
}

/// Where the presenter opens. `None` keeps the restored index.
fn initial_index(options: &LaunchOptions, start_mode: StartMode, total: usize) -> Option<usize> {
    let last = total.checked_sub(1)?;
    if let Some(slide) = options.slide {
        return Some(slide.saturating_sub(1).min(last));
    }
    if options.fresh {
        return Some(0);
    }
    match start_mode {
        StartMode::Resume => None,
        StartMode::First => Some(0),
        StartMode::Slide(index) => Some(index.min(last)),
    }
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let theme = Theme::from_name(config.theme());
    let qa_path = options.qa_path.clone().unwrap_or_else(|| config.qa_path());

    let mut controller = SlideController::restore(deck::assemble(), storage::open_default());
    if let Some(index) = initial_index(&options, config.start_mode(), controller.total()) {
        controller.go_to(index);
    }
    tracing::info!(
        slide = controller.current_index() + 1,
        total = controller.total(),
        qa = %qa_path.display(),
        "starting presenter"
    );

    let viewport = if options.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(WINDOW_TITLE)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(WINDOW_TITLE)
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(theme.visuals());
            Ok(Box::new(DeckApp::new(controller, theme, qa_path)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn app() -> DeckApp {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::default());
        let controller = SlideController::restore(deck::assemble(), store);
        DeckApp::new(controller, Theme::light(), PathBuf::from("missing.md"))
    }

    #[test]
    fn test_initial_index_precedence() {
        let flag = LaunchOptions {
            slide: Some(3),
            fresh: true,
            ..Default::default()
        };
        assert_eq!(initial_index(&flag, StartMode::First, 10), Some(2));

        let fresh = LaunchOptions {
            fresh: true,
            ..Default::default()
        };
        assert_eq!(initial_index(&fresh, StartMode::Slide(5), 10), Some(0));

        let plain = LaunchOptions::default();
        assert_eq!(initial_index(&plain, StartMode::Resume, 10), None);
        assert_eq!(initial_index(&plain, StartMode::Slide(50), 10), Some(9));
    }

    #[test]
    fn test_initial_index_clamps_flag() {
        let options = LaunchOptions {
            slide: Some(99),
            ..Default::default()
        };
        assert_eq!(initial_index(&options, StartMode::Resume, 21), Some(20));
        assert_eq!(initial_index(&options, StartMode::Resume, 0), None);
    }

    #[test]
    fn test_preview_engages_overlay_gate() {
        let mut app = app();
        app.apply(SlideAction::OpenPreview(FeatureKey::Superpower(2)));
        assert!(app.controller.overlay_open());
        assert_eq!(app.controller.next(), 0);

        app.close_preview();
        assert!(app.preview.is_none());
        assert_eq!(app.controller.next(), 1);
    }

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// One frame of `handle_keys` with the given key presses. Also reports
    /// which of those keys egui widgets would still see afterwards.
    fn press(
        app: &mut DeckApp,
        ctx: &egui::Context,
        keys: &[egui::Key],
    ) -> (Vec<egui::ViewportCommand>, Vec<egui::Key>) {
        let input = egui::RawInput {
            events: keys.iter().copied().map(key).collect(),
            ..Default::default()
        };
        let mut cmds = Vec::new();
        let mut leftover = Vec::new();
        let _ = ctx.run(input, |ctx| {
            cmds = app.handle_keys(ctx);
            leftover = keys
                .iter()
                .copied()
                .filter(|k| ctx.input(|i| i.key_pressed(*k)))
                .collect();
        });
        (cmds, leftover)
    }

    #[test]
    fn test_arrow_key_navigates_and_is_consumed() {
        let ctx = egui::Context::default();
        let mut app = app();

        let (cmds, leftover) = press(&mut app, &ctx, &[egui::Key::ArrowRight]);
        assert_eq!(app.controller.current_index(), 1);
        assert!(cmds.is_empty());
        assert!(leftover.is_empty());
    }

    #[test]
    fn test_open_preview_blocks_keys_until_escape() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.apply(SlideAction::OpenPreview(FeatureKey::Superpower(2)));

        let (cmds, leftover) = press(
            &mut app,
            &ctx,
            &[egui::Key::D, egui::Key::ArrowRight, egui::Key::Q],
        );
        assert_eq!(app.controller.current_index(), 0);
        assert_eq!(app.theme.name, "light");
        assert!(cmds.is_empty());
        assert!(leftover.is_empty());
        assert!(app.preview.is_some());

        let (_, leftover) = press(&mut app, &ctx, &[egui::Key::Escape]);
        assert!(app.preview.is_none());
        assert!(!app.controller.overlay_open());
        assert!(leftover.is_empty());
        assert_eq!(app.controller.current_index(), 0);
    }

    #[test]
    fn test_theme_and_quit_keys_without_overlay() {
        let ctx = egui::Context::default();
        let mut app = app();

        let (cmds, _) = press(&mut app, &ctx, &[egui::Key::D]);
        assert_eq!(app.theme.name, "dark");
        assert!(cmds.is_empty());

        let (cmds, _) = press(&mut app, &ctx, &[egui::Key::Q]);
        assert_eq!(cmds, vec![egui::ViewportCommand::Close]);
        assert_eq!(app.controller.current_index(), 0);
    }

    #[test]
    fn test_demo_state_resets_on_slide_change() {
        let mut app = app();
        app.demo.logpoint_total = Some(15);
        app.sync_demo();
        assert_eq!(app.demo.logpoint_total, Some(15));

        app.controller.next();
        app.sync_demo();
        assert!(app.demo.logpoint_total.is_none());
    }

    #[test]
    fn test_qa_route_round_trip() {
        let mut app = app();
        app.apply(SlideAction::OpenQa);
        assert_eq!(app.route, Route::Qa);
        assert!(app.qa.is_some());

        app.close_qa();
        assert_eq!(app.route, Route::Presentation);
        assert!(app.qa.is_none());
    }

    #[test]
    fn test_mode_follows_slide_kind() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.sync_mode(&ctx);
        assert_eq!(app.mode.as_ref().map(|m| m.kind()), Some(deck::SlideKind::Intro));

        app.controller.go_to(2);
        app.sync_mode(&ctx);
        assert_eq!(app.mode.as_ref().map(|m| m.kind()), Some(deck::SlideKind::Content));
    }
}
