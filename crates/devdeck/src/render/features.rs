//! Bodies for the AI innovation and DevTools superpower slides.

use eframe::egui::{self, RichText};

use super::registry::FeatureRegistry;
use super::text::{bullets, card, heading, note, numbered, paragraph, success};
use super::{DemoState, SlideAction};
use crate::deck::FeatureKey;
use crate::theme::Theme;

pub fn register_builtin(registry: &mut FeatureRegistry) {
    registry
        .register(FeatureKey::AiInnovation(1), enable_ai_innovations)
        .register(FeatureKey::AiInnovation(2), console_insights)
        .register(FeatureKey::AiInnovation(3), ai_assistance)
        .register(FeatureKey::AiInnovation(4), auto_labels_performance)
        .register(FeatureKey::Superpower(1), css_shadow_editors)
        .register(FeatureKey::Superpower(2), logpoint)
        .register(FeatureKey::Superpower(3), coverage)
        .register(FeatureKey::Superpower(4), break_on_dom)
        .register(FeatureKey::Superpower(5), rendering_tab)
        .register(FeatureKey::Superpower(6), css_overview)
        .register(FeatureKey::Superpower(7), capture_node_screenshot);
}

/// Fallback for keys without a dedicated strategy: the shared headline already
/// shows the title and description, so there is nothing more to draw.
pub fn description_only(_ui: &mut egui::Ui, _theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    SlideAction::None
}

fn enable_ai_innovations(ui: &mut egui::Ui, theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "How to Enable AI Innovations:");
    numbered(
        ui,
        theme,
        &[
            "Open Chrome DevTools (F12 or Cmd/Ctrl+Shift+I)",
            "Click the Settings gear icon",
            "Go to the \"AI innovations\" tab",
            "Turn on Console Insights, AI assistance and Auto annotations",
        ],
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "AI Features Available:");
        bullets(
            ui,
            theme,
            &[
                "Console Insights: explanations for console errors",
                "AI assistance: chat about styles, network, sources and performance",
                "Auto annotations: labels for performance traces",
            ],
        );
    });
    SlideAction::None
}

fn console_insights(ui: &mut egui::Ui, theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "Console Insights: AI-powered error analysis");
    bullets(
        ui,
        theme,
        &[
            "Get context-aware explanations for error messages",
            "Receive recommendations for fixing common issues",
            "Smart error grouping and pattern detection",
        ],
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "Steps to use:");
        numbered(
            ui,
            theme,
            &[
                "Enable AI innovations in DevTools Settings",
                "Trigger an error on the page",
                "Open Console tab (F12 or Cmd/Ctrl+Shift+I)",
                "Look for AI insights icon next to errors",
                "Click the icon to see AI explanations",
            ],
        );
    });
    SlideAction::None
}

fn ai_assistance(ui: &mut egui::Ui, theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "AI Assistance for Style");
    card(ui, theme, |ui| {
        heading(ui, theme, "Steps to use:");
        numbered(
            ui,
            theme,
            &[
                "Go to the Elements tab in Chrome DevTools",
                "Right-click an element and choose \"Ask AI\"",
                "Write your prompt describing what you want to improve",
                "Review the suggested CSS and apply it in the Styles pane",
            ],
        );
    });
    SlideAction::None
}

fn auto_labels_performance(ui: &mut egui::Ui, theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    let blocks = [
        (
            "Automatic Annotation",
            "Performance traces are automatically labeled with descriptive names",
        ),
        (
            "Smart Grouping",
            "Related operations are grouped together with AI-generated categories",
        ),
        (
            "Performance Insights",
            "Get AI-powered recommendations for improving specific performance bottlenecks",
        ),
    ];
    ui.columns(blocks.len(), |columns| {
        for (column, (title, body)) in columns.iter_mut().zip(blocks) {
            card(column, theme, |ui| {
                heading(ui, theme, title);
                paragraph(ui, theme, body);
            });
        }
    });
    SlideAction::None
}

fn css_shadow_editors(ui: &mut egui::Ui, theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "Play with layered shadows");
    let button = egui::Button::new(RichText::new("Shadowed Button").size(theme.body_size))
        .fill(theme.card_background)
        .corner_radius(10.0);
    let response = ui.add(button);
    // Two layered shadows, drawn behind the button
    let painter = ui.painter();
    for (offset, alpha) in [(4.0, 0.25), (10.0, 0.12)] {
        painter.rect_stroke(
            response.rect.translate(egui::vec2(offset, offset)),
            10.0,
            egui::Stroke::new(2.0, Theme::with_opacity(theme.accent, alpha)),
            egui::StrokeKind::Outside,
        );
    }
    ui.add_space(theme.body_size);
    note(ui, theme, "Tip: Open DevTools \u{2192} Styles \u{2192} click the shadow swatch to edit");
    SlideAction::None
}

/// The loop a logpoint is set on during the demo.
pub fn run_logpoint_demo() -> i32 {
    let numbers = [1, 2, 3, 4, 5];
    let mut running_total = 0;
    for n in numbers {
        running_total += n;
    }
    running_total
}

fn logpoint(ui: &mut egui::Ui, theme: &Theme, demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "Logpoints: Console logs without code changes");
    paragraph(
        ui,
        theme,
        "Insert temporary logs directly from DevTools on any line. They print to the Console \
         at runtime without adding console.log() or pausing execution.",
    );
    bullets(
        ui,
        theme,
        &[
            "Right-click gutter \u{2192} Add logpoint\u{2026}",
            "Use variables in scope, e.g. `Total: ${runningTotal}`",
            "Make it conditional, e.g. n === 3",
        ],
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "Quick differences");
        bullets(
            ui,
            theme,
            &[
                "Breakpoint: pauses execution.",
                "Logpoint: logs without code changes; no pause.",
                "Conditional BP: pauses only when condition is true.",
            ],
        );
    });
    ui.add_space(theme.small_size);
    if ui
        .button(RichText::new("Run Logpoint Demo").size(theme.body_size))
        .clicked()
    {
        let total = run_logpoint_demo();
        tracing::debug!(total, "logpoint demo ran");
        demo.logpoint_total = Some(total);
    }
    if let Some(total) = demo.logpoint_total {
        success(ui, theme, &format!("Total: {total}"));
    }
    SlideAction::None
}

fn coverage(ui: &mut egui::Ui, theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "Coverage: Find unused JavaScript and CSS");
    bullets(
        ui,
        theme,
        &[
            "Large chunks of your biggest JavaScript file can be unused on first load.",
            "Updates live as you interact, so you see usage change in real time.",
            "Easily spot code or third-party libraries to lazy-load or remove.",
        ],
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "How to open it");
        numbered(
            ui,
            theme,
            &[
                "Open Command Menu (Cmd/Ctrl+Shift+P) \u{2192} type \"coverage\".",
                "Click reload to record coverage for the page load.",
                "Select a file to see unused lines marked in red.",
            ],
        );
    });
    heading(ui, theme, "Pro tips");
    bullets(ui, theme, &["Use the filter to focus on CSS or JavaScript only."]);
    SlideAction::None
}

/// The list the "Break on" demo rearranges.
pub const MOVIES: &[&str] = &["Gladiator II", "The Lion King", "Inception"];

/// A button whose click rewrites the list layout, so a subtree-modification
/// breakpoint has something to catch.
fn dom_toggle_demo(ui: &mut egui::Ui, theme: &Theme, demo: &mut DemoState) {
    if ui
        .button(RichText::new("Show/hide details").size(theme.body_size))
        .clicked()
    {
        demo.movies_in_row = !demo.movies_in_row;
        tracing::debug!(row = demo.movies_in_row, "break-on demo list toggled");
    }
    let items = |ui: &mut egui::Ui| {
        for movie in MOVIES {
            paragraph(ui, theme, movie);
        }
    };
    if demo.movies_in_row {
        ui.horizontal(items);
    } else {
        ui.vertical(items);
    }
}

fn break_on_dom(ui: &mut egui::Ui, theme: &Theme, demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "Break on: Catch DOM Changes in Action");
    paragraph(
        ui,
        theme,
        "Notice a script modifying the DOM, adding, removing, or changing elements, and you \
         can't tell which? Break on DOM modification is your detective tool.",
    );
    numbered(
        ui,
        theme,
        &[
            "Right-click the element in the Elements panel.",
            "Choose Break on \u{2192} subtree modifications, attribute modifications, or node removal.",
            "A breakpoint icon appears on the element in the DOM tree.",
            "Trigger the action that modifies the DOM; the debugger pauses on the responsible line.",
        ],
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "Use cases");
        bullets(
            ui,
            theme,
            &[
                "Debug third-party code or frameworks that modify the DOM",
                "Track down flickering and unexpected layout jumps",
            ],
        );
    });
    ui.add_space(theme.small_size);
    dom_toggle_demo(ui, theme, demo);
    SlideAction::None
}

fn rendering_tab(ui: &mut egui::Ui, theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "Rendering: Design under Real-world Conditions");
    bullets(
        ui,
        theme,
        &[
            "Paint flashing highlights areas that repaint",
            "Layout shift regions show what moved",
            "Emulate prefers-color-scheme: light or dark",
            "Emulate vision deficiencies such as blurred vision or protanopia",
        ],
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "Great for");
        bullets(
            ui,
            theme,
            &[
                "Debugging repaint/reflow issues and compositing artifacts",
                "Ensuring smooth scrolling and responsive UI",
                "Designing for Light/Dark themes with confidence",
                "Improving accessibility for users with visual impairments",
            ],
        );
    });
    SlideAction::None
}

fn css_overview(ui: &mut egui::Ui, theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "CSS Overview: Identify Potential CSS Improvements");
    paragraph(
        ui,
        theme,
        "The CSS Overview panel gives a clear snapshot of how CSS is being used across your page.",
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "Key Highlights");
        bullets(
            ui,
            theme,
            &[
                "Colors (text, background, borders, gradients)",
                "Font families, font sizes, and line-heights used across the page",
                "Media queries and selectors",
                "Jump to the elements using each specific style for quick fixing",
            ],
        );
    });
    SlideAction::None
}

fn capture_node_screenshot(ui: &mut egui::Ui, theme: &Theme, _demo: &mut DemoState) -> SlideAction {
    heading(ui, theme, "Why it's useful");
    bullets(
        ui,
        theme,
        &[
            "Great for documentation, UI reviews, bug reporting, sharing design feedback",
            "Perfect for when you only need a part of the page instead of the full screen",
            "Zero cropping or editing required",
        ],
    );
    card(ui, theme, |ui| {
        heading(ui, theme, "How to Capture a Node Screenshot");
        numbered(
            ui,
            theme,
            &[
                "Open Chrome DevTools (F12 or Ctrl+Shift+I / Cmd+Opt+I)",
                "Select the element in the Elements panel",
                "Right-click the node and choose \"Capture node screenshot\"",
            ],
        );
    });
    SlideAction::None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(key: FeatureKey, demo: &mut DemoState) -> SlideAction {
        let ctx = egui::Context::default();
        let registry = FeatureRegistry::builtin();
        let mut action = SlideAction::None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = registry.resolve(key)(ui, &Theme::dark(), demo);
            });
        });
        action
    }

    #[test]
    fn test_logpoint_demo_total() {
        assert_eq!(run_logpoint_demo(), 15);
    }

    #[test]
    fn test_logpoint_result_renders() {
        let mut demo = DemoState {
            logpoint_total: Some(run_logpoint_demo()),
            ..Default::default()
        };
        assert_eq!(draw(FeatureKey::Superpower(2), &mut demo), SlideAction::None);
        assert_eq!(demo.logpoint_total, Some(15));
    }

    #[test]
    fn test_break_on_demo_renders_both_layouts() {
        let mut demo = DemoState::default();
        assert!(!demo.movies_in_row);
        assert_eq!(draw(FeatureKey::Superpower(4), &mut demo), SlideAction::None);

        demo.movies_in_row = true;
        assert_eq!(draw(FeatureKey::Superpower(4), &mut demo), SlideAction::None);
        // Drawing never flips the layout on its own
        assert!(demo.movies_in_row);
        assert_eq!(MOVIES.len(), 3);
    }
}
