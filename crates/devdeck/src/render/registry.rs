use std::collections::HashMap;

use eframe::egui;

use super::{DemoState, SlideAction, features};
use crate::deck::FeatureKey;
use crate::theme::Theme;

/// Draws the body of one feature slide, below its shared headline.
pub type RenderStrategy = fn(&mut egui::Ui, &Theme, &mut DemoState) -> SlideAction;

/// Maps feature keys to their render strategy. Keys without an entry fall back
/// to a description-only body, so new table rows render before anyone writes a
/// dedicated strategy for them.
pub struct FeatureRegistry {
    strategies: HashMap<FeatureKey, RenderStrategy>,
}

impl FeatureRegistry {
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        features::register_builtin(&mut registry);
        registry
    }

    /// Register or replace the strategy for `key`.
    pub fn register(&mut self, key: FeatureKey, strategy: RenderStrategy) -> &mut Self {
        if self.strategies.insert(key, strategy).is_some() {
            tracing::debug!(?key, "replaced feature render strategy");
        }
        self
    }

    pub fn contains(&self, key: FeatureKey) -> bool {
        self.strategies.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn resolve(&self, key: FeatureKey) -> RenderStrategy {
        self.strategies
            .get(&key)
            .copied()
            .unwrap_or(features::description_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{self, Renderable};

    #[test]
    fn test_builtin_covers_every_feature_slide() {
        let registry = FeatureRegistry::builtin();
        for slide in deck::assemble() {
            if let Renderable::Feature(key) = slide.renderable {
                assert!(registry.contains(key), "no strategy for {key:?}");
            }
        }
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn test_register_extends_registry() {
        let mut registry = FeatureRegistry::empty();
        let key = FeatureKey::Superpower(8);
        assert!(!registry.contains(key));

        registry.register(key, features::description_only);
        assert!(registry.contains(key));
        assert_eq!(registry.len(), 1);

        // Replacing keeps a single entry
        registry.register(key, features::description_only);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregistered_key_renders_fallback() {
        let registry = FeatureRegistry::empty();
        let strategy = registry.resolve(FeatureKey::AiInnovation(99));
        let ctx = egui::Context::default();
        let mut demo = DemoState::default();
        let mut action = SlideAction::None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = strategy(ui, &Theme::light(), &mut demo);
            });
        });
        assert_eq!(action, SlideAction::None);
    }
}
