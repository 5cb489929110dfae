pub mod content;

use content::{AI_INNOVATIONS, DEVTOOLS_FEATURES, Feature};

/// Layout tag for a slide. Only affects presentation styling, never navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Intro,
    Topics,
    Content,
}

impl SlideKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Topics => "topics",
            Self::Content => "content",
        }
    }
}

/// Which data-driven feature list an entry comes from, plus its id there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKey {
    AiInnovation(u32),
    Superpower(u32),
}

impl FeatureKey {
    pub fn feature(&self) -> Option<&'static Feature> {
        let (table, id) = match *self {
            Self::AiInnovation(id) => (AI_INNOVATIONS, id),
            Self::Superpower(id) => (DEVTOOLS_FEATURES, id),
        };
        table.iter().find(|f| f.id == id)
    }

    /// Slide header shared by every entry of the same list.
    pub fn group_heading(&self) -> (&'static str, &'static str) {
        match self {
            Self::AiInnovation(_) => (
                "AI Innovations in Chrome DevTools",
                "Unlock the power of AI-assisted debugging and development",
            ),
            Self::Superpower(_) => (
                "Underrated DevTools Superpowers Most Developers Miss",
                "Unlock faster debugging, smarter testing, and cleaner workflows.",
            ),
        }
    }
}

/// What a slide shows. Opaque to the controller; the render layer resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderable {
    Intro,
    Topics,
    GeolocationIntro,
    SensorsPanel,
    LocationSettings,
    GeolocationDemo,
    AutoClosingDebug,
    Feature(FeatureKey),
    Snippets,
    McpDeployment,
    QaInvite,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideDescriptor {
    pub id: u32,
    pub title: String,
    pub kind: SlideKind,
    pub renderable: Renderable,
}

const LEADING: &[(&str, SlideKind, Renderable)] = &[
    ("DevFest Bhubaneswar 2025", SlideKind::Intro, Renderable::Intro),
    ("What We'll Cover Today", SlideKind::Topics, Renderable::Topics),
    (
        "What is Geolocation Testing?",
        SlideKind::Content,
        Renderable::GeolocationIntro,
    ),
    ("The Sensors Panel", SlideKind::Content, Renderable::SensorsPanel),
    (
        "Custom Location Settings",
        SlideKind::Content,
        Renderable::LocationSettings,
    ),
    (
        "Geolocation Demo",
        SlideKind::Content,
        Renderable::GeolocationDemo,
    ),
    (
        "Debug Auto-Closing Elements",
        SlideKind::Content,
        Renderable::AutoClosingDebug,
    ),
];

const TRAILING: &[(&str, SlideKind, Renderable)] = &[
    (
        "Snippets: Reusable JavaScript in DevTools",
        SlideKind::Content,
        Renderable::Snippets,
    ),
    (
        "Deploy a Secure MCP Server on Cloud Run",
        SlideKind::Content,
        Renderable::McpDeployment,
    ),
    ("Questions & Answers", SlideKind::Intro, Renderable::QaInvite),
];

/// Build the fixed slide sequence: the leading static slides, one generated slide
/// per AI innovation and per DevTools feature, then the trailing static slides.
/// Ids are assigned sequentially from 1.
pub fn assemble() -> Vec<SlideDescriptor> {
    let statics = |table: &'static [(&'static str, SlideKind, Renderable)]| {
        table
            .iter()
            .map(|&(title, kind, renderable)| (title.to_string(), kind, renderable))
    };
    let generated = |table: &'static [Feature], key: fn(u32) -> FeatureKey| {
        table.iter().map(move |f| {
            (
                f.title.to_string(),
                SlideKind::Content,
                Renderable::Feature(key(f.id)),
            )
        })
    };

    statics(LEADING)
        .chain(generated(AI_INNOVATIONS, FeatureKey::AiInnovation))
        .chain(generated(DEVTOOLS_FEATURES, FeatureKey::Superpower))
        .chain(statics(TRAILING))
        .zip(1u32..)
        .map(|((title, kind, renderable), id)| SlideDescriptor {
            id,
            title,
            kind,
            renderable,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_assemble_includes_generated_entries() {
        let slides = assemble();
        assert_eq!(
            slides.len(),
            LEADING.len() + AI_INNOVATIONS.len() + DEVTOOLS_FEATURES.len() + TRAILING.len()
        );
        let features = slides
            .iter()
            .filter(|s| matches!(s.renderable, Renderable::Feature(_)))
            .count();
        assert_eq!(features, 11);
    }

    #[test]
    fn test_ids_are_unique_and_sequential() {
        let slides = assemble();
        let ids: HashSet<u32> = slides.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), slides.len());
        assert_eq!(slides.first().map(|s| s.id), Some(1));
        assert_eq!(slides.last().map(|s| s.id), Some(slides.len() as u32));
    }

    #[test]
    fn test_deck_order() {
        let slides = assemble();
        assert_eq!(slides[0].kind, SlideKind::Intro);
        assert_eq!(slides[1].kind, SlideKind::Topics);
        assert_eq!(
            slides[LEADING.len()].renderable,
            Renderable::Feature(FeatureKey::AiInnovation(1))
        );
        assert!(matches!(
            slides.last().map(|s| s.renderable),
            Some(Renderable::QaInvite)
        ));
    }

    #[test]
    fn test_every_feature_key_resolves() {
        for slide in assemble() {
            if let Renderable::Feature(key) = slide.renderable {
                let feature = key.feature().expect("feature in table");
                assert_eq!(feature.title, slide.title);
                assert!(!feature.description.trim().is_empty(), "{}", feature.title);
            }
        }
        assert!(FeatureKey::Superpower(42).feature().is_none());
    }
}
