use crate::deck::SlideDescriptor;
use crate::storage::KeyValueStore;

/// Store key holding the current slide index as a base-10 string.
pub const CURRENT_SLIDE_KEY: &str = "currentSlide";

/// Keys the presentation reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    ArrowRight,
    ArrowLeft,
    Space,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Navigated(usize),
    OverlayDismissed,
    Swallowed,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyResponse {
    pub action: KeyAction,
    /// The key must not reach anything else (egui widgets, default handlers).
    pub prevent_default: bool,
}

impl KeyResponse {
    fn consumed(action: KeyAction) -> Self {
        Self {
            action,
            prevent_default: true,
        }
    }

    fn ignored() -> Self {
        Self {
            action: KeyAction::Ignored,
            prevent_default: false,
        }
    }
}

/// Derived navigation flags for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    pub total: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl NavigationState {
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.total)
    }
}

/// Owns the slide sequence and the single authoritative current index.
///
/// Every mutation goes through `next`, `previous` or `go_to`, and each successful
/// one is written back to the store. Store failures are logged and otherwise
/// ignored, so navigation keeps working in memory.
pub struct SlideController<S: KeyValueStore> {
    slides: Vec<SlideDescriptor>,
    current: usize,
    overlay_open: bool,
    store: S,
}

impl<S: KeyValueStore> SlideController<S> {
    /// Create a controller positioned at the index persisted in `store`.
    pub fn restore(slides: Vec<SlideDescriptor>, store: S) -> Self {
        let current = restore_index(&store, slides.len());
        tracing::debug!(current, total = slides.len(), "restored slide index");
        Self {
            slides,
            current,
            overlay_open: false,
            store,
        }
    }

    pub fn slides(&self) -> &[SlideDescriptor] {
        &self.slides
    }

    pub fn total(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&SlideDescriptor> {
        self.slides.get(self.current)
    }

    pub fn navigation(&self) -> NavigationState {
        NavigationState {
            current_index: self.current,
            total: self.total(),
            can_go_previous: self.current > 0,
            can_go_next: self.current + 1 < self.total(),
        }
    }

    pub fn next(&mut self) -> usize {
        if !self.overlay_open && self.current + 1 < self.total() {
            self.set_index(self.current + 1);
        }
        self.current
    }

    pub fn previous(&mut self) -> usize {
        if !self.overlay_open && self.current > 0 {
            self.set_index(self.current - 1);
        }
        self.current
    }

    /// Jump to `index`. Out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) -> usize {
        if self.overlay_open {
            return self.current;
        }
        if index < self.total() {
            self.set_index(index);
        } else {
            tracing::debug!(index, total = self.total(), "ignoring out-of-range jump");
        }
        self.current
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Engage the overlay gate. Navigation is suppressed until dismissed.
    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    pub fn dismiss_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// Interpret a key press. An open overlay takes precedence over navigation:
    /// only Escape gets through, and it closes the overlay.
    pub fn handle_key(&mut self, key: KeyInput) -> KeyResponse {
        if self.overlay_open {
            return match key {
                KeyInput::Escape => {
                    self.dismiss_overlay();
                    KeyResponse::consumed(KeyAction::OverlayDismissed)
                }
                _ => KeyResponse::consumed(KeyAction::Swallowed),
            };
        }

        match key {
            KeyInput::ArrowRight | KeyInput::Space => {
                KeyResponse::consumed(KeyAction::Navigated(self.next()))
            }
            KeyInput::ArrowLeft => KeyResponse::consumed(KeyAction::Navigated(self.previous())),
            KeyInput::Escape | KeyInput::Other => KeyResponse::ignored(),
        }
    }

    pub fn persist(&mut self, index: usize) {
        if let Err(e) = self.store.set(CURRENT_SLIDE_KEY, &index.to_string()) {
            tracing::debug!(error = %e, "could not persist slide index");
        }
    }

    fn set_index(&mut self, index: usize) {
        self.current = index;
        self.persist(index);
    }
}

/// Read the persisted index and clamp it into the current deck.
///
/// A value that no longer fits (the deck shrank between sessions) lands on the
/// last slide rather than pointing past the end.
pub fn restore_index(store: &impl KeyValueStore, total: usize) -> usize {
    let parsed = store
        .get(CURRENT_SLIDE_KEY)
        .and_then(|raw| parse_leading_int(&raw))
        .unwrap_or(0);
    let last = total.saturating_sub(1) as i64;
    parsed.clamp(0, last) as usize
}

/// Parse a base-10 integer prefix: optional sign, then digits. Trailing
/// garbage is ignored, no digits at all is `None`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Renderable, SlideKind};
    use crate::storage::{MemoryStore, StoreError};
    use std::cell::Cell;
    use std::rc::Rc;

    fn slides(n: usize) -> Vec<SlideDescriptor> {
        (0..n)
            .map(|i| SlideDescriptor {
                id: i as u32 + 1,
                title: format!("Slide {}", i + 1),
                kind: SlideKind::Content,
                renderable: Renderable::Topics,
            })
            .collect()
    }

    fn store_with(value: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.set(CURRENT_SLIDE_KEY, value).unwrap();
        store
    }

    /// A store that always fails to write and counts attempts.
    struct BrokenStore {
        writes: Rc<Cell<usize>>,
    }

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            self.writes.set(self.writes.get() + 1);
            Err(StoreError::NoLocation)
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::NoLocation)
        }
    }

    fn persisted(controller: &SlideController<MemoryStore>) -> Option<String> {
        controller.store.get(CURRENT_SLIDE_KEY)
    }

    #[test]
    fn test_index_stays_in_bounds() {
        for total in 1..6 {
            let mut c = SlideController::restore(slides(total), MemoryStore::default());
            // Deterministic mixed walk
            for step in 0..40 {
                if (step * 7 + total) % 3 == 0 {
                    c.previous();
                } else {
                    c.next();
                }
                assert!(c.current_index() < total, "total={total} step={step}");
            }
        }
    }

    #[test]
    fn test_next_at_last_is_noop() {
        let mut c = SlideController::restore(slides(3), store_with("2"));
        assert_eq!(c.next(), 2);
        assert_eq!(persisted(&c).as_deref(), Some("2"));
        assert!(!c.navigation().can_go_next);
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let mut c = SlideController::restore(slides(3), MemoryStore::default());
        assert_eq!(c.previous(), 0);
        assert_eq!(persisted(&c), None);
        assert!(!c.navigation().can_go_previous);
    }

    #[test]
    fn test_next_and_previous_persist() {
        let mut c = SlideController::restore(slides(5), MemoryStore::default());
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(persisted(&c).as_deref(), Some("2"));
        assert_eq!(c.previous(), 1);
        assert_eq!(persisted(&c).as_deref(), Some("1"));
    }

    #[test]
    fn test_go_to_in_range() {
        let mut c = SlideController::restore(slides(7), MemoryStore::default());
        for k in [6, 0, 3] {
            assert_eq!(c.go_to(k), k);
            assert_eq!(persisted(&c), Some(k.to_string()));
        }
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut c = SlideController::restore(slides(7), store_with("2"));
        assert_eq!(c.go_to(7), 2);
        assert_eq!(c.go_to(usize::MAX), 2);
        assert_eq!(persisted(&c).as_deref(), Some("2"));
    }

    #[test]
    fn test_restore_values() {
        assert_eq!(restore_index(&store_with("3"), 7), 3);
        assert_eq!(restore_index(&MemoryStore::default(), 7), 0);
        assert_eq!(restore_index(&store_with("abc"), 7), 0);
        assert_eq!(restore_index(&store_with(""), 7), 0);
        assert_eq!(restore_index(&store_with("4px"), 7), 4);
        assert_eq!(restore_index(&store_with(" 5"), 7), 5);
    }

    #[test]
    fn test_restore_clamps_stale_index() {
        // A deck that shrank between sessions lands on its last slide
        assert_eq!(restore_index(&store_with("12"), 7), 6);
        assert_eq!(restore_index(&store_with("-3"), 7), 0);
        assert_eq!(restore_index(&store_with("99999999999999999999"), 7), 6);
        assert_eq!(restore_index(&store_with("3"), 0), 0);
    }

    #[test]
    fn test_navigation_state() {
        let mut c = SlideController::restore(slides(4), MemoryStore::default());
        let nav = c.navigation();
        assert_eq!(nav.counter(), "1 / 4");
        assert!(!nav.can_go_previous);
        assert!(nav.can_go_next);

        c.go_to(3);
        let nav = c.navigation();
        assert_eq!(nav.counter(), "4 / 4");
        assert!(nav.can_go_previous);
        assert!(!nav.can_go_next);
    }

    #[test]
    fn test_single_slide_deck() {
        let mut c = SlideController::restore(slides(1), MemoryStore::default());
        assert_eq!(c.next(), 0);
        assert_eq!(c.previous(), 0);
        let nav = c.navigation();
        assert!(!nav.can_go_next && !nav.can_go_previous);
    }

    #[test]
    fn test_keys_navigate() {
        let mut c = SlideController::restore(slides(5), MemoryStore::default());
        let r = c.handle_key(KeyInput::ArrowRight);
        assert_eq!(r.action, KeyAction::Navigated(1));
        assert!(r.prevent_default);
        assert_eq!(c.handle_key(KeyInput::Space).action, KeyAction::Navigated(2));
        assert_eq!(c.handle_key(KeyInput::ArrowLeft).action, KeyAction::Navigated(1));

        let r = c.handle_key(KeyInput::Other);
        assert_eq!(r.action, KeyAction::Ignored);
        assert!(!r.prevent_default);
        assert_eq!(c.handle_key(KeyInput::Escape).action, KeyAction::Ignored);
    }

    #[test]
    fn test_overlay_gate_blocks_navigation() {
        let mut c = SlideController::restore(slides(5), store_with("2"));
        c.open_overlay();

        assert_eq!(c.next(), 2);
        assert_eq!(c.previous(), 2);
        assert_eq!(c.go_to(4), 2);

        for key in [KeyInput::ArrowRight, KeyInput::ArrowLeft, KeyInput::Space, KeyInput::Other] {
            let r = c.handle_key(key);
            assert_eq!(r.action, KeyAction::Swallowed);
            assert!(r.prevent_default);
        }
        assert_eq!(c.current_index(), 2);
        assert!(c.overlay_open());
    }

    #[test]
    fn test_escape_dismisses_overlay_without_navigating() {
        let mut c = SlideController::restore(slides(5), store_with("1"));
        c.open_overlay();
        let r = c.handle_key(KeyInput::Escape);
        assert_eq!(r.action, KeyAction::OverlayDismissed);
        assert!(r.prevent_default);
        assert!(!c.overlay_open());
        assert_eq!(c.current_index(), 1);

        assert_eq!(c.handle_key(KeyInput::ArrowRight).action, KeyAction::Navigated(2));
    }

    #[test]
    fn test_broken_store_keeps_navigating_in_memory() {
        let writes = Rc::new(Cell::new(0));
        let store = BrokenStore {
            writes: writes.clone(),
        };
        let mut c = SlideController::restore(slides(3), store);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.previous(), 1);
        assert_eq!(writes.get(), 3);
    }
}
