//! Lightbox navigation state.
//!
//! An index cursor over the gallery items with wraparound navigation. The
//! item list is handed over by the gallery once it renders (see
//! [`Lightbox::bind`]); the lightbox never reads it back from the DOM.
//!
//! With no items, opening still toggles visibility but there is nothing to
//! show, and navigation does nothing.

use super::media::{ClassifiedItem, MediaKind};

/// Media shown by the lightbox for one gallery item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxItem {
    pub src: String,
    pub alt: String,
    pub kind: MediaKind,
}

impl From<&ClassifiedItem> for LightboxItem {
    fn from(item: &ClassifiedItem) -> Self {
        Self {
            src: item.src.clone(),
            alt: item.alt.clone(),
            kind: item.kind,
        }
    }
}

/// Keys the lightbox responds to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// What the lightbox displays at the current index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxFrame {
    pub item: LightboxItem,
    /// 1-based position, e.g. `"3 / 12"`
    pub counter: String,
}

/// Index-based lightbox state machine.
#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    items: Vec<LightboxItem>,
    current: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(items: Vec<LightboxItem>) -> Self {
        Self {
            items,
            current: 0,
            open: false,
        }
    }

    /// Replace the item list after the gallery re-renders.
    ///
    /// Resets the cursor and closes the lightbox.
    pub fn bind(&mut self, items: Vec<LightboxItem>) {
        self.items = items;
        self.current = 0;
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Open at `index`. Returns `false` if the index is out of range.
    ///
    /// An empty lightbox opens without showing anything.
    pub fn open(&mut self, index: usize) -> bool {
        if !self.items.is_empty() {
            if index >= self.items.len() {
                return false;
            }
            self.current = index;
        }
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + 1) % len;
    }

    pub fn prev(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + len - 1) % len;
    }

    /// Route a key press. Ignored while closed; returns whether it was handled.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.open {
            return false;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.prev(),
            LightboxKey::ArrowRight => self.next(),
        }
        true
    }

    /// Item at the cursor, if any.
    pub fn current(&self) -> Option<&LightboxItem> {
        self.items.get(self.current)
    }

    /// Counter text for the cursor, if any.
    pub fn counter(&self) -> Option<String> {
        self.current()
            .map(|_| format!("{} / {}", self.current + 1, self.items.len()))
    }

    /// Video to play while open, keyed by the cursor position so that
    /// stepping between entries sharing a source still restarts playback.
    pub fn video_cue(&self) -> Option<(usize, String)> {
        let item = self.current().filter(|item| item.kind == MediaKind::Video)?;
        self.open.then(|| (self.current, item.src.clone()))
    }

    /// What to display while open.
    pub fn frame(&self) -> Option<LightboxFrame> {
        if !self.open {
            return None;
        }
        Some(LightboxFrame {
            item: self.current()?.clone(),
            counter: self.counter()?,
        })
    }
}
