//! Theme preference store: light/dark resolution, toggle, persistence.
//!
//! DESIGN
//! ======
//! Resolution order at startup is stored preference, then the ambient
//! system color-scheme signal, then light. Only an explicit user choice
//! (`set`/`toggle`) is written back to storage; a system-derived value is
//! adopted for the session without being persisted. Every transition
//! applies the same `data-theme` document side effect, regardless of which
//! operation caused it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::state::observers::{ObserverId, Observers};
use crate::util::color_scheme::{self, ColorSchemeSignal};
use crate::util::storage::KeyValueStore;

/// Storage key holding the persisted theme value.
pub const STORAGE_KEY: &str = "theme";

/// Visual theme; persisted as the raw strings `light` and `dark`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage/display form of the value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `light`/`dark` is invalid.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Shared handle to the theme preference store.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

struct Inner {
    current: Cell<Theme>,
    storage: Rc<dyn KeyValueStore>,
    ambient: Rc<dyn ColorSchemeSignal>,
    observers: Observers<Theme>,
}

impl ThemeStore {
    /// Create a store over `storage` with `ambient` as the system
    /// color-scheme signal. Starts light; call [`ThemeStore::init`] to
    /// resolve the real startup value.
    #[must_use]
    pub fn new(storage: Rc<dyn KeyValueStore>, ambient: Rc<dyn ColorSchemeSignal>) -> Self {
        Self {
            inner: Rc::new(Inner {
                current: Cell::new(Theme::Light),
                storage,
                ambient,
                observers: Observers::new(),
            }),
        }
    }

    /// Resolve the startup theme: a valid stored value wins, otherwise the
    /// ambient signal decides. Does not write storage; a system-derived
    /// value is not yet an explicit user choice.
    pub fn init(&self) {
        let theme = match self.inner.storage.get(STORAGE_KEY).as_deref().and_then(Theme::parse) {
            Some(stored) => stored,
            None if self.inner.ambient.prefers_dark() => Theme::Dark,
            None => Theme::Light,
        };
        self.adopt(theme);
    }

    /// Adopt `theme` unconditionally and persist it.
    pub fn set(&self, theme: Theme) {
        self.inner.storage.set(STORAGE_KEY, theme.as_str());
        self.adopt(theme);
    }

    /// Switch to the opposite theme and persist it.
    pub fn toggle(&self) {
        self.set(self.current().toggled());
    }

    /// The active theme at call time.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.inner.current.get()
    }

    /// Register `callback` to receive the adopted value synchronously on
    /// every `init`/`set`/`toggle`.
    pub fn subscribe(&self, callback: impl Fn(Theme) + 'static) -> ObserverId {
        self.inner.observers.subscribe(move |theme| callback(*theme))
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: ObserverId) {
        self.inner.observers.unsubscribe(id);
    }

    fn adopt(&self, theme: Theme) {
        self.inner.current.set(theme);
        color_scheme::apply_document_theme(theme.is_dark());
        self.inner.observers.notify(&theme);
    }
}
