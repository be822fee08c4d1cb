//! Ambient color-scheme detection and the document theme side effect.
//!
//! Queries the platform's `prefers-color-scheme` media signal and applies a
//! `data-theme` attribute to the `<html>` element. Requires a browser
//! environment; host-side paths safely no-op.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

/// Read-only ambient color-scheme signal.
///
/// Consulted only when no explicit theme preference has been stored.
pub trait ColorSchemeSignal {
    /// Whether the user's environment prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;
}

/// `matchMedia("(prefers-color-scheme: dark)")` backed signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuerySignal;

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply_document_theme(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dark;
    }
}
