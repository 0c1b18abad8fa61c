//! Dark theme preference handling.
//!
//! The preference lives in `localStorage`; applying it sets or clears the
//! `data-theme` attribute on `<html>`, which the stylesheet keys its dark
//! palette off. Server rendering has no browser to talk to, so every
//! function here degrades to a no-op outside the hydrate build.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "opsdesk_dark";

/// Resolve the stored dark theme preference.
///
/// A stored value wins; with nothing stored the OS-level color scheme
/// decides. Non-browser builds always report light.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                return stored == "true";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set or clear `data-theme="dark"` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if enabled {
                let _ = root.set_attribute("data-theme", "dark");
            } else {
                let _ = root.remove_attribute("data-theme");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
