//! Login background treatment toggle.
//!
//! Mirrors the original choreography: the photo backdrop turns on only when
//! the login panel appears and goes away once the dashboard takes over.
//! Nothing is persisted. Requires a browser environment; native builds
//! no-op so tests and non-browser targets stay deterministic.

/// Attribute set on `<html>` while the backdrop is active.
#[cfg(feature = "csr")]
const BACKDROP_ATTR: &str = "data-backdrop";

/// Apply or remove the backdrop attribute on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(el) = el {
            if enabled {
                let _ = el.set_attribute(BACKDROP_ATTR, "on");
            } else {
                let _ = el.remove_attribute(BACKDROP_ATTR);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}
