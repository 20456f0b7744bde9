//! Reload control — a button that reloads the whole document in the browser.
//!
//! The server only emits markup; the click is handled entirely by the
//! browser. No state, no navigation, no request of its own.

use askama::Template;

/// Inline handler attached to the control.
pub const ON_CLICK: &str = "window.location.reload()";

/// Text shown on the control.
pub const LABEL: &str = "Reload the page";

/// Markup for the reload control.
#[derive(Template)]
#[template(path = "reload_control.html")]
pub struct ReloadControl {
    on_click: &'static str,
    label: &'static str,
}

impl Default for ReloadControl {
    fn default() -> Self {
        Self {
            on_click: ON_CLICK,
            label: LABEL,
        }
    }
}

impl ReloadControl {
    /// Render the control to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns an [`askama::Error`] if the template fails to render.
    pub fn to_html(&self) -> Result<String, askama::Error> {
        self.render()
    }
}
