//! Client-side behavior registration.
//!
//! Widgets never write scripts into their own markup. They hand asset bundles
//! and JS snippets to a [`ClientScript`] supplied by the host page, which
//! decides where they end up.

use tracing::debug;

use crate::html::{Attributes, tag};

/// Sink for client-side assets and behavior hooks.
pub trait ClientScript {
    /// Request an asset bundle (stylesheet/script set) by name.
    fn register_asset(&mut self, bundle: &str);

    /// Queue a JS snippet to run once the page is ready.
    fn register_js(&mut self, js: &str);
}

/// Discards everything. For hosts that wire scripts up themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClientScript;

impl ClientScript for NoopClientScript {
    fn register_asset(&mut self, _bundle: &str) {}

    fn register_js(&mut self, _js: &str) {}
}

/// Collects registrations for one page.
#[derive(Debug, Default, Clone)]
pub struct ScriptRegistry {
    assets: Vec<String>,
    scripts: Vec<String>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered bundles, in first-registration order.
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// All snippets wrapped in one `<script>` element, or an empty string.
    pub fn render(&self) -> String {
        if self.scripts.is_empty() {
            return String::new();
        }
        let body = format!("\n{}\n", self.scripts.join("\n"));
        tag("script", &body, &Attributes::new())
    }
}

impl ClientScript for ScriptRegistry {
    fn register_asset(&mut self, bundle: &str) {
        if !self.assets.iter().any(|a| a == bundle) {
            debug!(bundle, "registered asset bundle");
            self.assets.push(bundle.to_string());
        }
    }

    fn register_js(&mut self, js: &str) {
        self.scripts.push(js.to_string());
    }
}
