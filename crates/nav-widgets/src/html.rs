//! Markup helpers shared by the widgets.
//!
//! Attributes render in a fixed order for the well-known names and
//! alphabetically after that, so output is stable across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute names that always render first, in this order.
const ATTRIBUTE_ORDER: &[&str] = &[
    "type", "id", "class", "name", "value", "href", "src", "for", "title", "alt", "role", "style",
];

/// Escape text for use in HTML content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// HTML attributes of a single element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::set`].
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Add one or more space-separated classes, skipping ones already present.
    pub fn add_class(&mut self, classes: &str) {
        let mut current: Vec<String> = self
            .get("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        for class in classes.split_whitespace() {
            if !current.iter().any(|c| c == class) {
                current.push(class.to_string());
            }
        }

        if !current.is_empty() {
            self.0.insert("class".to_string(), current.join(" "));
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Render as ` name="value"` pairs with a leading space per attribute.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut push = |name: &str, value: &str| {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape(value));
            out.push('"');
        };

        for &name in ATTRIBUTE_ORDER {
            if let Some(value) = self.0.get(name) {
                push(name, value.as_str());
            }
        }
        for (name, value) in &self.0 {
            if !ATTRIBUTE_ORDER.contains(&name.as_str()) {
                push(name.as_str(), value.as_str());
            }
        }

        out
    }
}

/// Render `<tag attrs>content</tag>`. Content is inserted as-is.
pub fn tag(name: &str, content: &str, attrs: &Attributes) -> String {
    format!("<{name}{}>{content}</{name}>", attrs.render())
}

/// Render an anchor. `text` is inserted as-is; `href` is escaped.
pub fn link(text: &str, href: &str, attrs: &Attributes) -> String {
    let mut attrs = attrs.clone();
    attrs.set("href", href);
    tag("a", text, &attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_special_chars() {
        assert_eq!(
            html_escape("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_html_escape_ampersand_first() {
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn add_class_merges_and_dedupes() {
        let mut attrs = Attributes::new().with("class", "nav");
        attrs.add_class("dropdown nav");
        attrs.add_class("active");
        assert_eq!(attrs.get("class"), Some("nav dropdown active"));
        assert!(attrs.has_class("dropdown"));
        assert!(!attrs.has_class("drop"));
    }

    #[test]
    fn render_orders_known_attributes_first() {
        let attrs = Attributes::new()
            .with("data-activates", "w0-mobile")
            .with("class", "button-collapse")
            .with("id", "w0-button-collapse");
        assert_eq!(
            attrs.render(),
            r#" id="w0-button-collapse" class="button-collapse" data-activates="w0-mobile""#
        );
    }

    #[test]
    fn link_escapes_href_only() {
        let html = link("<b>Home</b>", "/site?a=1&b=2", &Attributes::new());
        assert_eq!(html, r#"<a href="/site?a=1&amp;b=2"><b>Home</b></a>"#);
    }

    #[test]
    fn empty_tag() {
        let attrs = Attributes::new().with("class", "fa fa-home");
        assert_eq!(tag("i", "", &attrs), r#"<i class="fa fa-home"></i>"#);
    }
}
