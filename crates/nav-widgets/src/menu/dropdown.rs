//! Dropdown list widget used for submenus.

use crate::error::WidgetResult;
use crate::html::{self, Attributes};

use super::item::{Children, MenuItem};

/// Renders a set of items as `<ul class="dropdown-content">`.
#[derive(Debug, Clone)]
pub struct Dropdown {
    id: String,
    encode_labels: bool,
}

impl Dropdown {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            encode_labels: true,
        }
    }

    pub fn encode_labels(mut self, encode: bool) -> Self {
        self.encode_labels = encode;
        self
    }

    /// Render `items`. Route targets resolve against `module`.
    pub fn render(&self, items: &[MenuItem], module: &str) -> WidgetResult<String> {
        self.render_at(items, module, "items")
    }

    /// Like [`Dropdown::render`], with `path` naming the item set in errors.
    pub(crate) fn render_at(
        &self,
        items: &[MenuItem],
        module: &str,
        path: &str,
    ) -> WidgetResult<String> {
        let mut lines = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            if !item.is_visible() {
                continue;
            }
            let item_path = format!("{path}[{i}]");
            let link = match item {
                MenuItem::Raw(markup) => {
                    lines.push(markup.clone());
                    continue;
                }
                MenuItem::Link(link) => link,
            };

            let label = link.label_html(self.encode_labels, &item_path)?;
            let href = link.href(module);

            let mut content = html::link(&label, &href, &link.link_options);
            match &link.items {
                Some(Children::Items(children)) => {
                    let nested = Dropdown::new(&format!("{}_{i}", self.id))
                        .encode_labels(self.encode_labels);
                    content.push_str(&nested.render_at(
                        children,
                        module,
                        &format!("{item_path}.items"),
                    )?);
                }
                Some(Children::Markup(markup)) => content.push_str(markup),
                None => {}
            }

            lines.push(html::tag("li", &content, &link.options));
        }

        let options = Attributes::new()
            .with("id", &self.id)
            .with("class", "dropdown-content");
        Ok(html::tag("ul", &lines.join("\n"), &options))
    }
}
