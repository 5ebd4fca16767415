//! Navigation menu widget.
//!
//! Renders the configured items twice: once as the desktop `<ul class="nav">`
//! and once as the mobile `<ul class="side-nav">` panel, optionally preceded
//! by the button that slides the mobile panel out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::ClientScript;
use crate::error::WidgetResult;
use crate::html::{self, Attributes};
use crate::icon::Icon;

use super::dropdown::Dropdown;
use super::item::{Children, LinkItem, MenuItem, de_request_params};
use super::matcher::{ActiveMatcher, RequestRoute};

/// Asset bundle the rendered markup depends on.
pub const ASSET_BUNDLE: &str = "materialize";

/// Icon appended to labels of items that open a dropdown.
const DROPDOWN_CARET: &str = "fa-caret-down right";

const DEFAULT_COLLAPSE_LABEL: &str = r#"<i class="fa fa-bars"></i>"#;

/// Menu contents and rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub items: Vec<MenuItem>,
    /// Items of the mobile panel. Falls back to `items` when empty.
    pub mobile_items: Vec<MenuItem>,
    /// HTML-encode labels unless an item says otherwise.
    pub encode_labels: bool,
    /// Mark items active when their route matches the request.
    pub activate_items: bool,
    /// Mark a dropdown parent active when one of its children is.
    pub activate_parents: bool,
    /// Route to match against instead of the request's.
    pub route: Option<String>,
    /// Parameters to match against instead of the request's. Scalars are
    /// stringified, nulls dropped.
    #[serde(default, deserialize_with = "de_request_params")]
    pub params: Option<HashMap<String, String>>,
    /// Emit the collapse button that opens the mobile panel.
    pub button_collapse: bool,
    /// Button content. Not encoded.
    pub button_collapse_label: String,
    pub button_collapse_options: Attributes,
    /// Attributes of the desktop `<ul>`.
    pub options: Attributes,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            mobile_items: Vec::new(),
            encode_labels: true,
            activate_items: true,
            activate_parents: false,
            route: None,
            params: None,
            button_collapse: false,
            button_collapse_label: DEFAULT_COLLAPSE_LABEL.to_string(),
            button_collapse_options: Attributes::new(),
            options: Attributes::new(),
        }
    }
}

impl NavConfig {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

/// A navigation menu bound to an element id.
#[derive(Debug, Clone)]
pub struct Nav {
    id: String,
    config: NavConfig,
}

impl Nav {
    pub fn new(id: &str, config: NavConfig) -> Self {
        Self {
            id: id.to_string(),
            config,
        }
    }

    /// Id of the mobile panel, also the collapse button's target.
    pub fn mobile_id(&self) -> String {
        format!("{}-mobile", self.id)
    }

    pub fn button_id(&self) -> String {
        format!("{}-button-collapse", self.id)
    }

    /// Render the collapse button (when enabled), the desktop list and the
    /// mobile list.
    ///
    /// Fails on the first structured item without a label; nothing is
    /// registered with `client` in that case.
    pub fn render(
        &self,
        request: &RequestRoute,
        client: &mut dyn ClientScript,
    ) -> WidgetResult<String> {
        let config = &self.config;
        let route = config.route.as_deref().unwrap_or(&request.route);
        let params = config.params.as_ref().unwrap_or(&request.params);
        if route != request.route {
            debug!(nav = %self.id, route, request_route = %request.route, "route overridden");
        }

        let mut pass = RenderPass {
            nav: self,
            matcher: ActiveMatcher::new(route, params, &request.module),
            module: &request.module,
            next_dropdown: 0,
        };

        let mut desktop_options = config.options.clone();
        if desktop_options.get("id").is_none() {
            desktop_options.set("id", &self.id);
        }
        desktop_options.add_class("nav");
        let desktop = pass.render_list(&config.items, &desktop_options, "items")?;

        let mut mobile_options = config.options.clone();
        mobile_options.set("class", "side-nav");
        mobile_options.set("id", &self.mobile_id());
        let mobile = if config.mobile_items.is_empty() {
            pass.render_list(&config.items, &mobile_options, "items")?
        } else {
            pass.render_list(&config.mobile_items, &mobile_options, "mobile_items")?
        };

        let mut out = String::new();
        client.register_asset(ASSET_BUNDLE);
        if config.button_collapse {
            out.push_str(&self.render_button());
            client.register_js(&format!("$(\"#{}\").sideNav();", self.button_id()));
        }
        out.push_str(&desktop);
        out.push_str(&mobile);

        debug!(
            nav = %self.id,
            items = config.items.len(),
            mobile_items = config.mobile_items.len(),
            dropdowns = pass.next_dropdown,
            "rendered nav"
        );
        Ok(out)
    }

    fn render_button(&self) -> String {
        let mut options = self.config.button_collapse_options.clone();
        options.add_class("button-collapse");
        options.set("id", &self.button_id());
        options.set("data-activates", &self.mobile_id());
        html::link(&self.config.button_collapse_label, "#", &options)
    }
}

/// State of one `Nav::render` call.
struct RenderPass<'a> {
    nav: &'a Nav,
    matcher: ActiveMatcher<'a>,
    module: &'a str,
    /// Dropdown ids are numbered across the whole pass so they stay unique.
    next_dropdown: usize,
}

impl RenderPass<'_> {
    fn render_list(
        &mut self,
        items: &[MenuItem],
        options: &Attributes,
        path: &str,
    ) -> WidgetResult<String> {
        let mut lines = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if !item.is_visible() {
                continue;
            }
            match item {
                MenuItem::Raw(markup) => lines.push(markup.clone()),
                MenuItem::Link(link) => {
                    lines.push(self.render_item(link, &format!("{path}[{i}]"))?);
                }
            }
        }
        Ok(html::tag("ul", &lines.join("\n"), options))
    }

    fn render_item(&mut self, link: &LinkItem, path: &str) -> WidgetResult<String> {
        let nav = self.nav;
        let config = &nav.config;

        let mut label = link.label_html(config.encode_labels, path)?;
        let href = link.href(self.module);

        let mut options = link.options.clone();
        let mut link_options = link.link_options.clone();
        let mut active = self.is_active(link);
        let mut dropdown = String::new();

        if let Some(children) = &link.items {
            let dropdown_id = format!("{}-dropdown_{}", nav.id, self.next_dropdown);
            self.next_dropdown += 1;

            options.add_class("dropdown");
            link_options.add_class("dropdown-button");
            link_options.set("id", &format!("{dropdown_id}-btn"));
            link_options.set("data-activates", &dropdown_id);
            label.push(' ');
            label.push_str(&Icon::new(DROPDOWN_CARET).render());

            match children {
                Children::Items(items) => {
                    if items.is_empty() {
                        warn!(nav = %nav.id, path, "dropdown has no items");
                    }
                    let (items, child_active) = self.mark_active_children(items);
                    if child_active && config.activate_parents {
                        active = true;
                    }
                    dropdown = Dropdown::new(&dropdown_id)
                        .encode_labels(config.encode_labels)
                        .render_at(&items, self.module, &format!("{path}.items"))?;
                }
                Children::Markup(markup) => dropdown.clone_from(markup),
            }
        }

        if active {
            options.add_class("active");
        }

        let content = html::link(&label, &href, &link_options) + &dropdown;
        Ok(html::tag("li", &content, &options))
    }

    /// Explicit flag first; route matching only when auto-activation is on.
    fn is_active(&self, link: &LinkItem) -> bool {
        match link.active {
            Some(active) => active,
            None => self.nav.config.activate_items && self.matcher.is_active(link),
        }
    }

    /// Copy of `items` with `active` added to the container class of each
    /// active child, plus whether any child was active. Only direct children
    /// are inspected.
    fn mark_active_children(&self, items: &[MenuItem]) -> (Vec<MenuItem>, bool) {
        let mut any_active = false;
        let marked = items
            .iter()
            .map(|item| match item {
                MenuItem::Link(link) if link.visible && self.is_active(link) => {
                    any_active = true;
                    let mut link = link.clone();
                    link.options.add_class("active");
                    MenuItem::Link(link)
                }
                other => other.clone(),
            })
            .collect();
        (marked, any_active)
    }
}
