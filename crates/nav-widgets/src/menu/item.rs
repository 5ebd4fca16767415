//! Menu item model.
//!
//! Items deserialize from YAML/JSON/TOML. A bare string is raw markup; a map
//! is a link item:
//!
//! ```yaml
//! - label: Home
//!   url: { route: site/index }
//! - '<li class="divider"></li>'
//! - label: Blog
//!   items:
//!     - label: Latest
//!       url: [blog/index, { page: 1 }]
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{WidgetError, WidgetResult};
use crate::html::{Attributes, html_escape};

/// Param key that carries the URL fragment of a route target.
pub const FRAGMENT_KEY: &str = "#";

/// A single entry of a menu or dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuItem {
    /// Markup emitted verbatim, without escaping.
    Raw(String),
    Link(LinkItem),
}

impl MenuItem {
    pub fn raw(markup: &str) -> Self {
        MenuItem::Raw(markup.to_string())
    }

    /// Hidden items are skipped by every renderer. Raw markup is always shown.
    pub fn is_visible(&self) -> bool {
        match self {
            MenuItem::Raw(_) => true,
            MenuItem::Link(link) => link.visible,
        }
    }
}

impl From<LinkItem> for MenuItem {
    fn from(link: LinkItem) -> Self {
        MenuItem::Link(link)
    }
}

/// A labelled link, optionally opening a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Required at render time.
    #[serde(default)]
    pub label: Option<String>,
    /// Link target. Renders as `#` when absent.
    #[serde(default)]
    pub url: Option<Target>,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Overrides the menu-wide label encoding for this item.
    #[serde(default)]
    pub encode: Option<bool>,
    /// Attributes of the `<a>` element.
    #[serde(default)]
    pub link_options: Attributes,
    /// Attributes of the `<li>` container.
    #[serde(default)]
    pub options: Attributes,
    /// Forces the active state, bypassing route matching.
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub items: Option<Children>,
}

fn default_true() -> bool {
    true
}

impl Default for LinkItem {
    fn default() -> Self {
        Self {
            label: None,
            url: None,
            visible: true,
            encode: None,
            link_options: Attributes::new(),
            options: Attributes::new(),
            active: None,
            items: None,
        }
    }
}

impl LinkItem {
    pub fn new(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Self::default()
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(Target::Url(url.to_string()));
        self
    }

    pub fn route(mut self, route: RouteTarget) -> Self {
        self.url = Some(Target::Route(route));
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn encode(mut self, encode: bool) -> Self {
        self.encode = Some(encode);
        self
    }

    pub fn option(mut self, name: &str, value: &str) -> Self {
        self.options.set(name, value);
        self
    }

    pub fn link_option(mut self, name: &str, value: &str) -> Self {
        self.link_options.set(name, value);
        self
    }

    pub fn items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = Some(Children::Items(items));
        self
    }

    /// Use a prebuilt dropdown body instead of child items.
    pub fn markup_items(mut self, markup: &str) -> Self {
        self.items = Some(Children::Markup(markup.to_string()));
        self
    }

    /// Label ready for markup, escaped unless this item or `encode_default`
    /// says otherwise. `path` names the item in the error.
    pub fn label_html(&self, encode_default: bool, path: &str) -> WidgetResult<String> {
        let label = self
            .label
            .as_deref()
            .ok_or_else(|| WidgetError::MissingLabel {
                path: path.to_string(),
            })?;
        if self.encode.unwrap_or(encode_default) {
            Ok(html_escape(label))
        } else {
            Ok(label.to_string())
        }
    }

    /// The link's href, `#` when it has no target.
    pub fn href(&self, module: &str) -> String {
        self.url
            .as_ref()
            .map_or_else(|| "#".to_string(), |url| url.href(module))
    }
}

/// Dropdown content of a link item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
    Markup(String),
    Items(Vec<MenuItem>),
}

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    /// Literal href (anchor, external URL). Never matched against the route.
    Url(String),
    Route(RouteTarget),
}

impl Target {
    /// Build the href for this target. Relative routes are resolved against
    /// `module`, the unique id of the current module.
    pub fn href(&self, module: &str) -> String {
        match self {
            Target::Url(url) => url.clone(),
            Target::Route(route) => route.href(module),
        }
    }
}

/// A route path plus query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RouteSpec")]
pub struct RouteTarget {
    pub route: String,
    /// Query parameters. `None` values are ignored; the `#` key is the
    /// fragment.
    pub params: BTreeMap<String, Option<String>>,
}

impl RouteTarget {
    pub fn new(route: &str) -> Self {
        Self {
            route: route.to_string(),
            params: BTreeMap::new(),
        }
    }

    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), Some(value.to_string()));
        self
    }

    pub fn fragment(self, fragment: &str) -> Self {
        self.param(FRAGMENT_KEY, fragment)
    }

    /// Route path with the module prefix applied and outer slashes removed.
    pub fn resolved_route(&self, module: &str) -> String {
        let route = if self.route.starts_with('/') {
            self.route.clone()
        } else {
            format!("{module}/{}", self.route)
        };
        route.trim_matches('/').to_string()
    }

    /// Parameters taking part in matching and the query string.
    pub fn query_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().filter_map(|(name, value)| {
            if name == FRAGMENT_KEY {
                return None;
            }
            value.as_deref().map(|v| (name.as_str(), v))
        })
    }

    pub fn href(&self, module: &str) -> String {
        let mut href = format!("/{}", self.resolved_route(module));

        let query: Vec<String> = self
            .query_params()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect();
        if !query.is_empty() {
            href.push('?');
            href.push_str(&query.join("&"));
        }

        if let Some(Some(fragment)) = self.params.get(FRAGMENT_KEY) {
            href.push('#');
            href.push_str(&urlencoding::encode(fragment));
        }

        href
    }
}

/// Accepted spellings of a route target.
#[derive(Deserialize)]
#[serde(untagged)]
enum RouteSpec {
    Map {
        route: String,
        #[serde(default, deserialize_with = "de_params")]
        params: BTreeMap<String, Option<String>>,
    },
    Pair(String, #[serde(deserialize_with = "de_params")] BTreeMap<String, Option<String>>),
    Single((String,)),
}

impl From<RouteSpec> for RouteTarget {
    fn from(spec: RouteSpec) -> Self {
        match spec {
            RouteSpec::Map { route, params } | RouteSpec::Pair(route, params) => {
                Self { route, params }
            }
            RouteSpec::Single((route,)) => Self::new(&route),
        }
    }
}

/// A param value as written in config or passed by a template.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    pub(crate) fn into_string(self) -> String {
        match self {
            Scalar::Str(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Params accept any scalar and keep it as a string.
fn de_params<'de, D>(deserializer: D) -> Result<BTreeMap<String, Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<Scalar>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| (name, value.map(Scalar::into_string)))
        .collect())
}

/// Request-style params: scalars become strings, nulls are dropped.
pub(crate) fn de_request_params<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, Option<Scalar>>>::deserialize(deserializer)?;
    Ok(raw.map(|params| {
        params
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v.into_string())))
            .collect()
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn raw_and_link_items_from_json() {
        let json = r#"[
            "<li class=\"divider\"></li>",
            {"label": "Home", "url": "/"}
        ]"#;
        let items: Vec<MenuItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0], MenuItem::raw("<li class=\"divider\"></li>"));
        assert_eq!(items[1], MenuItem::from(LinkItem::new("Home").url("/")));
    }

    #[test]
    fn link_defaults() {
        let item: LinkItem = serde_json::from_str("{}").unwrap();
        assert!(item.visible);
        assert!(item.label.is_none());
        assert!(item.url.is_none());
        assert!(item.items.is_none());
    }

    #[test]
    fn route_target_spellings() {
        let map: Target =
            serde_json::from_str(r#"{"route": "blog/view", "params": {"id": 5}}"#).unwrap();
        let pair: Target = serde_json::from_str(r#"["blog/view", {"id": "5"}]"#).unwrap();
        let single: Target = serde_json::from_str(r#"["blog/index"]"#).unwrap();

        let expected = Target::Route(RouteTarget::new("blog/view").param("id", "5"));
        assert_eq!(map, expected);
        assert_eq!(pair, expected);
        assert_eq!(single, Target::Route(RouteTarget::new("blog/index")));
    }

    #[test]
    fn null_params_are_kept_but_skipped() {
        let target: RouteTarget =
            serde_json::from_str(r#"{"route": "site/index", "params": {"tab": null, "p": true}}"#)
                .unwrap();
        assert_eq!(target.params.get("tab"), Some(&None));
        let params: Vec<_> = target.query_params().collect();
        assert_eq!(params, vec![("p", "true")]);
    }

    #[test]
    fn href_for_route() {
        let target = RouteTarget::new("blog/view")
            .param("id", "5")
            .param("q", "a b&c")
            .fragment("comments");
        assert_eq!(target.href(""), "/blog/view?id=5&q=a%20b%26c#comments");
    }

    #[test]
    fn href_resolves_relative_routes_against_module() {
        let target = RouteTarget::new("post/index");
        assert_eq!(target.href("admin"), "/admin/post/index");
        assert_eq!(RouteTarget::new("/site/index").href("admin"), "/site/index");
    }

    #[test]
    fn label_html_and_href_defaults() {
        let item = LinkItem::new("A & B");
        assert_eq!(item.label_html(true, "items[0]").unwrap(), "A &amp; B");
        assert_eq!(item.label_html(false, "items[0]").unwrap(), "A & B");
        assert_eq!(
            item.clone().encode(false).label_html(true, "items[0]").unwrap(),
            "A & B"
        );
        assert_eq!(item.href("admin"), "#");

        let err = LinkItem::default().label_html(true, "items[3]").unwrap_err();
        assert_eq!(
            err,
            WidgetError::MissingLabel {
                path: "items[3]".to_string()
            }
        );
    }

    #[test]
    fn float_params_drop_trailing_zero() {
        let target: RouteTarget =
            serde_json::from_str(r#"{"route": "blog/view", "params": {"id": 5.0}}"#).unwrap();
        assert_eq!(target.params.get("id"), Some(&Some("5".to_string())));
    }

    #[test]
    fn children_markup_or_items() {
        let markup: Children = serde_json::from_str(r#""<ul></ul>""#).unwrap();
        assert_eq!(markup, Children::Markup("<ul></ul>".to_string()));
        let items: Children = serde_json::from_str(r#"[{"label": "A"}]"#).unwrap();
        assert_eq!(items, Children::Items(vec![MenuItem::from(LinkItem::new("A"))]));
    }
}
