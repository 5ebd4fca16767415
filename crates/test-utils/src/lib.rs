//! nav-widgets test utilities.
//!
//! Fixture builders for requests and menu items, and a helper that renders
//! a menu while capturing what it registers client-side.

use nav_widgets::{
    LinkItem, MenuItem, Nav, NavConfig, RequestRoute, RouteTarget, ScriptRegistry, WidgetResult,
};

/// Create a request for `route` with the given query parameters.
pub fn test_request(route: &str, params: &[(&str, &str)]) -> RequestRoute {
    params
        .iter()
        .fold(RequestRoute::new(route), |req, (name, value)| {
            req.param(name, value)
        })
}

/// Create a link item pointing at `#`.
pub fn link(label: &str) -> LinkItem {
    LinkItem::new(label)
}

/// Create a link item pointing at a route with parameters.
pub fn route_link(label: &str, route: &str, params: &[(&str, &str)]) -> LinkItem {
    let target = params
        .iter()
        .fold(RouteTarget::new(route), |target, (name, value)| {
            target.param(name, value)
        });
    LinkItem::new(label).route(target)
}

/// A dropdown parent holding `children`.
pub fn dropdown(label: &str, children: Vec<MenuItem>) -> LinkItem {
    LinkItem::new(label).items(children)
}

/// Result of [`render_nav`].
#[derive(Debug)]
pub struct Rendered {
    pub html: String,
    pub scripts: ScriptRegistry,
}

/// Render `config` as nav `w0` for `request`, capturing registered scripts.
pub fn render_nav(config: NavConfig, request: &RequestRoute) -> WidgetResult<Rendered> {
    let mut scripts = ScriptRegistry::new();
    let html = Nav::new("w0", config).render(request, &mut scripts)?;
    Ok(Rendered { html, scripts })
}

/// Desktop list of a rendered nav (everything before the mobile panel).
pub fn desktop_part(html: &str) -> &str {
    html.split("<ul id=\"w0-mobile\"").next().unwrap_or(html)
}

/// Mobile panel of a rendered nav, empty if there is none.
pub fn mobile_part(html: &str) -> &str {
    html.find("<ul id=\"w0-mobile\"")
        .map(|start| &html[start..])
        .unwrap_or_default()
}
