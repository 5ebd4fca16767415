//! Tera integration.
//!
//! Registers the widgets as template functions so pages can render them
//! directly:
//!
//! ```text
//! {{ icon(name="fa-home", class="large") | safe }}
//! {{ nav(id="main-nav", config=menu, route=current_route, params=query) | safe }}
//! ```
//!
//! Function output is markup, so templates with autoescaping need `| safe`.

use std::collections::HashMap;

use tera::{Tera, Value};

use crate::client::ScriptRegistry;
use crate::html::Attributes;
use crate::icon::Icon;
use crate::menu::{Nav, NavConfig, RequestRoute, Scalar};

/// Id used by `nav()` when the template does not pass one.
const DEFAULT_NAV_ID: &str = "nav";

/// Register `icon()` and `nav()` on a Tera instance.
pub fn register_functions(tera: &mut Tera) {
    tera.register_function("icon", icon_function);
    tera.register_function("nav", nav_function);
}

fn str_arg<'a>(args: &'a HashMap<String, Value>, name: &str) -> Option<&'a str> {
    args.get(name).and_then(Value::as_str)
}

/// `icon(name, class?)`
fn icon_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let name = str_arg(args, "name")
        .ok_or_else(|| tera::Error::msg("icon(): missing required argument `name`"))?;

    let mut icon = Icon::new(name);
    if let Some(class) = str_arg(args, "class") {
        icon = icon.options(Attributes::new().with("class", class));
    }
    Ok(Value::String(icon.render()))
}

/// `nav(config, id?, route?, params?, module?)`
///
/// Scripts the menu registers are appended as a `<script>` block.
fn nav_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let config = args
        .get("config")
        .ok_or_else(|| tera::Error::msg("nav(): missing required argument `config`"))?;
    let config: NavConfig = serde_json::from_value(config.clone())
        .map_err(|e| tera::Error::chain("nav(): invalid `config`", e))?;

    let mut request = RequestRoute::new(str_arg(args, "route").unwrap_or_default());
    if let Some(module) = str_arg(args, "module") {
        request = request.module(module);
    }
    if let Some(Value::Object(params)) = args.get("params") {
        // same conversion as route params in config, so `5.0` matches `5`
        for (name, value) in params {
            if let Ok(scalar) = serde_json::from_value::<Scalar>(value.clone()) {
                request = request.param(name, &scalar.into_string());
            }
        }
    }

    let nav = Nav::new(str_arg(args, "id").unwrap_or(DEFAULT_NAV_ID), config);
    let mut scripts = ScriptRegistry::new();
    let html = nav
        .render(&request, &mut scripts)
        .map_err(|e| tera::Error::chain("nav(): render failed", e))?;

    Ok(Value::String(html + &scripts.render()))
}
