//! Menu configuration loading.
//!
//! Hosts keep menu definitions next to their other site config. Any of the
//! usual formats parse into the same [`NavConfig`]; all options not present
//! in the source keep their defaults.

use anyhow::{Context, Result};
use tracing::debug;

use crate::menu::NavConfig;

impl NavConfig {
    /// Parse a YAML menu definition.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let config: Self =
            serde_yml::from_str(source).context("failed to parse YAML menu config")?;
        config.log_loaded("yaml");
        Ok(config)
    }

    /// Parse a JSON menu definition.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(source).context("failed to parse JSON menu config")?;
        config.log_loaded("json");
        Ok(config)
    }

    /// Parse a TOML menu definition. TOML has no null, so route params can
    /// only be strings, numbers or booleans here.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("failed to parse TOML menu config")?;
        config.log_loaded("toml");
        Ok(config)
    }

    fn log_loaded(&self, format: &str) {
        debug!(
            format,
            items = self.items.len(),
            mobile_items = self.mobile_items.len(),
            "loaded menu config"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::menu::{Children, LinkItem, MenuItem, NavConfig, RouteTarget, Target};

    #[test]
    fn yaml_config() {
        let yaml = r#"
activate_parents: true
items:
  - label: Home
    url: { route: site/index }
  - '<li class="divider"></li>'
  - label: Blog
    visible: true
    options: { class: blog }
    items:
      - label: Post
        url: [blog/view, { id: 5 }]
"#;
        let config = NavConfig::from_yaml_str(yaml).unwrap();
        assert!(config.activate_parents);
        assert!(config.encode_labels);
        assert_eq!(config.items.len(), 3);
        assert_eq!(config.items[1], MenuItem::raw("<li class=\"divider\"></li>"));

        let MenuItem::Link(blog) = &config.items[2] else {
            panic!("expected link item");
        };
        assert_eq!(blog.options.get("class"), Some("blog"));
        let Some(Children::Items(children)) = &blog.items else {
            panic!("expected child items");
        };
        assert_eq!(
            children[0],
            MenuItem::from(
                LinkItem::new("Post").route(RouteTarget::new("blog/view").param("id", "5"))
            )
        );
    }

    #[test]
    fn json_config() {
        let json = r##"{
            "encode_labels": false,
            "button_collapse": true,
            "items": [{"label": "Docs", "url": "https://example.com/docs", "active": true}],
            "mobile_items": [{"label": "Top", "url": {"route": "site/index", "params": {"#": "top"}}}]
        }"##;
        let config = NavConfig::from_json_str(json).unwrap();
        assert!(!config.encode_labels);
        assert!(config.button_collapse);
        assert_eq!(config.button_collapse_label, r#"<i class="fa fa-bars"></i>"#);

        let MenuItem::Link(top) = &config.mobile_items[0] else {
            panic!("expected link item");
        };
        assert_eq!(top.url.as_ref().map(|u| u.href("")).as_deref(), Some("/site/index#top"));
    }

    #[test]
    fn toml_config() {
        let toml = r#"
route = "blog/view"

[params]
id = "5"

[[items]]
label = "Post"
url = { route = "blog/view", params = { id = 5 } }
"#;
        let config = NavConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.route.as_deref(), Some("blog/view"));
        let MenuItem::Link(post) = &config.items[0] else {
            panic!("expected link item");
        };
        assert_eq!(
            post.url,
            Some(Target::Route(RouteTarget::new("blog/view").param("id", "5")))
        );
    }

    #[test]
    fn numeric_override_params_are_stringified() {
        let json = r#"{
            "route": "blog/view",
            "params": {"id": 5, "draft": false, "tab": null},
            "items": [{"label": "Post", "url": ["blog/view", {"id": 5}]}]
        }"#;
        let config = NavConfig::from_json_str(json).unwrap();
        let params = config.params.as_ref().unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("5"));
        assert_eq!(params.get("draft").map(String::as_str), Some("false"));
        assert!(!params.contains_key("tab"));

        let toml = r#"
route = "blog/view"
params = { id = 5 }
"#;
        let config = NavConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config.params.unwrap().get("id").map(String::as_str),
            Some("5")
        );
    }

    #[test]
    fn missing_override_params_stay_unset() {
        let config = NavConfig::from_json_str(r#"{"items": []}"#).unwrap();
        assert!(config.params.is_none());
    }

    #[test]
    fn invalid_config_reports_context() {
        let err = NavConfig::from_json_str("{\"items\": 5}").unwrap_err();
        assert!(err.to_string().contains("failed to parse JSON menu config"));
    }
}
