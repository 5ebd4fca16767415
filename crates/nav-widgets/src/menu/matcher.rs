//! Active-item matching against the current request.

use std::collections::HashMap;

use super::item::{LinkItem, Target};

/// The request a menu is rendered for, as seen by the host framework.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestRoute {
    /// Route of the current page, e.g. `blog/view`.
    pub route: String,
    /// Query parameters of the current request.
    pub params: HashMap<String, String>,
    /// Unique id of the module handling the request; empty for the root.
    pub module: String,
}

impl RequestRoute {
    pub fn new(route: &str) -> Self {
        Self {
            route: route.to_string(),
            ..Self::default()
        }
    }

    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    pub fn module(mut self, module: &str) -> Self {
        self.module = module.to_string();
        self
    }
}

/// Decides whether link targets point at the current page.
#[derive(Debug, Clone, Copy)]
pub struct ActiveMatcher<'a> {
    route: &'a str,
    params: &'a HashMap<String, String>,
    module: &'a str,
}

impl<'a> ActiveMatcher<'a> {
    pub fn new(route: &'a str, params: &'a HashMap<String, String>, module: &'a str) -> Self {
        Self {
            route: route.trim_matches('/'),
            params,
            module,
        }
    }

    pub fn for_request(request: &'a RequestRoute) -> Self {
        Self::new(&request.route, &request.params, &request.module)
    }

    /// Route comparison only; ignores any explicit `active` flag.
    ///
    /// Literal URLs never match. A route matches when its resolved path equals
    /// the current route and every declared non-null parameter (other than
    /// the fragment) is present with an equal value.
    pub fn matches(&self, target: &Target) -> bool {
        let Target::Route(route) = target else {
            return false;
        };

        if route.resolved_route(self.module) != self.route {
            return false;
        }

        route
            .query_params()
            .all(|(name, value)| self.params.get(name).is_some_and(|v| v == value))
    }

    /// Active state of an item: the explicit flag if set, otherwise the
    /// route comparison.
    pub fn is_active(&self, item: &LinkItem) -> bool {
        match item.active {
            Some(active) => active,
            None => item.url.as_ref().is_some_and(|url| self.matches(url)),
        }
    }
}
