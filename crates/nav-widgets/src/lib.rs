//! Icon and navigation menu widgets for server-rendered pages.
//!
//! Widgets turn plain configuration into markup strings the host template
//! inserts into a page. Client-side behavior is handed to a [`ClientScript`]
//! rather than written inline.

pub mod client;
pub mod config;
pub mod error;
pub mod html;
pub mod icon;
pub mod menu;
pub mod template;

pub use client::{ClientScript, NoopClientScript, ScriptRegistry};
pub use error::{WidgetError, WidgetResult};
pub use icon::Icon;
pub use menu::{LinkItem, MenuItem, Nav, NavConfig, RequestRoute, RouteTarget};
