//! Navigation menus.
//!
//! Menus are declared as a tree of [`MenuItem`]s and rendered by [`Nav`]:
//! - Route-based active state via [`ActiveMatcher`]
//! - One level of dropdowns per top-level item, rendered by [`Dropdown`]
//! - A second, mobile rendering of the same (or a separate) item list

mod dropdown;
mod item;
mod matcher;
mod nav;

pub use dropdown::Dropdown;
pub use item::{Children, FRAGMENT_KEY, LinkItem, MenuItem, RouteTarget, Target};
pub(crate) use item::Scalar;
pub use matcher::{ActiveMatcher, RequestRoute};
pub use nav::{ASSET_BUNDLE, Nav, NavConfig};
