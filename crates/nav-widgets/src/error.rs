//! Widget error types.

use thiserror::Error;

/// Errors raised while rendering a widget.
///
/// Every variant is a configuration mistake in the item tree; rendering
/// stops at the first one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    /// A structured menu item has no label.
    #[error("menu item {path}: the 'label' option is required")]
    MissingLabel { path: String },
}

/// Result type alias using WidgetError.
pub type WidgetResult<T> = Result<T, WidgetError>;
