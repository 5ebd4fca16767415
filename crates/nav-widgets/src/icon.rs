//! Font icon widget.

use crate::html::{Attributes, tag};

/// Class token every icon carries.
const ICON_CLASS: &str = "fa";

/// An icon rendered as an empty element, e.g. `<i class="fa fa-home"></i>`.
#[derive(Debug, Clone)]
pub struct Icon {
    name: String,
    tag_name: String,
    options: Attributes,
}

impl Icon {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tag_name: "i".to_string(),
            options: Attributes::new(),
        }
    }

    /// Extra attributes; a `class` here is kept ahead of the icon classes.
    pub fn options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    pub fn tag_name(mut self, tag_name: &str) -> Self {
        self.tag_name = tag_name.to_string();
        self
    }

    pub fn render(&self) -> String {
        let mut options = self.options.clone();
        options.add_class(ICON_CLASS);
        options.add_class(&self.name);
        tag(&self.tag_name, "", &options)
    }
}
