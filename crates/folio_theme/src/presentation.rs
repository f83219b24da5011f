//! Presentation layer for the active scheme

use std::collections::BTreeSet;

/// Class toggled on the document root while the dark scheme is active
pub const DARK_CLASS: &str = "dark";

/// Something that can reflect the active scheme visually
pub trait PresentationLayer {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// In-memory class list for the document root
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootClassList {
    classes: BTreeSet<String>,
}

impl RootClassList {
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Space-separated value for a `class` attribute
    pub fn to_attribute(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PresentationLayer for RootClassList {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.contains(class)
    }
}
