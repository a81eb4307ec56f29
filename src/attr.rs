//! Attribute list for view elements
//!
//! Attributes are an ordered `Vec<(String, String)>`. Order is the order
//! the converter sets them in (`href` before `target` for links), which
//! keeps rendered output and fingerprints stable.

/// Element attributes as ordered key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Standard attribute names set by the converter
pub mod names {
    pub const HREF: &str = "href";
    pub const TARGET: &str = "target";
    pub const CLASS: &str = "class";
}

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Set an attribute only when a value is present
    fn set_opt_attr(&mut self, name: impl Into<String>, value: Option<impl Into<String>>);
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn set_opt_attr(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set_attr(name, value);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
