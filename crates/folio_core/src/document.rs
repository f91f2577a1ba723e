//! Document root contract
//!
//! The theme layer writes custom CSS properties (`--name: value`) and a small
//! number of attributes (e.g. `data-theme`) onto the page's root element.
//! [`DocumentRoot`] is the seam between that logic and whatever hosts the page:
//! a browser binding, a server-side renderer, or [`MemoryDocument`] in tests.

use indexmap::IndexMap;

/// Writable view of the page's root element
pub trait DocumentRoot {
    /// Set a custom property, replacing any previous value
    fn set_property(&mut self, name: &str, value: &str);

    /// Read a custom property
    fn property(&self, name: &str) -> Option<&str>;

    /// Remove a custom property, returning its old value
    fn remove_property(&mut self, name: &str) -> Option<String>;

    /// All custom properties currently set, in insertion order
    fn properties(&self) -> Vec<(String, String)>;

    /// Set an attribute on the root element
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Read an attribute from the root element
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// In-memory document root
///
/// Keeps properties in insertion order so rendered output is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    properties: IndexMap<String, String>,
    attributes: IndexMap<String, String>,
    revision: u64,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of write operations applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Render the custom properties as a `:root` CSS block
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            css.push_str("  ");
            css.push_str(name);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }
        css.push('}');
        css
    }
}

impl DocumentRoot for MemoryDocument {
    fn set_property(&mut self, name: &str, value: &str) {
        self.revision += 1;
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    fn remove_property(&mut self, name: &str) -> Option<String> {
        self.revision += 1;
        self.properties.shift_remove(name)
    }

    fn properties(&self) -> Vec<(String, String)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.revision += 1;
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_property_overwrites() {
        let mut doc = MemoryDocument::new();
        doc.set_property("--color-text-primary", "#000000");
        doc.set_property("--color-text-primary", "#ffffff");

        assert_eq!(doc.property("--color-text-primary"), Some("#ffffff"));
        assert_eq!(doc.properties().len(), 1);
        assert_eq!(doc.revision(), 2);
    }

    #[test]
    fn test_remove_property() {
        let mut doc = MemoryDocument::new();
        doc.set_property("--radius-sm", "4px");

        assert_eq!(doc.remove_property("--radius-sm"), Some("4px".to_string()));
        assert_eq!(doc.property("--radius-sm"), None);
        assert_eq!(doc.remove_property("--radius-sm"), None);
    }

    #[test]
    fn test_to_css_keeps_insertion_order() {
        let mut doc = MemoryDocument::new();
        doc.set_property("--spacing-xs", "0.25rem");
        doc.set_property("--spacing-sm", "0.5rem");

        assert_eq!(
            doc.to_css(),
            ":root {\n  --spacing-xs: 0.25rem;\n  --spacing-sm: 0.5rem;\n}"
        );
    }

    #[test]
    fn test_attributes_are_separate_from_properties() {
        let mut doc = MemoryDocument::new();
        doc.set_attribute("data-theme", "matrix");

        assert_eq!(doc.attribute("data-theme"), Some("matrix"));
        assert!(doc.properties().is_empty());
    }
}
