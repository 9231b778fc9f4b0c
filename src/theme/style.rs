//! Where palette colours end up: the document root's inline style.

use std::collections::BTreeMap;
use std::fmt::Write;

/// Sink for CSS custom properties.
pub trait StyleTarget {
    /// `name` includes the leading `--`.
    fn set_property(&mut self, name: &str, value: &str);
}

/// In-memory root style; also renders itself as a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootStyle {
    properties: BTreeMap<String, String>,
    writes: usize,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Total number of `set_property` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn to_css(&self) -> String {
        self.to_css_rule(":root")
    }

    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in &self.properties {
            // Writing to a String cannot fail
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl StyleTarget for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.properties.insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_render() {
        let mut style = RootStyle::new();
        style.set_property("--ring", "red");
        style.set_property("--accent", "blue");
        style.set_property("--ring", "green");

        assert_eq!(style.get("--ring"), Some("green"));
        assert_eq!(style.writes(), 3);
        assert_eq!(style.to_css(), ":root {\n  --accent: blue;\n  --ring: green;\n}\n");
    }

    #[test]
    fn test_empty_rule() {
        assert_eq!(RootStyle::new().to_css_rule(".dark"), ".dark {\n}\n");
    }
}
