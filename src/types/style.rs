//! Icon styles.
//!
//! A style is an independent family of icons (e.g. `solid`, `regular`)
//! that lives in its own source subdirectory and produces its own sheet.

use std::collections::BTreeMap;

/// Styles built when no manifest says otherwise.
pub const DEFAULT_STYLES: &[&str] = &["brands", "regular", "solid"];

/// Ordered set of style names, each toggled on or off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    styles: BTreeMap<String, bool>,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            styles: DEFAULT_STYLES
                .iter()
                .map(|name| (name.to_string(), true))
                .collect(),
        }
    }
}

impl StyleSet {
    /// An empty set with no styles at all.
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// Enable or disable a style, adding it if unknown.
    pub fn set(&mut self, name: impl Into<String>, enabled: bool) {
        self.styles.insert(name.into(), enabled);
    }

    /// Apply overrides on top of the current toggles.
    pub fn merge(&mut self, overrides: &BTreeMap<String, bool>) {
        for (name, enabled) in overrides {
            self.set(name.clone(), *enabled);
        }
    }

    /// Keep only the named styles enabled; unknown names are added.
    pub fn restrict_to(&mut self, names: &[String]) {
        for enabled in self.styles.values_mut() {
            *enabled = false;
        }
        for name in names {
            self.set(name.clone(), true);
        }
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.styles.get(name).copied().unwrap_or(false)
    }

    /// Enabled style names in name order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.styles
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
    }

    /// Number of styles, enabled or not.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
