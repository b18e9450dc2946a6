//! Label text collaborators used when drawing node names.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Host-supplied label substitution.
pub trait LabelResolver {
    /// Display text for `label`, or `None` to keep the raw label.
    fn resolve(&self, label: &str) -> Option<String>;

    /// Whether `label` names the local host and should be emphasised.
    fn is_local(&self, label: &str) -> bool;

    /// Text actually drawn for `label`.
    fn display(&self, label: &str) -> String {
        let key = if self.is_local(label) {
            format!("*** {label} ***")
        } else {
            label.to_owned()
        };
        match self.resolve(&key) {
            Some(text) if !text.is_empty() => text,
            _ => key,
        }
    }
}

/// Draws labels verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawLabels;

impl LabelResolver for RawLabels {
    fn resolve(&self, _label: &str) -> Option<String> {
        None
    }

    fn is_local(&self, _label: &str) -> bool {
        false
    }
}

/// Lookup table of display names, e.g. reverse-DNS results keyed by address.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelTable {
    pub names: HashMap<String, String>,
    pub local: HashSet<String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, name: impl Into<String>) {
        self.names.insert(label.into(), name.into());
    }

    pub fn mark_local(&mut self, label: impl Into<String>) {
        self.local.insert(label.into());
    }
}

impl LabelResolver for LabelTable {
    fn resolve(&self, label: &str) -> Option<String> {
        self.names.get(label).cloned()
    }

    fn is_local(&self, label: &str) -> bool {
        self.local.contains(label)
    }
}
