//! Category names for simulations built with the builder DSL
//!
//! `SimulationMetadata` maps human-readable category names to their position
//! in a `SimulationConfig`, so a caller can pick the control category by name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::ControlCategory;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "MetadataParts")]
pub struct SimulationMetadata {
    /// Category names in category order
    pub names: Vec<String>,

    /// Name to category index reverse lookup, derived from `names`
    #[serde(skip)]
    pub indices: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct MetadataParts {
    names: Vec<String>,
}

impl From<MetadataParts> for SimulationMetadata {
    fn from(parts: MetadataParts) -> Self {
        let mut metadata = Self::new();
        for name in parts.names {
            metadata.register_category(name);
        }
        metadata
    }
}

impl SimulationMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next category. A repeated name points at the latest category.
    pub fn register_category(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        let index = self.names.len();
        self.indices.insert(name.clone(), index);
        self.names.push(name);
        index
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    #[must_use]
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Control category selector for a named category
    #[must_use]
    pub fn control(&self, name: &str) -> Option<ControlCategory> {
        self.index_of(name).map(ControlCategory::Index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut metadata = SimulationMetadata::new();
        assert_eq!(metadata.register_category("treatment"), 0);
        assert_eq!(metadata.register_category("placebo"), 1);

        assert_eq!(metadata.index_of("placebo"), Some(1));
        assert_eq!(metadata.name_of(0), Some("treatment"));
        assert_eq!(metadata.control("placebo"), Some(ControlCategory::Index(1)));
        assert_eq!(metadata.control("missing"), None);
    }

    #[test]
    fn test_deserialize_rebuilds_lookup() {
        let metadata: SimulationMetadata =
            serde_json::from_str(r#"{"names":["treatment","placebo"]}"#).unwrap();
        assert_eq!(metadata.index_of("treatment"), Some(0));
        assert_eq!(metadata.control("placebo"), Some(ControlCategory::Index(1)));
    }

    #[test]
    fn test_serialize_writes_names_only() {
        let mut metadata = SimulationMetadata::new();
        metadata.register_category("a");
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["names"][0], "a");
        assert!(value.get("indices").is_none());

        let restored: SimulationMetadata = serde_json::from_value(value).unwrap();
        assert_eq!(restored, metadata);
    }
}
