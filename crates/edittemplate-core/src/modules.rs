//! Page modules and the removal filter.
//!
//! Modules are opaque host records; the plugin only ever reads the integer
//! id and hands everything else back untouched. Filtering produces a new
//! sequence with matching entries removed and the remaining order
//! preserved.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A module destined for a position on the page.
///
/// Created by the host's module machinery and returned to it; the plugin
/// never fabricates or mutates these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Host-assigned module id. Modules without an id never match a
    /// removal list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The layout position slot this module renders into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Remaining host-defined payload, passed through untouched.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl ModuleDescriptor {
    /// A bare module with just an id, as used by tests and the demo.
    pub fn with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            position: None,
            payload: Value::Null,
        }
    }
}

/// Remove every module whose id appears in `ids`, preserving the relative
/// order of the survivors.
///
/// Modules without an id are kept. The input is consumed and a new
/// sequence returned; the host replaces its list with the result.
pub fn filter_modules(modules: Vec<ModuleDescriptor>, ids: &[i64]) -> Vec<ModuleDescriptor> {
    if ids.is_empty() {
        return modules;
    }

    modules
        .into_iter()
        .filter(|module| match module.id {
            Some(id) => !ids.contains(&id),
            None => true,
        })
        .collect()
}
