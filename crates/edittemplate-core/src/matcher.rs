//! Editing-context matching.
//!
//! The plugin triggers on requests whose component, view, and layout all
//! fall inside configured allow-lists. Lists arrive as comma-separated
//! strings; an empty list imposes no constraint on its dimension, but a
//! configuration with all three lists empty matches nothing at all, so an
//! unconfigured plugin stays inert.

use serde::{Deserialize, Serialize};

use crate::route::RouteDescriptor;

/// Parse a comma-separated allow-list into its entries.
///
/// Entries are trimmed; empty and whitespace-only entries are dropped, so a
/// malformed list degrades to fewer (or no) constraints rather than an
/// error.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Allow-lists describing the editing context.
///
/// Parsed once per request; entries never contain leading/trailing
/// whitespace and are never empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Allowed component values; empty means unconstrained.
    pub components: Vec<String>,

    /// Allowed view values; empty means unconstrained.
    pub views: Vec<String>,

    /// Allowed layout values; empty means unconstrained.
    pub layouts: Vec<String>,
}

impl MatchConfig {
    /// Build a match configuration from the three raw comma-separated
    /// lists.
    pub fn from_lists(components: &str, views: &str, layouts: &str) -> Self {
        Self {
            components: parse_list(components),
            views: parse_list(views),
            layouts: parse_list(layouts),
        }
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.views.is_empty() && self.layouts.is_empty()
    }

    /// Check whether a route falls inside the configured editing context.
    ///
    /// Every configured (non-empty) list must contain the corresponding
    /// route field exactly; comparison is case-sensitive. A fully empty
    /// configuration matches nothing.
    pub fn matches(&self, route: &RouteDescriptor) -> bool {
        if self.is_empty() {
            return false;
        }

        if !self.components.is_empty() && !self.components.contains(&route.component) {
            return false;
        }

        if !self.views.is_empty() && !self.views.contains(&route.view) {
            return false;
        }

        if !self.layouts.is_empty() && !self.layouts.contains(&route.layout) {
            return false;
        }

        true
    }
}
