//! Route descriptor types.
//!
//! A route descriptor is the read-only snapshot of the current request's
//! logical address, supplied by the host router after routing resolves.
//! It stays fixed for the duration of one request.

use serde::{Deserialize, Serialize};

/// The logical address of the current request.
///
/// All three fields hold the exact string values the host router reports;
/// a field the router did not resolve is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// The component handling the request (e.g., "com_content").
    pub component: String,

    /// The active view within the component (e.g., "article").
    pub view: String,

    /// The layout variant selected for the view (e.g., "edit").
    pub layout: String,
}

impl RouteDescriptor {
    /// Create a route descriptor from the three routing values.
    pub fn new(
        component: impl Into<String>,
        view: impl Into<String>,
        layout: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            view: view.into(),
            layout: layout.into(),
        }
    }
}
