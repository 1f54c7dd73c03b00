//! Host framework abstraction.
//!
//! The plugin consumes the host through this narrow seam: read the current
//! client, route, and template id; write a request attribute; append to
//! the output stream; register inline styles. `InMemoryHost` is the
//! reference implementation backing the demo binary and the test suite.

use std::collections::HashMap;

use serde_json::Value;

use edittemplate_core::RouteDescriptor;

/// Which host client issued the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    /// The public, front-end-facing site.
    Frontend,
    /// The administrative back end.
    Admin,
}

/// Request-scoped view of the host framework.
///
/// One method per collaborator interface. All values are request-scoped
/// and supplied fresh by the host on every request; nothing here survives
/// a request.
pub trait HostContext {
    /// The client the request was routed to.
    fn client_kind(&self) -> ClientKind;

    /// Snapshot of the current route.
    fn current_route(&self) -> RouteDescriptor;

    /// Id of the template style actually selected for this render.
    fn current_template_id(&self) -> i64;

    /// Write a value into the request's mutable attribute bag.
    ///
    /// Last write wins; the host's template-resolution step reads the bag
    /// downstream.
    fn set_request_attribute(&mut self, key: &str, value: Value);

    /// Append raw HTML to the response output stream.
    fn append_output(&mut self, html: &str);

    /// Register CSS as an inline style asset.
    ///
    /// The host's asset manager collapses repeated registrations under the
    /// same `name` within one request; the last registration wins.
    fn register_inline_style(&mut self, css: &str, name: &str);
}

/// In-memory host implementation.
///
/// Holds the request-scoped state a real host would own; the demo binary
/// and the tests inspect its fields after dispatch.
#[derive(Debug, Clone)]
pub struct InMemoryHost {
    client_kind: ClientKind,
    route: RouteDescriptor,
    template_id: i64,

    /// Request attribute bag, keyed by attribute name.
    pub attributes: HashMap<String, Value>,

    /// Accumulated response output.
    pub output: String,

    /// Registered inline styles as (name, css) pairs, deduped by name.
    pub inline_styles: Vec<(String, String)>,
}

impl InMemoryHost {
    /// Create a host for one simulated request.
    pub fn new(client_kind: ClientKind, route: RouteDescriptor, template_id: i64) -> Self {
        Self {
            client_kind,
            route,
            template_id,
            attributes: HashMap::new(),
            output: String::new(),
            inline_styles: Vec::new(),
        }
    }

    /// Create a host for one simulated front-end request.
    pub fn frontend(route: RouteDescriptor, template_id: i64) -> Self {
        Self::new(ClientKind::Frontend, route, template_id)
    }

    /// Look up a request attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

impl HostContext for InMemoryHost {
    fn client_kind(&self) -> ClientKind {
        self.client_kind
    }

    fn current_route(&self) -> RouteDescriptor {
        self.route.clone()
    }

    fn current_template_id(&self) -> i64 {
        self.template_id
    }

    fn set_request_attribute(&mut self, key: &str, value: Value) {
        self.attributes.insert(key.to_string(), value);
    }

    fn append_output(&mut self, html: &str) {
        self.output.push_str(html);
    }

    fn register_inline_style(&mut self, css: &str, name: &str) {
        if let Some(entry) = self.inline_styles.iter_mut().find(|(n, _)| n == name) {
            entry.1 = css.to_string();
        } else {
            self.inline_styles
                .push((name.to_string(), css.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_attribute_last_write_wins() {
        let mut host = InMemoryHost::frontend(RouteDescriptor::default(), 0);

        host.set_request_attribute("templateStyle", json!(3));
        host.set_request_attribute("templateStyle", json!(5));

        assert_eq!(host.attribute("templateStyle"), Some(&json!(5)));
        assert_eq!(host.attributes.len(), 1);
    }

    #[test]
    fn test_inline_styles_dedupe_by_name() {
        let mut host = InMemoryHost::frontend(RouteDescriptor::default(), 0);

        host.register_inline_style("a { color: red; }", "styling");
        host.register_inline_style("a { color: blue; }", "styling");
        host.register_inline_style("b { margin: 0; }", "other");

        assert_eq!(
            host.inline_styles,
            vec![
                ("styling".to_string(), "a { color: blue; }".to_string()),
                ("other".to_string(), "b { margin: 0; }".to_string()),
            ]
        );
    }

    #[test]
    fn test_output_appends_in_order() {
        let mut host = InMemoryHost::frontend(RouteDescriptor::default(), 0);

        host.append_output("<p>first</p>");
        host.append_output("<p>second</p>");

        assert_eq!(host.output, "<p>first</p><p>second</p>");
    }
}
