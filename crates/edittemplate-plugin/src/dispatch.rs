//! Lifecycle dispatch.
//!
//! The host invokes three lifecycle points per request: after routing,
//! before render, and after each module list is built. Handlers register
//! in an explicit table at startup and run in registration order; the
//! module list is threaded through successive handlers and the final
//! sequence handed back to the host. Render and module-list dispatch may
//! interleave in any order within the render phase, so handlers must not
//! depend on one running before the other.

use tracing::trace;

use edittemplate_core::ModuleDescriptor;

use crate::host::HostContext;

/// A handler bound to the host's per-request lifecycle points.
///
/// Every method defaults to a no-op so handlers only implement the points
/// they care about.
pub trait LifecycleHandler {
    /// Invoked once per request after routing resolves, before rendering.
    fn on_after_route(&self, host: &mut dyn HostContext) {
        let _ = host;
    }

    /// Invoked once per request before the response body is generated.
    fn on_before_render(&self, host: &mut dyn HostContext) {
        let _ = host;
    }

    /// Invoked after the host builds the module list for a position.
    ///
    /// Returns the (possibly filtered) list; the host replaces its own
    /// list with the result.
    fn on_after_module_list(
        &self,
        host: &mut dyn HostContext,
        modules: Vec<ModuleDescriptor>,
    ) -> Vec<ModuleDescriptor> {
        let _ = host;
        modules
    }
}

/// The handler table built at startup.
#[derive(Default)]
pub struct HookRegistry {
    handlers: Vec<Box<dyn LifecycleHandler>>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers run in registration order.
    pub fn register(&mut self, handler: Box<dyn LifecycleHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch the after-route point to every handler.
    pub fn after_route(&self, host: &mut dyn HostContext) {
        trace!(handlers = self.handlers.len(), "dispatching after_route");
        for handler in &self.handlers {
            handler.on_after_route(host);
        }
    }

    /// Dispatch the before-render point to every handler.
    pub fn before_render(&self, host: &mut dyn HostContext) {
        trace!(handlers = self.handlers.len(), "dispatching before_render");
        for handler in &self.handlers {
            handler.on_before_render(host);
        }
    }

    /// Dispatch the after-module-list point, threading the list through
    /// every handler.
    pub fn after_module_list(
        &self,
        host: &mut dyn HostContext,
        mut modules: Vec<ModuleDescriptor>,
    ) -> Vec<ModuleDescriptor> {
        trace!(
            handlers = self.handlers.len(),
            modules = modules.len(),
            "dispatching after_module_list"
        );
        for handler in &self.handlers {
            modules = handler.on_after_module_list(host, modules);
        }
        modules
    }
}
