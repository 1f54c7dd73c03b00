//! The edit-template plugin.
//!
//! Three lifecycle handlers share one decision: is this request inside the
//! configured editing context? After routing the plugin overrides the
//! template style; before render it emits the optional debug panel and
//! registers the configured inline CSS; after the module list is built it
//! drops the configured modules. Render decoration and module filtering
//! additionally trigger on template-id equality when
//! `disable_modules_on_template` is set. The route override deliberately
//! does not, so the override can never trigger on its own resulting
//! template id.

use serde_json::json;
use tracing::debug;

use edittemplate_core::{filter_modules, ModuleDescriptor, Params, PluginConfig};

use crate::dispatch::LifecycleHandler;
use crate::host::{ClientKind, HostContext};
use crate::panel::render_debug_panel;

/// Request attribute read by the host's template-resolution step.
pub const TEMPLATE_STYLE_ATTRIBUTE: &str = "templateStyle";

/// Asset name under which the editing-context CSS registers. The host's
/// asset manager collapses repeated registrations with the same name.
pub const EDITPAGE_STYLE_NAME: &str = "edittemplate.editpage_styling";

/// The plugin. Holds the typed configuration for the current request and
/// nothing else; no state survives across requests.
#[derive(Debug, Clone, Default)]
pub struct EditTemplatePlugin {
    config: PluginConfig,
}

impl EditTemplatePlugin {
    /// Create the plugin from an already-normalized configuration.
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    /// Create the plugin from the host's raw parameter bag.
    pub fn from_params(params: &Params) -> Self {
        Self::new(PluginConfig::from_params(params))
    }

    /// The active configuration.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// True when the current route falls inside the editing context.
    fn in_editing_context(&self, host: &dyn HostContext) -> bool {
        self.config.match_config.matches(&host.current_route())
    }

    /// True when template-id triggering is enabled and the rendered
    /// template already is the configured override.
    fn template_already_matches(&self, host: &dyn HostContext) -> bool {
        self.config.disable_modules_on_template
            && self.config.template_style == host.current_template_id()
    }
}

impl LifecycleHandler for EditTemplatePlugin {
    fn on_after_route(&self, host: &mut dyn HostContext) {
        if host.client_kind() != ClientKind::Frontend {
            return;
        }

        if !self.in_editing_context(host) {
            return;
        }

        debug!(
            template_style = self.config.template_style,
            "editing context matched, overriding template style"
        );
        host.set_request_attribute(TEMPLATE_STYLE_ATTRIBUTE, json!(self.config.template_style));
    }

    fn on_before_render(&self, host: &mut dyn HostContext) {
        if host.client_kind() != ClientKind::Frontend {
            return;
        }

        // The panel is tied to the debug flag alone, not to the match
        if self.config.debug {
            let panel = render_debug_panel(&host.current_route());
            host.append_output(&panel);
        }

        if self.config.editpage_styling.is_empty() {
            return;
        }

        if self.in_editing_context(host) || self.template_already_matches(host) {
            debug!(name = EDITPAGE_STYLE_NAME, "registering editing-context styling");
            host.register_inline_style(&self.config.editpage_styling, EDITPAGE_STYLE_NAME);
        }
    }

    fn on_after_module_list(
        &self,
        host: &mut dyn HostContext,
        modules: Vec<ModuleDescriptor>,
    ) -> Vec<ModuleDescriptor> {
        if host.client_kind() != ClientKind::Frontend {
            return modules;
        }

        // An empty removal list skips the whole step, match or not
        if self.config.disable_modules.is_empty() {
            return modules;
        }

        if !(self.in_editing_context(host) || self.template_already_matches(host)) {
            return modules;
        }

        let before = modules.len();
        let filtered = filter_modules(modules, &self.config.disable_modules);
        debug!(
            removed = before - filtered.len(),
            "removed configured modules from the page"
        );
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::InMemoryHost;
    use edittemplate_core::{MatchConfig, RouteDescriptor};

    fn matching_config() -> PluginConfig {
        PluginConfig {
            template_style: 3,
            match_config: MatchConfig::from_lists("com_content", "article", "edit"),
            ..Default::default()
        }
    }

    fn edit_route() -> RouteDescriptor {
        RouteDescriptor::new("com_content", "article", "edit")
    }

    #[test]
    fn test_after_route_skips_admin_client() {
        let plugin = EditTemplatePlugin::new(matching_config());
        let mut host = InMemoryHost::new(ClientKind::Admin, edit_route(), 0);

        plugin.on_after_route(&mut host);
        assert!(host.attributes.is_empty());
    }

    #[test]
    fn test_after_route_skips_non_matching_route() {
        let plugin = EditTemplatePlugin::new(matching_config());
        let mut host =
            InMemoryHost::frontend(RouteDescriptor::new("com_content", "article", "default"), 0);

        plugin.on_after_route(&mut host);
        assert!(host.attributes.is_empty());
    }

    #[test]
    fn test_after_route_never_uses_template_equality() {
        // Template-id equality triggers filtering and styling, never the
        // route override itself.
        let config = PluginConfig {
            template_style: 7,
            disable_modules_on_template: true,
            ..Default::default()
        };
        let plugin = EditTemplatePlugin::new(config);
        let mut host = InMemoryHost::frontend(RouteDescriptor::default(), 7);

        plugin.on_after_route(&mut host);
        assert!(host.attributes.is_empty());
    }

    #[test]
    fn test_before_render_skips_empty_styling() {
        let plugin = EditTemplatePlugin::new(matching_config());
        let mut host = InMemoryHost::frontend(edit_route(), 0);

        plugin.on_before_render(&mut host);
        assert!(host.inline_styles.is_empty());
    }

    #[test]
    fn test_before_render_registers_styling_on_match() {
        let config = PluginConfig {
            editpage_styling: ".toolbar { display: none; }".to_string(),
            ..matching_config()
        };
        let plugin = EditTemplatePlugin::new(config);
        let mut host = InMemoryHost::frontend(edit_route(), 0);

        plugin.on_before_render(&mut host);
        assert_eq!(
            host.inline_styles,
            vec![(
                EDITPAGE_STYLE_NAME.to_string(),
                ".toolbar { display: none; }".to_string()
            )]
        );
        // CSS is passed through unmodified, never escaped
        assert!(host.output.is_empty());
    }

    #[test]
    fn test_module_filter_requires_removal_list() {
        // A matching route with no configured removals leaves the list alone.
        let plugin = EditTemplatePlugin::new(matching_config());
        let mut host = InMemoryHost::frontend(edit_route(), 0);
        let modules = vec![ModuleDescriptor::with_id(12)];

        let result = plugin.on_after_module_list(&mut host, modules.clone());
        assert_eq!(result, modules);
    }

    #[test]
    fn test_module_filter_requires_trigger() {
        let config = PluginConfig {
            disable_modules: vec![12],
            ..Default::default()
        };
        let plugin = EditTemplatePlugin::new(config);
        let mut host = InMemoryHost::frontend(edit_route(), 0);
        let modules = vec![ModuleDescriptor::with_id(12)];

        let result = plugin.on_after_module_list(&mut host, modules.clone());
        assert_eq!(result, modules);
    }
}
