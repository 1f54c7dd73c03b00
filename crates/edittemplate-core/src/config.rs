//! Typed plugin configuration.
//!
//! `PluginConfig` is the strongly-typed form of the plugin's parameter set,
//! built once per request from the host's loosely-typed parameter bag. All
//! reads use typed defaults, so a missing or malformed parameter degrades
//! to the inert default instead of failing the request.

use serde::{Deserialize, Serialize};

use crate::matcher::MatchConfig;
use crate::params::Params;

/// Parameter keys as stored by the host.
pub mod keys {
    /// Template style id applied inside the editing context.
    pub const TEMPLATE_STYLE: &str = "template_style";
    /// Emit the on-page debug panel.
    pub const DEBUG: &str = "debug";
    /// Comma-separated allowed components.
    pub const COMPONENTS: &str = "components";
    /// Comma-separated allowed views.
    pub const VIEWS: &str = "views";
    /// Comma-separated allowed layouts.
    pub const LAYOUTS: &str = "layouts";
    /// Also trigger styling and module removal on template-id equality.
    pub const DISABLE_MODULES_ON_TEMPLATE: &str = "disable_modules_on_template";
    /// Module ids to suppress.
    pub const DISABLE_MODULES: &str = "disable_modules";
    /// Raw CSS injected while the editing context is active.
    pub const EDITPAGE_STYLING: &str = "editpage_styling";
}

/// The plugin's full configuration for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Template style id written into the request when the context matches.
    pub template_style: i64,

    /// Emit the debug panel on every front-end page.
    pub debug: bool,

    /// The editing-context allow-lists.
    pub match_config: MatchConfig,

    /// Treat template-id equality as a trigger for styling and filtering.
    pub disable_modules_on_template: bool,

    /// Module ids removed from the page while the trigger holds.
    pub disable_modules: Vec<i64>,

    /// Raw CSS registered as an inline style while the trigger holds.
    pub editpage_styling: String,
}

impl PluginConfig {
    /// Normalize a parameter bag into a typed configuration.
    pub fn from_params(params: &Params) -> Self {
        Self {
            template_style: params.int_or(keys::TEMPLATE_STYLE, 0),
            debug: params.bool_or(keys::DEBUG, false),
            match_config: MatchConfig::from_lists(
                &params.str_or(keys::COMPONENTS, ""),
                &params.str_or(keys::VIEWS, ""),
                &params.str_or(keys::LAYOUTS, ""),
            ),
            disable_modules_on_template: params.bool_or(keys::DISABLE_MODULES_ON_TEMPLATE, false),
            disable_modules: params.int_list_or(keys::DISABLE_MODULES, &[]),
            editpage_styling: params.str_or(keys::EDITPAGE_STYLING, ""),
        }
    }
}
