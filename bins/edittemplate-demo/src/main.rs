//! Demonstration harness for the edit-template plugin.
//!
//! Builds an in-memory host for one simulated front-end request, registers
//! the plugin in the hook registry, and walks the request through the full
//! lifecycle (route → render → module list), printing every host-visible
//! effect.

use edittemplate_core::{ModuleDescriptor, Params, RouteDescriptor};
use edittemplate_plugin::{EditTemplatePlugin, HookRegistry, InMemoryHost};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,edittemplate_plugin=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("edit-template demo starting...");

    // Plugin parameters exactly as the host's parameter storage would hand
    // them over: ids as strings, booleans as "1", a multi-select as a
    // comma-separated string.
    let params = Params::from_value(serde_json::json!({
        "template_style": "3",
        "debug": "1",
        "components": "com_content",
        "views": "article, form",
        "layouts": "edit",
        "disable_modules_on_template": "1",
        "disable_modules": "12, 15",
        "editpage_styling": ".edit-page .moduletable { display: none; }",
    }))?;

    let mut registry = HookRegistry::new();
    registry.register(Box::new(EditTemplatePlugin::from_params(&params)));

    // One front-end request for an article edit page, template style 7
    let route = RouteDescriptor::new("com_content", "article", "edit");
    let mut host = InMemoryHost::frontend(route, 7);

    registry.after_route(&mut host);
    registry.before_render(&mut host);

    let modules = vec![
        ModuleDescriptor::with_id(1),
        ModuleDescriptor::with_id(12),
        ModuleDescriptor::with_id(15),
        ModuleDescriptor::with_id(20),
    ];
    let surviving = registry.after_module_list(&mut host, modules);

    println!("request attributes: {:?}", host.attributes);
    println!("inline styles:");
    for (name, css) in &host.inline_styles {
        println!("  {name}: {css}");
    }
    println!(
        "surviving modules: {:?}",
        surviving.iter().filter_map(|m| m.id).collect::<Vec<_>>()
    );
    println!("--- output ---");
    println!("{}", host.output);

    Ok(())
}
