//! # edittemplate-plugin
//!
//! Lifecycle handlers for the edit-template plugin.
//!
//! This crate provides:
//! - The `HostContext` trait abstracting the host framework's accessors
//! - An explicit lifecycle handler table (`HookRegistry`)
//! - `EditTemplatePlugin`, the plugin itself: template-style override,
//!   debug panel, inline-CSS injection, and module filtering
//!
//! The host invokes each lifecycle point synchronously, once per request;
//! handlers carry no state across requests.

pub mod dispatch;
pub mod host;
pub mod panel;
pub mod plugin;

pub use dispatch::{HookRegistry, LifecycleHandler};
pub use host::{ClientKind, HostContext, InMemoryHost};
pub use plugin::EditTemplatePlugin;
