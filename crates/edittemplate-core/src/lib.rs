//! # edittemplate-core
//!
//! Core data model and matching logic for the edit-template plugin.
//!
//! This crate provides:
//! - Route descriptor types
//! - Editing-context match configuration and predicate
//! - Loosely-typed parameter bag with coercion rules
//! - Typed plugin configuration
//! - Module descriptors and the order-preserving removal filter
//!
//! This crate is intentionally host-agnostic and contains no I/O or async
//! code; everything here is short, bounded computation over request-scoped
//! data.

pub mod config;
pub mod matcher;
pub mod modules;
pub mod params;
pub mod route;

pub use config::PluginConfig;
pub use matcher::MatchConfig;
pub use modules::{filter_modules, ModuleDescriptor};
pub use params::{Params, ParamsError};
pub use route::RouteDescriptor;
