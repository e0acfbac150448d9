//! Built-in components shipped with the registry.

use super::{ComponentDef, ComponentsRegistry};
use crate::error::SchemaError;

pub mod leaflet_map;
pub mod text;

/// Returns every builtin definition in palette order.
pub fn definitions() -> Vec<ComponentDef> {
	vec![leaflet_map::definition(), text::definition()]
}

/// Registers all builtins, returning the ones that failed.
pub fn register_builtins(registry: &ComponentsRegistry) -> Vec<SchemaError> {
	registry.register_all(definitions())
}
