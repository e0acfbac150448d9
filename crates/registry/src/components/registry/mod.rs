//! Components registry wrapper.
//!
//! Host-facing operations over a [`RuntimeRegistry`] of [`ComponentDef`]s. Every lookup is an
//! exact key match on the current snapshot; every failure is returned as a [`SchemaError`].

use std::ops::Deref;

use indexmap::IndexMap;
use trellis_primitives::{PropertyValue, PropertyValues};

use super::def::{ComponentDef, ComponentDescriptor};
use super::event::EventDef;
use super::lint::check_component;
use super::property::PropertyDef;
use super::validate;
use crate::core::{RegisterError, RegistryRef, RuntimeRegistry};
use crate::error::SchemaError;

#[cfg(test)]
mod tests;

/// Handle to a registered component. Pins the snapshot it was read from.
pub type ComponentRef = RegistryRef<ComponentDef>;

/// Ordered property mapping of one registered component.
#[derive(Debug, Clone)]
pub struct PropertySchema(ComponentRef);

impl Deref for PropertySchema {
	type Target = IndexMap<String, PropertyDef>;

	fn deref(&self) -> &Self::Target {
		&self.0.properties
	}
}

/// Ordered event sequence of one registered component.
#[derive(Debug, Clone)]
pub struct EventList(ComponentRef);

impl Deref for EventList {
	type Target = [EventDef];

	fn deref(&self) -> &Self::Target {
		&self.0.events
	}
}

pub struct ComponentsRegistry {
	inner: RuntimeRegistry<ComponentDef>,
}

impl Default for ComponentsRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl ComponentsRegistry {
	pub fn new() -> Self {
		Self {
			inner: RuntimeRegistry::new("components"),
		}
	}

	/// Registers a component after checking its descriptor.
	///
	/// Fails with [`SchemaError::DuplicateComponent`] if the key is taken, checked first, and
	/// otherwise with [`SchemaError::MalformedDescriptor`] if any property or event breaks its
	/// schema. On failure the registry is unchanged.
	pub fn register(&self, def: ComponentDef) -> Result<ComponentRef, SchemaError> {
		let key = def.key.clone();
		let result = if self.contains(&key) {
			Err(SchemaError::DuplicateComponent { key: key.clone() })
		} else {
			check_descriptor(&def).and_then(|()| {
				self.inner.register(def).map_err(|err| match err {
					RegisterError::Duplicate { existing } => SchemaError::DuplicateComponent {
						key: existing.key.clone(),
					},
				})
			})
		};

		match &result {
			Ok(component) => tracing::debug!(
				registry = self.inner.label(),
				component = %key,
				source = %component.source,
				properties = component.properties.len(),
				events = component.events.len(),
				"registered component"
			),
			Err(error) => tracing::warn!(registry = self.inner.label(), component = %key, %error, "component registration rejected"),
		}
		result
	}

	/// Registers or replaces a component (hot reload). A replaced component keeps its palette
	/// position; handles to the old definition keep resolving against their snapshot.
	pub fn reload(&self, def: ComponentDef) -> Result<ComponentRef, SchemaError> {
		if let Err(error) = check_descriptor(&def) {
			tracing::warn!(registry = self.inner.label(), component = %def.key, %error, "component reload rejected");
			return Err(error);
		}

		let (component, previous) = self.inner.replace(def);
		tracing::debug!(registry = self.inner.label(), component = %component.key, replaced = previous.is_some(), "reloaded component");
		Ok(component)
	}

	/// Removes a component, returning its last handle.
	pub fn unregister(&self, key: &str) -> Result<ComponentRef, SchemaError> {
		let removed = self.inner.remove(key).ok_or_else(|| unknown_component(key))?;
		tracing::debug!(registry = self.inner.label(), component = key, "unregistered component");
		Ok(removed)
	}

	pub fn get(&self, key: &str) -> Option<ComponentRef> {
		self.inner.get(key)
	}

	/// Looks up a component, failing with [`SchemaError::UnknownComponent`].
	pub fn component(&self, key: &str) -> Result<ComponentRef, SchemaError> {
		self.inner.get(key).ok_or_else(|| unknown_component(key))
	}

	pub fn contains(&self, key: &str) -> bool {
		self.inner.get(key).is_some()
	}

	/// Returns the palette descriptor of a component.
	pub fn descriptor(&self, key: &str) -> Result<ComponentDescriptor, SchemaError> {
		Ok(self.component(key)?.descriptor.clone())
	}

	/// Returns the ordered property mapping of a component.
	pub fn property_schema(&self, key: &str) -> Result<PropertySchema, SchemaError> {
		self.component(key).map(PropertySchema)
	}

	/// Returns the ordered event sequence of a component.
	pub fn list_events(&self, key: &str) -> Result<EventList, SchemaError> {
		self.component(key).map(EventList)
	}

	/// Evaluates whether `property` should be shown given the current values.
	///
	/// Values missing from `values` read as absent; this never fails on their account.
	pub fn is_property_visible(&self, key: &str, property: &str, values: &PropertyValues) -> Result<bool, SchemaError> {
		let component = self.component(key)?;
		component
			.is_property_visible(property, values)
			.ok_or_else(|| unknown_property(&component, property))
	}

	/// Validates a candidate value, returning it unchanged on success.
	pub fn validate_value(&self, key: &str, property: &str, candidate: PropertyValue) -> Result<PropertyValue, SchemaError> {
		let component = self.component(key)?;
		let def = component.get_property(property).ok_or_else(|| unknown_property(&component, property))?;
		validate::validate_value(property, def, &candidate)?;
		Ok(candidate)
	}

	/// Returns the default value of every property, in declaration order.
	pub fn defaults(&self, key: &str) -> Result<PropertyValues, SchemaError> {
		Ok(self.component(key)?.defaults())
	}

	/// Returns the names of properties visible under `values`, in inspector order.
	pub fn visible_properties(&self, key: &str, values: &PropertyValues) -> Result<Vec<String>, SchemaError> {
		let component = self.component(key)?;
		Ok(component.visible_properties(values).into_iter().map(str::to_string).collect())
	}

	/// Returns all components in palette order.
	pub fn all(&self) -> Vec<ComponentRef> {
		self.inner.all()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Registers each definition independently and returns the failures.
	///
	/// A failing definition never prevents the others from registering.
	pub fn register_all(&self, defs: impl IntoIterator<Item = ComponentDef>) -> Vec<SchemaError> {
		defs.into_iter().filter_map(|def| self.register(def).err()).collect()
	}
}

fn check_descriptor(def: &ComponentDef) -> Result<(), SchemaError> {
	check_component(def).map_err(|reason| SchemaError::MalformedDescriptor {
		component: def.key.clone(),
		reason,
	})
}

fn unknown_component(key: &str) -> SchemaError {
	SchemaError::UnknownComponent { key: key.to_string() }
}

fn unknown_property(component: &ComponentDef, property: &str) -> SchemaError {
	SchemaError::UnknownProperty {
		component: component.key.clone(),
		property: property.to_string(),
		suggestion: suggest_property(component, property),
	}
}

/// Suggests a similar property name using fuzzy matching.
fn suggest_property(component: &ComponentDef, property: &str) -> Option<String> {
	component
		.properties
		.keys()
		.min_by_key(|name| strsim::levenshtein(property, name))
		.filter(|name| strsim::levenshtein(property, name) <= 3)
		.cloned()
}
