use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use trellis_primitives::{LocalizedText, PropertyValues};

use super::event::EventDef;
use super::property::PropertyDef;
use super::visibility;
use crate::core::{RegistryEntry, RegistrySource};

/// Palette entry for a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
	pub label: LocalizedText,
	/// Icon identifier understood by the host's icon set.
	pub icon: String,
}

/// Full schema of one component: palette descriptor, ordered properties, ordered events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDef {
	/// Identity key, unique within a registry.
	pub key: String,
	#[serde(rename = "editor")]
	pub descriptor: ComponentDescriptor,
	#[serde(default)]
	pub properties: IndexMap<String, PropertyDef>,
	#[serde(default, rename = "triggerEvents")]
	pub events: Vec<EventDef>,
	#[serde(skip)]
	pub source: RegistrySource,
}

impl ComponentDef {
	pub fn new(key: impl Into<String>, label: impl Into<LocalizedText>, icon: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			descriptor: ComponentDescriptor {
				label: label.into(),
				icon: icon.into(),
			},
			properties: IndexMap::new(),
			events: Vec::new(),
			source: RegistrySource::Runtime,
		}
	}

	/// Appends a property. A repeated name replaces the earlier definition in place.
	pub fn property(mut self, name: impl Into<String>, def: PropertyDef) -> Self {
		self.properties.insert(name.into(), def);
		self
	}

	pub fn event(mut self, event: EventDef) -> Self {
		self.events.push(event);
		self
	}

	pub fn with_source(mut self, source: RegistrySource) -> Self {
		self.source = source;
		self
	}

	pub fn get_property(&self, name: &str) -> Option<&PropertyDef> {
		self.properties.get(name)
	}

	/// Returns default values of all properties in declaration order.
	pub fn defaults(&self) -> PropertyValues {
		self.properties.iter().map(|(name, def)| (name.clone(), def.default_value.clone())).collect()
	}

	/// Evaluates the visibility of `property` against `values`, or `None` if no such property exists.
	pub fn is_property_visible(&self, property: &str, values: &PropertyValues) -> Option<bool> {
		let def = self.properties.get(property)?;
		Some(visibility::is_visible(def.visibility.as_ref(), &self.key, property, values))
	}

	/// Returns the names of properties visible under `values`, in declaration order.
	pub fn visible_properties(&self, values: &PropertyValues) -> Vec<&str> {
		self.properties
			.iter()
			.filter(|(name, def)| visibility::is_visible(def.visibility.as_ref(), &self.key, name, values))
			.map(|(name, _)| name.as_str())
			.collect()
	}
}

impl RegistryEntry for ComponentDef {
	fn key(&self) -> &str {
		&self.key
	}

	fn source(&self) -> RegistrySource {
		self.source
	}
}
