use serde::{Deserialize, Serialize};
use trellis_primitives::{LocalizedText, PropertyValue};

/// A named occurrence a component can emit to the builder's logic system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDef {
	/// Unique within the owning component.
	pub name: String,
	pub label: LocalizedText,
	/// Example of the payload shape emitted at runtime.
	#[serde(rename = "event", default)]
	pub sample_payload: PropertyValue,
}

impl EventDef {
	pub fn new(name: impl Into<String>, label: impl Into<LocalizedText>, sample_payload: impl Into<PropertyValue>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			sample_payload: sample_payload.into(),
		}
	}
}
