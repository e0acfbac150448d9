use trellis_primitives::PropertyValue;

/// Which declared rule a candidate value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
	/// Wrong runtime type or format for the property's value type.
	Type,
	/// Wrong runtime type for the property's binding hint.
	BindingType,
	/// Below the declared minimum.
	Min,
	/// Above the declared maximum.
	Max,
	/// Not on the declared step grid.
	Step,
	/// Not one of the declared options.
	Options,
}

/// A candidate value rejected by a property's schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid value for '{field}': expected {expected}, got {actual}")]
pub struct ValidationError {
	/// Property name.
	pub field: String,
	/// Rule that was violated.
	pub violation: Violation,
	/// Human-readable form of the violated constraint.
	pub expected: String,
	/// The rejected value.
	pub actual: PropertyValue,
}

/// Errors returned by the component registry.
///
/// All variants are recoverable; none of them leave the registry in a partially updated state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
	#[error("component '{key}' is already registered")]
	DuplicateComponent { key: String },

	#[error("unknown component '{key}'")]
	UnknownComponent { key: String },

	#[error("component '{component}' has no property '{property}'{}", suggestion_suffix(.suggestion))]
	UnknownProperty {
		component: String,
		property: String,
		suggestion: Option<String>,
	},

	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error("malformed descriptor for component '{component}': {reason}")]
	MalformedDescriptor { component: String, reason: String },
}

impl SchemaError {
	/// Returns the component key this error is about, if it names one.
	pub fn component(&self) -> Option<&str> {
		match self {
			SchemaError::DuplicateComponent { key } | SchemaError::UnknownComponent { key } => Some(key),
			SchemaError::UnknownProperty { component, .. } | SchemaError::MalformedDescriptor { component, .. } => Some(component),
			SchemaError::Validation(_) => None,
		}
	}
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
	suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default()
}
