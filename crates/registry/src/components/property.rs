//! Property descriptors: one configurable (and possibly bindable) attribute of a component.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use trellis_primitives::{LocalizedText, PropertyValue};

use super::visibility::{Condition, Visibility};

/// Editor widget type of a property, which also fixes the runtime type of its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
	/// Finite number input.
	Number,
	/// Free text input.
	Text,
	/// Dropdown over declared `options`.
	TextSelect,
	/// Boolean switch.
	OnOff,
	/// CSS length such as `400px`.
	Length,
	/// CSS color literal.
	Color,
}

impl ValueType {
	/// Returns the host type name that values of this type carry.
	pub fn runtime_type(self) -> &'static str {
		match self {
			ValueType::Number => "number",
			ValueType::OnOff => "boolean",
			ValueType::Text | ValueType::TextSelect | ValueType::Length | ValueType::Color => "string",
		}
	}
}

/// Inspector tab a property is shown under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
	#[default]
	Settings,
	Style,
}

/// Runtime type a bound value is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedType {
	Number,
	String,
	Boolean,
	Array,
	Object,
}

impl ExpectedType {
	pub fn as_str(self) -> &'static str {
		match self {
			ExpectedType::Number => "number",
			ExpectedType::String => "string",
			ExpectedType::Boolean => "boolean",
			ExpectedType::Array => "array",
			ExpectedType::Object => "object",
		}
	}

	pub fn matches(self, value: &PropertyValue) -> bool {
		value.type_name() == self.as_str()
	}
}

/// Hint for the host's static binding checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingValidation {
	#[serde(rename = "type")]
	pub expected: ExpectedType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tooltip: Option<String>,
}

/// One entry of a `TextSelect` dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
	pub value: PropertyValue,
	pub label: LocalizedText,
}

/// Declared limits on a property's values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub step: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub options: Option<Vec<SelectOption>>,
}

impl Constraints {
	/// Returns whether any numeric limit is declared.
	pub fn is_numeric(&self) -> bool {
		self.min.is_some() || self.max.is_some() || self.step.is_some()
	}
}

/// Schema entry for one property. The property name is its key in the owning mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
	pub label: LocalizedText,
	#[serde(rename = "type")]
	pub value_type: ValueType,
	#[serde(default)]
	pub section: Section,
	pub default_value: PropertyValue,
	#[serde(default)]
	pub bindable: bool,
	#[serde(flatten)]
	pub constraints: Constraints,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub visibility: Option<Visibility>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub binding_validation: Option<BindingValidation>,
	#[serde(default, rename = "propertyHelp", skip_serializing_if = "Option::is_none")]
	pub help: Option<String>,
	/// Manifest keys no other field claimed, kept so the loader can report them.
	#[serde(flatten)]
	pub unknown_fields: IndexMap<String, PropertyValue>,
}

impl PropertyDef {
	/// Creates a settings-section property with no constraints.
	pub fn new(label: impl Into<LocalizedText>, value_type: ValueType, default_value: impl Into<PropertyValue>) -> Self {
		Self {
			label: label.into(),
			value_type,
			section: Section::Settings,
			default_value: default_value.into(),
			bindable: false,
			constraints: Constraints::default(),
			visibility: None,
			binding_validation: None,
			help: None,
			unknown_fields: IndexMap::new(),
		}
	}

	pub fn section(mut self, section: Section) -> Self {
		self.section = section;
		self
	}

	pub fn bindable(mut self) -> Self {
		self.bindable = true;
		self
	}

	/// Declares an inclusive numeric range.
	pub fn range(mut self, min: f64, max: f64) -> Self {
		self.constraints.min = Some(min);
		self.constraints.max = Some(max);
		self
	}

	pub fn step(mut self, step: f64) -> Self {
		self.constraints.step = Some(step);
		self
	}

	/// Declares dropdown options in display order.
	pub fn options<V, L>(mut self, options: impl IntoIterator<Item = (V, L)>) -> Self
	where
		V: Into<PropertyValue>,
		L: Into<LocalizedText>,
	{
		let options = options
			.into_iter()
			.map(|(value, label)| SelectOption {
				value: value.into(),
				label: label.into(),
			})
			.collect();
		self.constraints.options = Some(options);
		self
	}

	/// Shows the property only while `condition` holds.
	pub fn visible_when(mut self, condition: Condition) -> Self {
		self.visibility = Some(Visibility::When(condition));
		self
	}

	/// Defers visibility to the predicate registered for this component and property.
	pub fn visible_by_predicate(mut self) -> Self {
		self.visibility = Some(Visibility::Predicate);
		self
	}

	pub fn binding(mut self, expected: ExpectedType, tooltip: impl Into<String>) -> Self {
		self.binding_validation = Some(BindingValidation {
			expected,
			tooltip: Some(tooltip.into()),
		});
		self
	}

	pub fn help(mut self, help: impl Into<String>) -> Self {
		self.help = Some(help.into());
		self
	}

	/// Returns the declared options, or an empty slice.
	pub fn options_list(&self) -> &[SelectOption] {
		self.constraints.options.as_deref().unwrap_or_default()
	}
}
