use indexmap::IndexMap;
use serde::{Deserialize, Serialize};


/// Snapshot of the current property values of one component instance, keyed by property name.
pub type PropertyValues = IndexMap<String, PropertyValue>;

/// A property value as the host builder stores it.
///
/// Mirrors the JSON data model so values round-trip through the host unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
	/// Absent or explicitly empty value.
	#[default]
	Null,
	/// Boolean value (on/off switches).
	Bool(bool),
	/// Numeric value. Integers are carried as `f64` like the host does.
	Number(f64),
	/// String value.
	Text(String),
	/// Ordered list of values.
	List(Vec<PropertyValue>),
	/// Ordered record of named values.
	Record(IndexMap<String, PropertyValue>),
}

impl PropertyValue {
	/// Returns whether the value is truthy under the host's scripting rules.
	///
	/// `Null`, `false`, `0`, `NaN` and `""` are falsy. Lists and records are always truthy,
	/// even when empty.
	pub fn is_truthy(&self) -> bool {
		match self {
			PropertyValue::Null => false,
			PropertyValue::Bool(b) => *b,
			PropertyValue::Number(n) => *n != 0.0 && !n.is_nan(),
			PropertyValue::Text(s) => !s.is_empty(),
			PropertyValue::List(_) | PropertyValue::Record(_) => true,
		}
	}

	/// Returns the number if this is a `Number` variant.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			PropertyValue::Number(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string slice if this is a `Text` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropertyValue::Text(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_record(&self) -> Option<&IndexMap<String, PropertyValue>> {
		match self {
			PropertyValue::Record(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the type name used in diagnostics and binding hints.
	pub fn type_name(&self) -> &'static str {
		match self {
			PropertyValue::Null => "null",
			PropertyValue::Bool(_) => "boolean",
			PropertyValue::Number(_) => "number",
			PropertyValue::Text(_) => "string",
			PropertyValue::List(_) => "array",
			PropertyValue::Record(_) => "object",
		}
	}

	/// Builds a record from `(name, value)` pairs, keeping their order.
	pub fn record<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<PropertyValue>,
	{
		PropertyValue::Record(fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

impl core::fmt::Display for PropertyValue {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			PropertyValue::Null => f.write_str("null"),
			PropertyValue::Bool(b) => write!(f, "{b}"),
			PropertyValue::Number(n) => write!(f, "{n}"),
			PropertyValue::Text(s) => write!(f, "{s:?}"),
			PropertyValue::List(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			PropertyValue::Record(fields) => {
				f.write_str("{")?;
				for (i, (k, v)) in fields.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{k}: {v}")?;
				}
				f.write_str("}")
			}
		}
	}
}

impl From<bool> for PropertyValue {
	fn from(v: bool) -> Self {
		PropertyValue::Bool(v)
	}
}

impl From<f64> for PropertyValue {
	fn from(v: f64) -> Self {
		PropertyValue::Number(v)
	}
}

impl From<i32> for PropertyValue {
	fn from(v: i32) -> Self {
		PropertyValue::Number(f64::from(v))
	}
}

impl From<String> for PropertyValue {
	fn from(v: String) -> Self {
		PropertyValue::Text(v)
	}
}

impl From<&str> for PropertyValue {
	fn from(v: &str) -> Self {
		PropertyValue::Text(v.to_string())
	}
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
	fn from(v: Vec<T>) -> Self {
		PropertyValue::List(v.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
	fn from(v: Option<T>) -> Self {
		v.map_or(PropertyValue::Null, Into::into)
	}
}
