//! Property visibility rules for the inspector.
//!
//! A property is either always shown, shown while a declarative [`Condition`] holds over the
//! current property values, or governed by a named predicate registered with
//! [`visibility_predicate!`](crate::visibility_predicate).
//!
//! Evaluation is pure: the result depends only on the values snapshot passed in. Absent values
//! read as [`PropertyValue::Null`], so no rule can fail on a missing key.

use serde::{Deserialize, Serialize};
use trellis_primitives::{PropertyValue, PropertyValues};

pub mod handler;


pub use handler::{VisibilityFn, VisibilityPredicateReg, VisibilityPredicateStatic, find_predicate};

/// Visibility rule attached to a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
	/// Shown while the condition holds.
	When(Condition),
	/// Decided by the predicate registered for this component and property.
	Predicate,
}

/// Numeric comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareOp {
	Lt,
	Le,
	Gt,
	Ge,
}

impl CompareOp {
	fn apply(self, lhs: f64, rhs: f64) -> bool {
		match self {
			CompareOp::Lt => lhs < rhs,
			CompareOp::Le => lhs <= rhs,
			CompareOp::Gt => lhs > rhs,
			CompareOp::Ge => lhs >= rhs,
		}
	}
}

/// Declarative boolean expression over named property values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
	/// The named value is truthy.
	Truthy(String),
	Not(Box<Condition>),
	/// Every sub-condition holds (true when empty).
	All(Vec<Condition>),
	/// At least one sub-condition holds (false when empty).
	Any(Vec<Condition>),
	/// The named value equals `value`. An absent value equals `null`.
	Equals { field: String, value: PropertyValue },
	/// The named value is a number and compares to `value`. Non-numbers never match.
	Compare { field: String, op: CompareOp, value: f64 },
}

impl Condition {
	pub fn truthy(field: impl Into<String>) -> Self {
		Condition::Truthy(field.into())
	}

	pub fn falsy(field: impl Into<String>) -> Self {
		Condition::Not(Box::new(Condition::truthy(field)))
	}

	pub fn not(condition: Condition) -> Self {
		Condition::Not(Box::new(condition))
	}

	pub fn equals(field: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
		Condition::Equals {
			field: field.into(),
			value: value.into(),
		}
	}

	pub fn compare(field: impl Into<String>, op: CompareOp, value: f64) -> Self {
		Condition::Compare {
			field: field.into(),
			op,
			value,
		}
	}

	/// Evaluates the condition against a values snapshot.
	pub fn evaluate(&self, values: &PropertyValues) -> bool {
		match self {
			Condition::Truthy(field) => lookup(values, field).is_truthy(),
			Condition::Not(inner) => !inner.evaluate(values),
			Condition::All(all) => all.iter().all(|c| c.evaluate(values)),
			Condition::Any(any) => any.iter().any(|c| c.evaluate(values)),
			Condition::Equals { field, value } => lookup(values, field) == value,
			Condition::Compare { field, op, value } => lookup(values, field).as_number().is_some_and(|n| op.apply(n, *value)),
		}
	}

	/// Returns every field name the condition reads, in first-seen order.
	pub fn fields(&self) -> Vec<&str> {
		let mut out = Vec::new();
		self.collect_fields(&mut out);
		out
	}

	fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
		match self {
			Condition::Truthy(field) | Condition::Equals { field, .. } | Condition::Compare { field, .. } => {
				if !out.contains(&field.as_str()) {
					out.push(field);
				}
			}
			Condition::Not(inner) => inner.collect_fields(out),
			Condition::All(list) | Condition::Any(list) => list.iter().for_each(|c| c.collect_fields(out)),
		}
	}
}

static NULL: PropertyValue = PropertyValue::Null;

fn lookup<'a>(values: &'a PropertyValues, field: &str) -> &'a PropertyValue {
	values.get(field).unwrap_or(&NULL)
}

/// Resolves a property's visibility.
///
/// `None` means always visible. A [`Visibility::Predicate`] with no registered handler is
/// treated as visible; registration rejects such descriptors, so this only happens for
/// definitions built outside the registry.
pub fn is_visible(visibility: Option<&Visibility>, component: &str, property: &str, values: &PropertyValues) -> bool {
	match visibility {
		None => true,
		Some(Visibility::When(condition)) => condition.evaluate(values),
		Some(Visibility::Predicate) => match find_predicate(component, property) {
			Some(predicate) => predicate(values),
			None => {
				tracing::warn!(component, property, "no visibility predicate registered");
				true
			}
		},
	}
}
