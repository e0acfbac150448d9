//! Candidate value validation against a property schema.
//!
//! Checks run in a fixed order and stop at the first failure:
//! value type, binding hint type, `min`, `max`, `step`, `options`.

use trellis_primitives::{CssLength, PropertyValue, is_css_color};

use super::property::{PropertyDef, ValueType};
use crate::error::{ValidationError, Violation};


/// Absolute tolerance for step-grid membership, in steps.
const STEP_EPSILON: f64 = 1e-9;

/// Validates `candidate` for the property `field` described by `def`.
pub fn validate_value(field: &str, def: &PropertyDef, candidate: &PropertyValue) -> Result<(), ValidationError> {
	let fail = |violation: Violation, expected: String| ValidationError {
		field: field.to_string(),
		violation,
		expected,
		actual: candidate.clone(),
	};

	check_value_type(def.value_type, candidate).map_err(|expected| fail(Violation::Type, expected))?;

	if let Some(hint) = &def.binding_validation
		&& !hint.expected.matches(candidate)
	{
		return Err(fail(Violation::BindingType, format!("{} (binding)", hint.expected.as_str())));
	}

	if let Some(n) = candidate.as_number() {
		let constraints = &def.constraints;
		if let Some(min) = constraints.min
			&& n < min
		{
			return Err(fail(Violation::Min, format!("a value >= {min}")));
		}
		if let Some(max) = constraints.max
			&& n > max
		{
			return Err(fail(Violation::Max, format!("a value <= {max}")));
		}
		if let Some(step) = constraints.step {
			let base = constraints.min.unwrap_or(0.0);
			if !on_step_grid(n, base, step) {
				return Err(fail(Violation::Step, format!("a multiple of {step} from {base}")));
			}
		}
	}

	if let Some(options) = &def.constraints.options
		&& !options.iter().any(|o| &o.value == candidate)
	{
		let allowed: Vec<String> = options.iter().map(|o| o.value.to_string()).collect();
		return Err(fail(Violation::Options, format!("one of [{}]", allowed.join(", "))));
	}

	Ok(())
}

/// Checks the runtime type (and format, for lengths and colors) of a value.
///
/// Returns a description of what was expected on failure.
pub fn check_value_type(value_type: ValueType, value: &PropertyValue) -> Result<(), String> {
	match (value_type, value) {
		(ValueType::Number, PropertyValue::Number(n)) if n.is_finite() => Ok(()),
		(ValueType::Number, PropertyValue::Number(_)) => Err("a finite number".to_string()),
		(ValueType::OnOff, PropertyValue::Bool(_)) => Ok(()),
		(ValueType::Text | ValueType::TextSelect, PropertyValue::Text(_)) => Ok(()),
		(ValueType::Length, PropertyValue::Text(s)) => s
			.parse::<CssLength>()
			.map(|_| ())
			.map_err(|e| format!("a CSS length such as 400px, 50vh or 100% ({e})")),
		(ValueType::Color, PropertyValue::Text(s)) if is_css_color(s) => Ok(()),
		(ValueType::Color, PropertyValue::Text(_)) => Err("a CSS color such as #1a2b3c or rgb(0, 0, 0)".to_string()),
		(ty, _) => Err(ty.runtime_type().to_string()),
	}
}

fn on_step_grid(n: f64, base: f64, step: f64) -> bool {
	if step <= 0.0 || !step.is_finite() {
		return true;
	}
	let q = (n - base) / step;
	// Tolerance tracks the rounding error of `q`, so it never grows to half a step.
	(q - q.round()).abs() <= STEP_EPSILON.max(q.abs() * f64::EPSILON * 4.0)
}
