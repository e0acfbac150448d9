//! Structural checks run before a component is published.
//!
//! A definition passes when every property default satisfies its own schema, every options
//! list is non-empty with unique values, numeric limits are coherent, visibility rules only
//! read declared properties, and event names are unique.

use rustc_hash::FxHashSet;

use super::def::ComponentDef;
use super::property::{PropertyDef, ValueType};
use super::validate::{check_value_type, validate_value};
use super::visibility::{Visibility, find_predicate};

/// Returns the first structural problem found in `def`, described for the plugin author.
pub fn check_component(def: &ComponentDef) -> Result<(), String> {
	if def.key.trim().is_empty() {
		return Err("component key is empty".to_string());
	}
	if def.descriptor.label.is_empty() {
		return Err("palette label is empty".to_string());
	}
	if def.descriptor.icon.trim().is_empty() {
		return Err("palette icon is empty".to_string());
	}

	for (name, property) in &def.properties {
		check_property(def, name, property).map_err(|reason| format!("property '{name}': {reason}"))?;
	}

	let mut seen = FxHashSet::default();
	for event in &def.events {
		if event.name.trim().is_empty() {
			return Err("event name is empty".to_string());
		}
		if !seen.insert(event.name.as_str()) {
			return Err(format!("event '{}' is declared twice", event.name));
		}
	}

	Ok(())
}

fn check_property(def: &ComponentDef, name: &str, property: &PropertyDef) -> Result<(), String> {
	if name.trim().is_empty() {
		return Err("property name is empty".to_string());
	}
	if property.label.is_empty() {
		return Err("label is empty".to_string());
	}

	let constraints = &property.constraints;
	if constraints.is_numeric() && property.value_type != ValueType::Number {
		return Err(format!("min/max/step only apply to Number properties, not {:?}", property.value_type));
	}
	for (what, bound) in [("min", constraints.min), ("max", constraints.max)] {
		if bound.is_some_and(|b| !b.is_finite()) {
			return Err(format!("{what} is not finite"));
		}
	}
	if let (Some(min), Some(max)) = (constraints.min, constraints.max)
		&& min > max
	{
		return Err(format!("min {min} is greater than max {max}"));
	}
	if let Some(step) = constraints.step
		&& !(step.is_finite() && step > 0.0)
	{
		return Err(format!("step must be a positive number, got {step}"));
	}

	match &constraints.options {
		Some(options) if options.is_empty() => return Err("options list is empty".to_string()),
		Some(options) => {
			for (i, option) in options.iter().enumerate() {
				if options[..i].iter().any(|o| o.value == option.value) {
					return Err(format!("option value {} is declared twice", option.value));
				}
				check_value_type(property.value_type, &option.value)
					.map_err(|expected| format!("option value {} does not match the property type: expected {expected}", option.value))?;
				if let Some(hint) = &property.binding_validation
					&& !hint.expected.matches(&option.value)
				{
					return Err(format!(
						"option value {} does not match the binding type: expected {}",
						option.value,
						hint.expected.as_str()
					));
				}
			}
		}
		None if property.value_type == ValueType::TextSelect => return Err("TextSelect requires options".to_string()),
		None => {}
	}

	validate_value(name, property, &property.default_value).map_err(|e| format!("default value is invalid: {e}"))?;

	match &property.visibility {
		Some(Visibility::When(condition)) => {
			for field in condition.fields() {
				if field == name {
					return Err("visibility depends on the property itself".to_string());
				}
				if !def.properties.contains_key(field) {
					return Err(format!("visibility reads undeclared property '{field}'"));
				}
			}
		}
		Some(Visibility::Predicate) if find_predicate(&def.key, name).is_none() => {
			return Err("visibility predicate is not registered".to_string());
		}
		Some(Visibility::Predicate) | None => {}
	}

	Ok(())
}
