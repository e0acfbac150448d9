use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use trellis_primitives::{PropertyValue, PropertyValues};

use super::*;
use crate::components::builtins::{self, leaflet_map, text};
use crate::components::{Condition, ValueType};
use crate::error::Violation;

crate::visibility_predicate!("shape-widget", "radius", |values| {
	values.get("shape").and_then(PropertyValue::as_str) == Some("circle")
});

fn registry_with_builtins() -> ComponentsRegistry {
	let registry = ComponentsRegistry::new();
	let errors = builtins::register_builtins(&registry);
	assert!(errors.is_empty(), "{errors:?}");
	registry
}

fn values<const N: usize>(pairs: [(&str, PropertyValue); N]) -> PropertyValues {
	pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn zoom_validation_scenario() {
	let registry = registry_with_builtins();

	let err = registry.validate_value(leaflet_map::KEY, "zoom", PropertyValue::from(25)).unwrap_err();
	match err {
		SchemaError::Validation(v) => {
			assert_eq!(v.field, "zoom");
			assert_eq!(v.violation, Violation::Max);
			assert_eq!(v.actual, PropertyValue::Number(25.0));
		}
		other => panic!("expected a validation error, got {other:?}"),
	}

	assert_eq!(registry.validate_value(leaflet_map::KEY, "zoom", PropertyValue::from(10)), Ok(PropertyValue::Number(10.0)));
}

#[test]
fn marker_text_visibility_scenario() {
	let registry = registry_with_builtins();
	let visible = |snapshot: PropertyValues| registry.is_property_visible(leaflet_map::KEY, "markerText", &snapshot).unwrap();

	assert!(!visible(values([("showMarker", false.into())])));
	assert!(visible(values([("showMarker", true.into())])));
	assert!(!visible(values([])));
}

#[test]
fn duplicate_registration_scenario() {
	let registry = ComponentsRegistry::new();
	let first = registry.register(ComponentDef::new("w", "First", "box")).unwrap();

	let err = registry.register(ComponentDef::new("w", "Second", "box")).unwrap_err();
	assert_eq!(err, SchemaError::DuplicateComponent { key: "w".to_string() });

	let current = registry.component("w").unwrap();
	assert!(current.ptr_eq(&first));
	assert_eq!(current.descriptor.label.get("en"), Some("First"));
	assert_eq!(registry.len(), 1);
}

#[test]
fn duplicate_is_reported_before_malformed_descriptor() {
	let registry = registry_with_builtins();
	let broken = ComponentDef::new(text::KEY, "Text", "text").property("tag", PropertyDef::new("Tag", ValueType::TextSelect, "p"));

	assert_eq!(registry.register(broken).unwrap_err(), SchemaError::DuplicateComponent { key: text::KEY.to_string() });
}

#[test]
fn registered_predicate_drives_visibility() {
	let registry = ComponentsRegistry::new();
	let def = ComponentDef::new("shape-widget", "Shape", "shapes")
		.property("shape", PropertyDef::new("Shape", ValueType::TextSelect, "circle").options([("circle", "Circle"), ("square", "Square")]))
		.property("radius", PropertyDef::new("Radius", ValueType::Number, 10).visible_by_predicate());
	registry.register(def).unwrap();

	let circle = values([("shape", "circle".into())]);
	let square = values([("shape", "square".into())]);
	assert_eq!(registry.is_property_visible("shape-widget", "radius", &circle), Ok(true));
	assert_eq!(registry.is_property_visible("shape-widget", "radius", &square), Ok(false));
	assert_eq!(registry.visible_properties("shape-widget", &square).unwrap(), vec!["shape"]);
}

#[test]
fn malformed_component_does_not_block_others() {
	let registry = ComponentsRegistry::new();
	let broken = ComponentDef::new("broken", "Broken", "box").property("zoom", PropertyDef::new("Zoom", ValueType::Number, 25).range(1.0, 19.0));

	let errors = registry.register_all([broken, text::definition()]);
	assert_eq!(errors.len(), 1);
	assert!(matches!(&errors[0], SchemaError::MalformedDescriptor { component, .. } if component == "broken"));
	assert!(registry.contains(text::KEY));
	assert!(!registry.contains("broken"));
}

#[test]
fn unknown_component_and_property() {
	let registry = registry_with_builtins();

	assert_eq!(registry.property_schema("nope").unwrap_err(), SchemaError::UnknownComponent { key: "nope".to_string() });
	assert_eq!(registry.list_events("nope").unwrap_err(), SchemaError::UnknownComponent { key: "nope".to_string() });

	let err = registry.validate_value(leaflet_map::KEY, "zoon", PropertyValue::from(3)).unwrap_err();
	assert_eq!(
		err,
		SchemaError::UnknownProperty {
			component: leaflet_map::KEY.to_string(),
			property: "zoon".to_string(),
			suggestion: Some("zoom".to_string()),
		}
	);
	assert_eq!(err.to_string(), "component 'leaflet-map' has no property 'zoon' (did you mean 'zoom'?)");

	let err = registry.is_property_visible(leaflet_map::KEY, "somethingElse", &PropertyValues::new()).unwrap_err();
	assert!(matches!(err, SchemaError::UnknownProperty { suggestion: None, .. }));
}

#[test]
fn schema_and_events_keep_declaration_order() {
	let registry = registry_with_builtins();

	let schema = registry.property_schema(text::KEY).unwrap();
	let names: Vec<_> = schema.keys().map(String::as_str).collect();
	assert_eq!(names, vec!["content", "tag", "fontSize", "color", "align", "truncate", "maxLines"]);

	let events = registry.list_events(leaflet_map::KEY).unwrap();
	assert_eq!(events.len(), 3);
	assert_eq!(events[1].name, "map-click");
	assert_eq!(
		events[1].sample_payload,
		PropertyValue::record([
			("lat", PropertyValue::from(0)),
			("lng", PropertyValue::from(0)),
			("coordinates", PropertyValue::from(vec![0, 0])),
		])
	);

	let descriptor = registry.descriptor(leaflet_map::KEY).unwrap();
	assert_eq!(descriptor.icon, "map");
	assert_eq!(descriptor.label.get("en"), Some("Leaflet Map"));
}

#[test]
fn defaults_and_visible_properties() {
	let registry = registry_with_builtins();

	let defaults = registry.defaults(text::KEY).unwrap();
	assert_eq!(defaults.get("fontSize"), Some(&PropertyValue::Number(16.0)));
	assert_eq!(defaults.get("truncate"), Some(&PropertyValue::Bool(false)));

	let shown = registry.visible_properties(text::KEY, &defaults).unwrap();
	assert!(!shown.contains(&"maxLines".to_string()));

	let mut truncated = defaults.clone();
	truncated.insert("truncate".to_string(), true.into());
	let shown = registry.visible_properties(text::KEY, &truncated).unwrap();
	assert_eq!(shown.last().map(String::as_str), Some("maxLines"));
}

#[test]
fn every_builtin_default_round_trips_through_validation() {
	let registry = registry_with_builtins();
	for component in registry.all() {
		for (name, property) in &component.properties {
			let default = property.default_value.clone();
			assert_eq!(registry.validate_value(&component.key, name, default.clone()), Ok(default), "{}.{name}", component.key);
		}
	}
}

#[test]
fn reload_replaces_in_place_and_old_handles_survive() {
	let registry = registry_with_builtins();
	let old = registry.property_schema(leaflet_map::KEY).unwrap();

	let updated = leaflet_map::definition().property("scrollWheel", PropertyDef::new("Scroll Wheel Zoom", ValueType::OnOff, true));
	let new = registry.reload(updated).unwrap();

	assert_eq!(new.position(), 0, "reload keeps palette position");
	assert!(registry.property_schema(leaflet_map::KEY).unwrap().contains_key("scrollWheel"));
	assert!(!old.contains_key("scrollWheel"), "old schema handle keeps its snapshot");
}

#[test]
fn reload_validates_first() {
	let registry = registry_with_builtins();
	let broken = ComponentDef::new(text::KEY, "Text", "text").property("tag", PropertyDef::new("Tag", ValueType::TextSelect, "p"));

	assert!(matches!(registry.reload(broken), Err(SchemaError::MalformedDescriptor { .. })));
	assert!(registry.property_schema(text::KEY).unwrap().contains_key("fontSize"));
}

#[test]
fn unregister_removes_and_reports_unknown() {
	let registry = registry_with_builtins();
	let removed = registry.unregister(text::KEY).unwrap();
	assert_eq!(removed.key, text::KEY);
	assert!(!registry.contains(text::KEY));
	assert_eq!(registry.unregister(text::KEY).unwrap_err(), SchemaError::UnknownComponent { key: text::KEY.to_string() });
}

#[test]
fn readers_see_consistent_snapshots_during_writes() {
	let registry = Arc::new(registry_with_builtins());

	let writer = {
		let registry = registry.clone();
		std::thread::spawn(move || {
			for i in 0..100 {
				let def = ComponentDef::new(format!("dyn-{i}"), "Dynamic", "box").property("flag", PropertyDef::new("Flag", ValueType::OnOff, false));
				registry.register(def).unwrap();
			}
		})
	};

	for _ in 0..100 {
		let visible = registry.is_property_visible(leaflet_map::KEY, "markerText", &values([("showMarker", true.into())]));
		assert_eq!(visible, Ok(true));
	}
	writer.join().unwrap();
	assert_eq!(registry.len(), 102);
}

proptest! {
	/// Visibility depends only on the supplied values, not on what was asked before.
	#[test]
	fn visibility_ignores_call_history(history in proptest::collection::vec(any::<bool>(), 0..16), flag in any::<bool>()) {
		let registry = registry_with_builtins();
		for h in history {
			let _ = registry.is_property_visible(leaflet_map::KEY, "markerText", &values([("showMarker", h.into())]));
		}
		let snapshot = values([("showMarker", flag.into())]);
		prop_assert_eq!(registry.is_property_visible(leaflet_map::KEY, "markerText", &snapshot), Ok(flag));
	}

	#[test]
	fn zoom_accepts_exactly_the_integers_in_range(zoom in -5i32..30) {
		let registry = registry_with_builtins();
		let result = registry.validate_value(leaflet_map::KEY, "zoom", PropertyValue::from(zoom));
		prop_assert_eq!(result.is_ok(), (1..=19).contains(&zoom));
	}
}

#[test]
fn hidden_when_condition_uses_not() {
	let def = ComponentDef::new("w", "W", "box")
		.property("advanced", PropertyDef::new("Advanced", ValueType::OnOff, false))
		.property("simpleHint", PropertyDef::new("Hint", ValueType::Text, "").visible_when(Condition::falsy("advanced")));
	let registry = ComponentsRegistry::new();
	registry.register(def).unwrap();

	assert_eq!(registry.is_property_visible("w", "simpleHint", &PropertyValues::new()), Ok(true));
	assert_eq!(registry.is_property_visible("w", "simpleHint", &values([("advanced", true.into())])), Ok(false));
}
