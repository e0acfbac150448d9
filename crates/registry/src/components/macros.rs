//! Component registration macros.

/// Registers a named visibility predicate for a component property.
///
/// The predicate receives the immutable values snapshot and must be pure. Pair it with a
/// property declared through [`PropertyDef::visible_by_predicate`](crate::components::PropertyDef::visible_by_predicate).
///
/// # Example
///
/// ```ignore
/// visibility_predicate!("leaflet-map", "markerText", |values| {
///     values.get("showMarker").is_some_and(|v| v.is_truthy())
/// });
/// ```
#[macro_export]
macro_rules! visibility_predicate {
	($component:literal, $property:literal, $predicate:expr $(,)?) => {
		const _: () = {
			static PREDICATE: $crate::components::visibility::VisibilityPredicateStatic =
				$crate::components::visibility::VisibilityPredicateStatic {
					component: $component,
					property: $property,
					predicate: $predicate,
				};

			$crate::inventory::submit!($crate::components::visibility::VisibilityPredicateReg(&PREDICATE));
		};
	};
}
