//! Named visibility predicate registration via `inventory`.
//!
//! Each `visibility_predicate!` invocation creates a `VisibilityPredicateStatic` and submits it
//! via `inventory::submit!`. Properties declaring [`Visibility::Predicate`](super::Visibility::Predicate)
//! are paired with their handler by component key and property name.

use trellis_primitives::PropertyValues;

/// Pure predicate over an immutable values snapshot.
pub type VisibilityFn = fn(&PropertyValues) -> bool;

/// Static handler registration entry collected via `inventory`.
pub struct VisibilityPredicateStatic {
	/// Component key the predicate belongs to.
	pub component: &'static str,
	/// Property name the predicate decides.
	pub property: &'static str,
	pub predicate: VisibilityFn,
}

/// Wrapper for `inventory::collect!`.
pub struct VisibilityPredicateReg(pub &'static VisibilityPredicateStatic);

inventory::collect!(VisibilityPredicateReg);

/// Finds the predicate registered for `component`/`property`.
pub fn find_predicate(component: &str, property: &str) -> Option<VisibilityFn> {
	inventory::iter::<VisibilityPredicateReg>
		.into_iter()
		.find(|reg| reg.0.component == component && reg.0.property == property)
		.map(|reg| reg.0.predicate)
}
