//! Component schema registry for a no-code page builder.
//!
//! Each registered component carries a palette descriptor (label, icon), an ordered mapping
//! of property descriptors (type, default, constraints, visibility, binding hints) and an
//! ordered sequence of the events it can emit. The registry answers the host's schema
//! queries, evaluates property visibility against live values, and validates candidate
//! values.
//!
//! # Modules
//!
//! - [`core`] - Snapshot-published storage shared by registries
//! - [`components`] - Component schemas, validation, visibility and builtins
//! - [`config`] - JSON manifests and manifest directory loading
//! - [`db`] - The process-wide [`COMPONENTS`] registry

pub mod components;
pub mod config;
pub mod core;
pub mod db;
pub mod error;

pub use components::{
	BindingValidation, CompareOp, ComponentDef, ComponentDescriptor, ComponentRef, ComponentsRegistry, Condition, Constraints,
	EventDef, EventList, ExpectedType, PropertyDef, PropertySchema, Section, SelectOption, ValueType, Visibility,
};
pub use db::COMPONENTS;
pub use error::{SchemaError, ValidationError, Violation};
#[doc(hidden)]
pub use inventory;
pub use trellis_primitives::{LocalizedText, PropertyValue, PropertyValues};
