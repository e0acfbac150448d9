//! Component schemas: palette descriptors, property schemas and event schemas.

pub mod builtins;
pub mod def;
pub mod event;
pub mod lint;
mod macros;
pub mod property;
pub mod registry;
pub mod validate;
pub mod visibility;

pub use def::{ComponentDef, ComponentDescriptor};
pub use event::EventDef;
pub use property::{BindingValidation, Constraints, ExpectedType, PropertyDef, Section, SelectOption, ValueType};
pub use registry::{ComponentRef, ComponentsRegistry, EventList, PropertySchema};
pub use visibility::{CompareOp, Condition, Visibility};
