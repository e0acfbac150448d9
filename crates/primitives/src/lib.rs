//! Core value types for component schemas: property values, localized labels, CSS units.

/// CSS color literals accepted by color properties.
pub mod color;
/// CSS length parsing (`400px`, `50vh`, `100%`).
pub mod length;
/// Locale-keyed display strings.
pub mod locale;
/// Dynamically typed property values and their truthiness rules.
pub mod value;

pub use color::is_css_color;
pub use length::{CssLength, LengthError, LengthUnit};
pub use locale::{DEFAULT_LOCALE, LocalizedText};
pub use value::{PropertyValue, PropertyValues};
