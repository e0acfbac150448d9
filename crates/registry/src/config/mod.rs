//! Component manifests.
//!
//! A manifest is the JSON form of a [`ComponentDef`], using the field names the host parses:
//!
//! ```json
//! {
//!   "key": "leaflet-map",
//!   "editor": { "label": { "en": "Leaflet Map" }, "icon": "map" },
//!   "properties": {
//!     "zoom": { "label": { "en": "Zoom Level" }, "type": "Number", "section": "settings",
//!               "min": 1, "max": 19, "step": 1, "defaultValue": 10, "bindable": true },
//!     "markerText": { "label": "Marker Popup Text", "type": "Text", "defaultValue": "Location",
//!                     "visibility": { "when": { "truthy": "showMarker" } } }
//!   },
//!   "triggerEvents": [ { "name": "map-error", "label": { "en": "On Map Error" }, "event": { "error": "" } } ]
//! }
//! ```

use crate::components::ComponentDef;
use crate::core::RegistrySource;

pub mod load;


pub use load::{ManifestLoadReport, load_manifests_from_dir};

/// Manifest error types.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
	#[error("invalid manifest: {0}")]
	Json(#[from] serde_json::Error),

	#[error("failed to read manifest: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Parses one manifest. Structural checks happen at registration, not here.
///
/// Property keys the schema does not know are kept in [`PropertyDef::unknown_fields`] and
/// logged, since they usually mean a typo or an unsupported rule.
///
/// [`PropertyDef::unknown_fields`]: crate::components::PropertyDef::unknown_fields
pub fn parse_manifest(input: &str) -> Result<ComponentDef> {
	let def: ComponentDef = serde_json::from_str(input)?;
	for (name, property) in &def.properties {
		for field in property.unknown_fields.keys() {
			tracing::warn!(component = %def.key, property = %name, %field, "ignoring unknown manifest field");
		}
	}
	Ok(def.with_source(RegistrySource::Manifest))
}

/// Renders a definition as the manifest the host consumes at load time.
pub fn render_manifest(def: &ComponentDef) -> Result<String> {
	Ok(serde_json::to_string_pretty(def)?)
}
