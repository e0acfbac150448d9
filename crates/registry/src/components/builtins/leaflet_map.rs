//! Leaflet map widget.

use trellis_primitives::PropertyValue;

use crate::components::{ComponentDef, Condition, EventDef, ExpectedType, PropertyDef, Section, ValueType};
use crate::core::RegistrySource;

pub const KEY: &str = "leaflet-map";

const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str = r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

const TILE_LAYERS: [(&str, &str); 4] = [
	(OSM_TILES, "OpenStreetMap (Standard)"),
	("https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png", "OpenTopoMap (Topographic)"),
	("https://tiles.stadiamaps.com/tiles/alidade_smooth/{z}/{x}/{y}{r}.png", "Stadia Smooth (Light)"),
	("https://tiles.stadiamaps.com/tiles/alidade_smooth_dark/{z}/{x}/{y}{r}.png", "Stadia Dark"),
];

pub fn definition() -> ComponentDef {
	ComponentDef::new(KEY, "Leaflet Map", "map")
		.with_source(RegistrySource::Builtin)
		.property(
			"centerLat",
			PropertyDef::new("Latitude", ValueType::Number, 52.2297)
				.bindable()
				.binding(ExpectedType::Number, "Latitude coordinate (-90 to 90)")
				.help("Latitude coordinate for map center (Warsaw default: 52.2297)"),
		)
		.property(
			"centerLng",
			PropertyDef::new("Longitude", ValueType::Number, 21.0122)
				.bindable()
				.binding(ExpectedType::Number, "Longitude coordinate (-180 to 180)")
				.help("Longitude coordinate for map center (Warsaw default: 21.0122)"),
		)
		.property(
			"zoom",
			PropertyDef::new("Zoom Level", ValueType::Number, 10)
				.range(1.0, 19.0)
				.step(1.0)
				.bindable()
				.binding(ExpectedType::Number, "Zoom level between 1 and 19")
				.help("Initial zoom level of the map (1 = world, 19 = building)"),
		)
		.property(
			"height",
			PropertyDef::new("Map Height", ValueType::Length, "400px")
				.section(Section::Style)
				.bindable()
				.binding(ExpectedType::String, "CSS height value (e.g., '400px', '50vh', '100%')")
				.help("Height of the map container"),
		)
		.property(
			"tileLayer",
			PropertyDef::new("Map Style", ValueType::TextSelect, OSM_TILES)
				.options(TILE_LAYERS)
				.bindable()
				.binding(ExpectedType::String, "Tile layer URL template")
				.help("Choose map tile style (OpenStreetMap is completely free)"),
		)
		.property(
			"showMarker",
			PropertyDef::new("Show Center Marker", ValueType::OnOff, true)
				.bindable()
				.binding(ExpectedType::Boolean, "Show marker at center")
				.help("Display a marker pin at the map center"),
		)
		.property(
			"markerText",
			PropertyDef::new("Marker Popup Text", ValueType::Text, "Location")
				.bindable()
				.visible_when(Condition::truthy("showMarker"))
				.binding(ExpectedType::String, "Text to display in marker popup")
				.help("Text shown when clicking the marker"),
		)
		.property(
			"attribution",
			PropertyDef::new("Custom Attribution", ValueType::Text, OSM_ATTRIBUTION)
				.bindable()
				.binding(ExpectedType::String, "Map attribution text (HTML allowed)")
				.help("Attribution text displayed on the map (supports HTML)"),
		)
		.event(EventDef::new("map-loaded", "On Map Loaded", PropertyValue::record([("map", PropertyValue::Null)])))
		.event(EventDef::new(
			"map-click",
			"On Map Click",
			PropertyValue::record([
				("lat", PropertyValue::from(0)),
				("lng", PropertyValue::from(0)),
				("coordinates", PropertyValue::from(vec![0, 0])),
			]),
		))
		.event(EventDef::new("map-error", "On Map Error", PropertyValue::record([("error", "")])))
}
