//! Text widget.

use trellis_primitives::PropertyValue;

use crate::components::{ComponentDef, Condition, EventDef, ExpectedType, PropertyDef, Section, ValueType};
use crate::core::RegistrySource;

pub const KEY: &str = "text";

pub fn definition() -> ComponentDef {
	ComponentDef::new(KEY, "Text", "text")
		.with_source(RegistrySource::Builtin)
		.property(
			"content",
			PropertyDef::new("Text", ValueType::Text, "New text")
				.bindable()
				.binding(ExpectedType::String, "Text content (HTML allowed)")
				.help("Text displayed by the component"),
		)
		.property(
			"tag",
			PropertyDef::new("HTML Tag", ValueType::TextSelect, "p")
				.options([("p", "Paragraph"), ("h1", "Heading 1"), ("h2", "Heading 2"), ("h3", "Heading 3"), ("span", "Inline")])
				.bindable()
				.binding(ExpectedType::String, "One of p, h1, h2, h3, span")
				.help("Semantic element used to render the text"),
		)
		.property(
			"fontSize",
			PropertyDef::new("Font Size", ValueType::Number, 16)
				.section(Section::Style)
				.range(8.0, 96.0)
				.step(1.0)
				.bindable()
				.binding(ExpectedType::Number, "Font size in pixels between 8 and 96"),
		)
		.property(
			"color",
			PropertyDef::new("Color", ValueType::Color, "#000000")
				.section(Section::Style)
				.bindable()
				.binding(ExpectedType::String, "CSS color (e.g., '#1a2b3c', 'rgb(0, 0, 0)')"),
		)
		.property(
			"align",
			PropertyDef::new("Alignment", ValueType::TextSelect, "left")
				.section(Section::Style)
				.options([("left", "Left"), ("center", "Center"), ("right", "Right"), ("justify", "Justify")]),
		)
		.property(
			"truncate",
			PropertyDef::new("Truncate", ValueType::OnOff, false)
				.bindable()
				.binding(ExpectedType::Boolean, "Clamp long text")
				.help("Cut the text after a number of lines"),
		)
		.property(
			"maxLines",
			PropertyDef::new("Max Lines", ValueType::Number, 3)
				.range(1.0, 20.0)
				.step(1.0)
				.visible_when(Condition::truthy("truncate"))
				.help("Number of lines shown before the text is cut"),
		)
		.event(EventDef::new("click", "On Click", PropertyValue::record([("content", "")])))
}
