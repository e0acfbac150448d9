use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Locale used when a requested translation is missing.
pub const DEFAULT_LOCALE: &str = "en";

/// Display string keyed by locale code (`{"en": "Zoom Level"}`).
///
/// Deserializes from either a locale map or a bare string, which is taken as English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalizedText(IndexMap<String, String>);

impl<'de> Deserialize<'de> for LocalizedText {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Repr {
			Plain(String),
			Localized(IndexMap<String, String>),
		}

		Ok(match Repr::deserialize(deserializer)? {
			Repr::Plain(text) => Self::en(text),
			Repr::Localized(map) => Self(map),
		})
	}
}

impl LocalizedText {
	/// Creates a text with a single English translation.
	pub fn en(text: impl Into<String>) -> Self {
		let mut map = IndexMap::with_capacity(1);
		map.insert(DEFAULT_LOCALE.to_string(), text.into());
		Self(map)
	}

	/// Adds or replaces a translation.
	pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
		self.0.insert(locale.into(), text.into());
		self
	}

	/// Returns the translation for `locale`, falling back to [`DEFAULT_LOCALE`] and then to the
	/// first translation declared.
	pub fn get(&self, locale: &str) -> Option<&str> {
		self.0
			.get(locale)
			.or_else(|| self.0.get(DEFAULT_LOCALE))
			.or_else(|| self.0.values().next())
			.map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.0.values().all(|s| s.is_empty())
	}
}

impl From<&str> for LocalizedText {
	fn from(text: &str) -> Self {
		Self::en(text)
	}
}
