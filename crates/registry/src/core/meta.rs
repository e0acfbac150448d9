use serde::{Deserialize, Serialize};

/// Represents where a registry item was defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrySource {
	/// Shipped with this crate.
	Builtin,
	/// Authored as a JSON manifest and loaded from disk.
	Manifest,
	/// Registered programmatically by the host at runtime.
	#[default]
	Runtime,
}

impl core::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Manifest => write!(f, "manifest"),
			Self::Runtime => write!(f, "runtime"),
		}
	}
}
