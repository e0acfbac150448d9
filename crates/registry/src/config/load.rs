//! Manifest directory loading.

use std::path::{Path, PathBuf};

use super::{ManifestError, parse_manifest};
use crate::components::{ComponentDef, ComponentsRegistry};
use crate::error::SchemaError;

/// Aggregate result of loading a manifest directory.
#[derive(Debug, Default)]
pub struct ManifestLoadReport {
	/// Parsed definitions keyed by source file path, in file-name order.
	pub defs: Vec<(PathBuf, ComponentDef)>,
	/// File read or parse errors keyed by source file path.
	pub errors: Vec<(PathBuf, String)>,
}

impl ManifestLoadReport {
	/// Registers every parsed definition, returning registration failures by source path.
	///
	/// Load errors already in the report are left untouched.
	pub fn register_into(self, registry: &ComponentsRegistry) -> Vec<(PathBuf, SchemaError)> {
		self.defs
			.into_iter()
			.filter_map(|(path, def)| registry.register(def).err().map(|e| (path, e)))
			.collect()
	}
}

/// Loads every `*.json` manifest in `dir`.
///
/// A file that cannot be read or parsed is recorded in [`ManifestLoadReport::errors`] and does
/// not stop the others from loading.
pub fn load_manifests_from_dir(dir: &Path) -> ManifestLoadReport {
	let mut report = ManifestLoadReport::default();

	let mut paths = match list_manifests(dir) {
		Ok(paths) => paths,
		Err(error) => {
			tracing::warn!(dir = %dir.display(), %error, "cannot read manifest directory");
			report.errors.push((dir.to_path_buf(), error.to_string()));
			return report;
		}
	};
	paths.sort();

	for path in paths {
		match load_manifest(&path) {
			Ok(def) => report.defs.push((path, def)),
			Err(error) => {
				tracing::warn!(path = %path.display(), %error, "skipping manifest");
				report.errors.push((path, error.to_string()));
			}
		}
	}

	tracing::debug!(dir = %dir.display(), loaded = report.defs.len(), failed = report.errors.len(), "loaded manifests");
	report
}

fn list_manifests(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
	let mut paths = Vec::new();
	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
			paths.push(path);
		}
	}
	Ok(paths)
}

fn load_manifest(path: &Path) -> Result<ComponentDef, ManifestError> {
	let content = std::fs::read_to_string(path)?;
	parse_manifest(&content)
}
