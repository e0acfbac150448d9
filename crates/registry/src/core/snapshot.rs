//! Snapshot and pinning handle implementations.
//!
//! # Role
//!
//! Pure view types used to search and hold registry data. No mutation logic lives here.
//!
//! # Invariants
//!
//! - A `RegistryRef` keeps its source `Snapshot` alive while held (see `tests::handle_survives_swap`).
//! - `table` order is registration order; `by_key` indexes every entry exactly once.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::RegistryEntry;

/// Single source of truth for registry lookups.
pub struct Snapshot<T: RegistryEntry> {
	pub(crate) table: Arc<[Arc<T>]>,
	pub(crate) by_key: Arc<FxHashMap<Box<str>, usize>>,
}

impl<T: RegistryEntry> Clone for Snapshot<T> {
	fn clone(&self) -> Self {
		Self {
			table: self.table.clone(),
			by_key: self.by_key.clone(),
		}
	}
}

impl<T: RegistryEntry> Default for Snapshot<T> {
	fn default() -> Self {
		Self::from_table(Vec::new())
	}
}

impl<T: RegistryEntry> Snapshot<T> {
	pub(super) fn from_table(table: Vec<Arc<T>>) -> Self {
		let by_key = table.iter().enumerate().map(|(idx, entry)| (Box::from(entry.key()), idx)).collect();
		Self {
			table: table.into(),
			by_key: Arc::new(by_key),
		}
	}

	pub fn index_of(&self, key: &str) -> Option<usize> {
		self.by_key.get(key).copied()
	}

	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}

/// Snapshot-pinning guard that provides `&T` access to a registry definition.
pub struct RegistryRef<T: RegistryEntry> {
	pub(crate) snap: Arc<Snapshot<T>>,
	pub(crate) idx: usize,
}

impl<T: RegistryEntry> Clone for RegistryRef<T> {
	fn clone(&self) -> Self {
		Self {
			snap: self.snap.clone(),
			idx: self.idx,
		}
	}
}

impl<T: RegistryEntry> std::fmt::Debug for RegistryRef<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RegistryRef").field("idx", &self.idx).field("key", &self.key()).finish()
	}
}

impl<T: RegistryEntry> RegistryRef<T> {
	/// Returns the position of this definition in registration order.
	pub fn position(&self) -> usize {
		self.idx
	}

	/// Returns true if both handles point at the same definition allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.snap.table[self.idx], &other.snap.table[other.idx])
	}
}

impl<T: RegistryEntry> std::ops::Deref for RegistryRef<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.snap.table[self.idx]
	}
}

/// Pins one snapshot while handing out handles into it.
pub struct SnapshotGuard<T: RegistryEntry> {
	pub(crate) snap: Arc<Snapshot<T>>,
}

impl<T: RegistryEntry> SnapshotGuard<T> {
	/// Returns an iterator over [`RegistryRef`] handles.
	pub fn iter_refs(self) -> impl Iterator<Item = RegistryRef<T>> {
		let snap = self.snap;
		let len = snap.table.len();
		(0..len).map(move |idx| RegistryRef { snap: snap.clone(), idx })
	}
}
