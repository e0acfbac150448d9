//! Runtime registry container with atomic publication.
//!
//! # Role
//!
//! Thread-safe entrypoint for reading and updating registry data. Reads are lock-free loads of
//! the current snapshot. Writes take the single writer lock, derive a new snapshot from the
//! current one and publish it with one store.
//!
//! # Invariants
//!
//! - Concurrent registrations are linearizable: no write is lost (see `tests::concurrent_registrations_are_not_lost`).
//! - A rejected write leaves the published snapshot untouched.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use super::RegistryEntry;
use super::snapshot::{RegistryRef, Snapshot, SnapshotGuard};

/// Error type for registration failures.
pub enum RegisterError<T: RegistryEntry> {
	/// An entry with the same key is already registered.
	Duplicate {
		/// Reference to the existing definition, which stays published.
		existing: RegistryRef<T>,
	},
}

impl<T: RegistryEntry> std::fmt::Debug for RegisterError<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RegisterError::Duplicate { existing } => f.debug_struct("Duplicate").field("key", &existing.key()).finish(),
		}
	}
}

impl<T: RegistryEntry> std::fmt::Display for RegisterError<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RegisterError::Duplicate { existing } => {
				write!(f, "registration rejected: '{}' is already registered ({})", existing.key(), existing.source())
			}
		}
	}
}

impl<T: RegistryEntry> std::error::Error for RegisterError<T> {}

/// Registry wrapper for runtime-extensible registries.
pub struct RuntimeRegistry<T: RegistryEntry> {
	label: &'static str,
	snap: ArcSwap<Snapshot<T>>,
	writer: Mutex<()>,
}

impl<T: RegistryEntry> RuntimeRegistry<T> {
	/// Creates an empty registry.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			snap: ArcSwap::from_pointee(Snapshot::default()),
			writer: Mutex::new(()),
		}
	}

	/// Returns the registry label used in logs.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Looks up a definition by exact key.
	#[inline]
	pub fn get(&self, key: &str) -> Option<RegistryRef<T>> {
		let snap = self.snap.load_full();
		let idx = snap.index_of(key)?;
		Some(RegistryRef { snap, idx })
	}

	/// Returns all definitions in registration order.
	pub fn all(&self) -> Vec<RegistryRef<T>> {
		self.snapshot_guard().iter_refs().collect()
	}

	/// Returns a snapshot guard for efficient iteration.
	pub fn snapshot_guard(&self) -> SnapshotGuard<T> {
		SnapshotGuard {
			snap: self.snap.load_full(),
		}
	}

	/// Returns the current snapshot.
	pub fn snapshot(&self) -> Arc<Snapshot<T>> {
		self.snap.load_full()
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.snap.load().is_empty()
	}

	/// Registers a new definition. Fails if the key is taken.
	pub fn register(&self, entry: T) -> Result<RegistryRef<T>, RegisterError<T>> {
		let _writer = self.writer.lock();
		let old = self.snap.load_full();

		if let Some(idx) = old.index_of(entry.key()) {
			return Err(RegisterError::Duplicate {
				existing: RegistryRef { snap: old, idx },
			});
		}

		let mut table = old.table.to_vec();
		table.push(Arc::new(entry));
		let idx = table.len() - 1;
		Ok(self.publish(table, idx))
	}

	/// Registers a definition, replacing any existing entry with the same key in place.
	///
	/// Returns the new handle and the handle of the replaced definition, if any. The replaced
	/// handle still resolves against the snapshot it was taken from.
	pub fn replace(&self, entry: T) -> (RegistryRef<T>, Option<RegistryRef<T>>) {
		let _writer = self.writer.lock();
		let old = self.snap.load_full();

		let mut table = old.table.to_vec();
		let (idx, previous) = match old.index_of(entry.key()) {
			Some(idx) => {
				table[idx] = Arc::new(entry);
				(idx, Some(RegistryRef { snap: old, idx }))
			}
			None => {
				table.push(Arc::new(entry));
				(table.len() - 1, None)
			}
		};

		(self.publish(table, idx), previous)
	}

	/// Removes a definition by key, returning its last handle.
	pub fn remove(&self, key: &str) -> Option<RegistryRef<T>> {
		let _writer = self.writer.lock();
		let old = self.snap.load_full();
		let idx = old.index_of(key)?;

		let mut table = old.table.to_vec();
		table.remove(idx);
		self.snap.store(Arc::new(Snapshot::from_table(table)));

		Some(RegistryRef { snap: old, idx })
	}

	/// Publishes a new table. Callers hold the writer lock.
	fn publish(&self, table: Vec<Arc<T>>, idx: usize) -> RegistryRef<T> {
		let snap = Arc::new(Snapshot::from_table(table));
		self.snap.store(snap.clone());
		RegistryRef { snap, idx }
	}
}
