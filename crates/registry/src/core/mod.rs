//! Shared registry infrastructure.
//!
//! # Role
//!
//! Generic, domain-free storage for keyed definitions. Readers load an immutable [`Snapshot`]
//! without locking; writers serialize on one lock, build a copy-on-write successor and publish
//! it atomically.

pub mod meta;
pub mod runtime;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use meta::RegistrySource;
pub use runtime::{RegisterError, RuntimeRegistry};
pub use snapshot::{RegistryRef, Snapshot, SnapshotGuard};

/// Trait for definitions stored in a [`RuntimeRegistry`].
pub trait RegistryEntry: Send + Sync + 'static {
	/// Returns the identity key (exact-match lookup).
	fn key(&self) -> &str;

	/// Returns where this entry was defined.
	fn source(&self) -> RegistrySource {
		RegistrySource::Runtime
	}
}
