use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

struct TestDef {
	key: String,
	value: u32,
	drop_counter: Option<Arc<AtomicUsize>>,
}

impl RegistryEntry for TestDef {
	fn key(&self) -> &str {
		&self.key
	}
}

impl Drop for TestDef {
	fn drop(&mut self) {
		if let Some(counter) = &self.drop_counter {
			counter.fetch_add(1, Ordering::SeqCst);
		}
	}
}

fn make_def(key: &str, value: u32) -> TestDef {
	TestDef {
		key: key.to_string(),
		value,
		drop_counter: None,
	}
}

/// Consecutive snapshot loads without mutation return the same Arc.
#[test]
fn noop_snapshot_stability() {
	let registry = RuntimeRegistry::new("test");
	registry.register(make_def("a", 1)).unwrap();

	let before = registry.snapshot();
	let after = registry.snapshot();
	assert!(Arc::ptr_eq(&before, &after), "snapshot should not change without writes");
}

#[test]
fn lookup_is_exact_and_ordered() {
	let registry = RuntimeRegistry::new("test");
	registry.register(make_def("beta", 2)).unwrap();
	registry.register(make_def("alpha", 1)).unwrap();

	assert_eq!(registry.get("alpha").map(|r| r.value), Some(1));
	assert!(registry.get("Alpha").is_none());
	assert!(registry.get("alph").is_none());

	let keys: Vec<_> = registry.all().iter().map(|r| r.key().to_string()).collect();
	assert_eq!(keys, vec!["beta", "alpha"]);
	assert_eq!(registry.len(), 2);
}

#[test]
fn duplicate_is_rejected_and_first_kept() {
	let registry = RuntimeRegistry::new("test");
	let first = registry.register(make_def("x", 1)).unwrap();
	let snap_before = registry.snapshot();

	let err = registry.register(make_def("x", 2)).unwrap_err();
	match err {
		RegisterError::Duplicate { existing } => {
			assert_eq!(existing.value, 1);
			assert!(existing.ptr_eq(&first));
		}
	}

	assert!(Arc::ptr_eq(&snap_before, &registry.snapshot()), "rejected write must not publish");
	assert_eq!(registry.get("x").map(|r| r.value), Some(1));
}

#[test]
fn replace_keeps_position() {
	let registry = RuntimeRegistry::new("test");
	registry.register(make_def("a", 1)).unwrap();
	registry.register(make_def("b", 2)).unwrap();

	let (new, previous) = registry.replace(make_def("a", 10));
	assert_eq!(new.position(), 0);
	assert_eq!(previous.map(|p| p.value), Some(1));
	assert_eq!(registry.get("a").map(|r| r.value), Some(10));

	let (appended, previous) = registry.replace(make_def("c", 3));
	assert_eq!(appended.position(), 2);
	assert!(previous.is_none());
}

#[test]
fn remove_reindexes_remaining_entries() {
	let registry = RuntimeRegistry::new("test");
	for (i, key) in ["a", "b", "c"].into_iter().enumerate() {
		registry.register(make_def(key, i as u32)).unwrap();
	}

	let removed = registry.remove("b").unwrap();
	assert_eq!(removed.value, 1);
	assert!(registry.get("b").is_none());
	assert_eq!(registry.get("c").map(|r| r.position()), Some(1));
	assert!(registry.remove("b").is_none());
}

/// Handles pin their snapshot: a definition replaced by a later write stays alive until the
/// last handle to it is dropped.
#[test]
fn handle_survives_swap() {
	let drops = Arc::new(AtomicUsize::new(0));
	let registry = RuntimeRegistry::new("test");
	let old = registry
		.register(TestDef {
			key: "x".into(),
			value: 1,
			drop_counter: Some(drops.clone()),
		})
		.unwrap();

	registry.replace(make_def("x", 2));
	assert_eq!(registry.get("x").map(|r| r.value), Some(2));
	assert_eq!(old.value, 1);
	assert_eq!(drops.load(Ordering::SeqCst), 0, "replaced def must live while a handle pins it");

	drop(old);
	assert_eq!(drops.load(Ordering::SeqCst), 1, "replaced def should drop with its last handle");
}

#[test]
fn concurrent_registrations_are_not_lost() {
	let registry = Arc::new(RuntimeRegistry::new("test"));

	let handles: Vec<_> = (0..8)
		.map(|t| {
			let registry = registry.clone();
			std::thread::spawn(move || {
				for i in 0..50 {
					registry.register(make_def(&format!("{t}-{i}"), i)).unwrap();
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	assert_eq!(registry.len(), 400);
	let snap = registry.snapshot();
	assert_eq!(snap.by_key.len(), 400);
}
