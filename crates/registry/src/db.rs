//! Process-wide component registry.
//!
//! Initialized on first access (plugin load), seeded with the builtin components, and
//! read-mostly for the rest of the process. Later writes go through the registry's single
//! writer lock; readers never block.

use std::sync::{LazyLock, OnceLock};

use crate::components::ComponentsRegistry;

static DB: OnceLock<ComponentsRegistry> = OnceLock::new();

pub fn get_db() -> &'static ComponentsRegistry {
	DB.get_or_init(|| {
		let registry = ComponentsRegistry::new();

		#[cfg(feature = "builtins")]
		for error in crate::components::builtins::register_builtins(&registry) {
			tracing::error!(component = error.component().unwrap_or("?"), %error, "builtin registration failed");
		}

		registry
	})
}

pub static COMPONENTS: LazyLock<&'static ComponentsRegistry> = LazyLock::new(get_db);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn global_registry_is_initialized_once() {
		assert!(std::ptr::eq(*COMPONENTS, get_db()));
	}

	#[cfg(feature = "builtins")]
	#[test]
	fn global_registry_carries_builtins() {
		use crate::components::builtins::{leaflet_map, text};

		assert!(COMPONENTS.contains(leaflet_map::KEY));
		assert!(COMPONENTS.contains(text::KEY));
	}
}
