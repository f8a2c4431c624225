// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Process-wide default registry

use std::{collections::HashMap, sync::Arc};

use once_cell::sync::Lazy;

use crate::{config::LoggerConfig, logger::Logger, registry::Registry};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide default registry. Construct your own [`Registry`] and
/// pass it around instead when you want injection rather than ambient
/// state.
pub fn registry() -> &'static Registry {
	&REGISTRY
}

/// Shorthand for `registry().get(name)`.
pub fn get(name: &str) -> Arc<Logger> {
	REGISTRY.get(name)
}

/// Shorthand for `registry().get_with(name, config)`.
pub fn get_with(name: &str, config: &LoggerConfig) -> Arc<Logger> {
	REGISTRY.get_with(name, config)
}

/// Shorthand for `registry().all()`.
pub fn all() -> HashMap<String, Arc<Logger>> {
	REGISTRY.all()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_global_hands_out_stable_instances() {
		let first = get("global:stable");
		let second = get("global:stable");
		assert!(Arc::ptr_eq(&first, &second));
		assert!(Arc::ptr_eq(&first, &registry().get("global:stable")));
	}

	#[test]
	fn test_global_all_tracks_creations() {
		get("global:tracked");
		assert!(all().contains_key("global:tracked"));
	}
}
