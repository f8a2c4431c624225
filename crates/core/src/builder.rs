// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Builder pattern for configuring a registry

use std::{collections::BTreeMap, sync::Arc};

use crate::{
	level::{DEFAULT_LEVELS, LevelTable, Severity},
	registry::Registry,
	sink::{ConsoleSink, Sink},
	strategy::{ConstructStrategy, CreateStrategy, ExtendStrategy},
};

/// Builder for configuring a [`Registry`].
pub struct RegistryBuilder {
	levels: BTreeMap<String, Severity>,
	sink: Option<Arc<dyn Sink>>,
	create: Option<Arc<dyn CreateStrategy>>,
	construct: Option<Arc<dyn ConstructStrategy>>,
	extend: Option<Arc<dyn ExtendStrategy>>,
}

impl RegistryBuilder {
	/// A builder seeded with the six default levels.
	pub fn new() -> Self {
		Self {
			levels: DEFAULT_LEVELS.iter().map(|(name, severity)| (name.to_string(), *severity)).collect(),
			sink: None,
			create: None,
			construct: None,
			extend: None,
		}
	}

	pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
		self.sink = Some(sink);
		self
	}

	/// Use a console sink with default settings.
	pub fn with_console(self) -> Self {
		self.with_sink(Arc::new(ConsoleSink::new()))
	}

	/// Use a console sink with custom settings.
	pub fn with_console_custom(self, color: bool, stderr_for_errors: bool) -> Self {
		self.with_sink(Arc::new(
			ConsoleSink::new().with_color(color).with_stderr_for_errors(stderr_for_errors),
		))
	}

	/// Add a level, or change the severity of a default one.
	pub fn with_level(mut self, name: impl Into<String>, severity: Severity) -> Self {
		self.levels.insert(name.into(), severity);
		self
	}

	/// Replace the level table wholesale. Code elsewhere assumes the six
	/// default names stay resolvable, so only drop them deliberately.
	pub fn with_levels(mut self, levels: BTreeMap<String, Severity>) -> Self {
		self.levels = levels;
		self
	}

	pub fn with_create(mut self, strategy: Arc<dyn CreateStrategy>) -> Self {
		self.create = Some(strategy);
		self
	}

	pub fn with_construct(mut self, strategy: Arc<dyn ConstructStrategy>) -> Self {
		self.construct = Some(strategy);
		self
	}

	pub fn with_extend(mut self, strategy: Arc<dyn ExtendStrategy>) -> Self {
		self.extend = Some(strategy);
		self
	}

	pub fn build(self) -> Registry {
		// If no sink was configured, use the console by default
		let sink = self.sink.unwrap_or_else(|| Arc::new(ConsoleSink::new()));
		let registry = Registry::with_parts(Arc::new(LevelTable::from(self.levels)), sink);
		if let Some(strategy) = self.create {
			registry.set_create(strategy);
		}
		if let Some(strategy) = self.construct {
			registry.set_construct(strategy);
		}
		if let Some(strategy) = self.extend {
			registry.set_extend(strategy);
		}
		registry
	}
}

impl Default for RegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// Tests that exercise the builder through `omnilog-testing`'s capture sink
// live in `crates/core/tests/builder.rs` as integration tests: the testing
// crate depends on `omnilog-core`, so an inline `#[cfg(test)]` module would
// pull a second, incompatible copy of this crate into the test binary.
