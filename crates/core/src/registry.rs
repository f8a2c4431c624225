// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logger registry: lazy creation, caching, re-extension

use std::{collections::HashMap, fmt, sync::Arc};

use parking_lot::RwLock;

use crate::{
	builder::RegistryBuilder,
	config::LoggerConfig,
	level::LevelTable,
	logger::Logger,
	sink::{ConsoleSink, Sink},
	strategy::{ConstructStrategy, CreateStrategy, DefaultConstruct, DefaultCreate, DefaultExtend, ExtendStrategy},
};

/// Cache of named loggers plus the replaceable parts that build them: the
/// level table, the sink, and the create/construct/extend strategy slots.
///
/// Entries are created lazily on first request and never removed. Loggers
/// are handed out as shared references; requesting the same name twice
/// yields the identical instance until it is explicitly replaced with
/// [`Registry::insert`].
pub struct Registry {
	loggers: RwLock<HashMap<String, Arc<Logger>>>,
	levels: Arc<LevelTable>,
	sink: RwLock<Arc<dyn Sink>>,
	create: RwLock<Arc<dyn CreateStrategy>>,
	construct: RwLock<Arc<dyn ConstructStrategy>>,
	extend: RwLock<Arc<dyn ExtendStrategy>>,
}

impl Registry {
	/// A registry with the six default levels, the console sink, and the
	/// default strategies.
	pub fn new() -> Self {
		Self::with_parts(Arc::new(LevelTable::default()), Arc::new(ConsoleSink::new()))
	}

	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	pub(crate) fn with_parts(levels: Arc<LevelTable>, sink: Arc<dyn Sink>) -> Self {
		Self {
			loggers: RwLock::new(HashMap::new()),
			levels,
			sink: RwLock::new(sink),
			create: RwLock::new(Arc::new(DefaultCreate)),
			construct: RwLock::new(Arc::new(DefaultConstruct)),
			extend: RwLock::new(Arc::new(DefaultExtend)),
		}
	}

	/// The logger registered under `name`, creating it on first request.
	///
	/// Any string is a legal name. The full map of created loggers is
	/// available through [`Registry::all`].
	pub fn get(&self, name: &str) -> Arc<Logger> {
		self.get_with(name, &LoggerConfig::default())
	}

	/// Like [`Registry::get`], threading a config through to the create
	/// and construct strategies. The default strategies ignore it.
	pub fn get_with(&self, name: &str, config: &LoggerConfig) -> Arc<Logger> {
		if let Some(logger) = self.loggers.read().get(name) {
			return Arc::clone(logger);
		}
		let created = self.create_strategy().create(self, name, config);
		// First insertion wins, so racing creators agree on one instance.
		Arc::clone(self.loggers.write().entry(name.to_string()).or_insert(created))
	}

	/// Snapshot of every logger created so far, keyed by creation name.
	pub fn all(&self) -> HashMap<String, Arc<Logger>> {
		self.loggers.read().clone()
	}

	/// Explicitly place a logger under a name, replacing any cached one.
	/// This is the one way reference stability is deliberately broken.
	pub fn insert(&self, name: impl Into<String>, logger: Arc<Logger>) {
		self.loggers.write().insert(name.into(), logger);
	}

	/// The live level table shared with every logger this registry made.
	pub fn levels(&self) -> &LevelTable {
		&self.levels
	}

	pub fn levels_handle(&self) -> Arc<LevelTable> {
		Arc::clone(&self.levels)
	}

	pub fn sink(&self) -> Arc<dyn Sink> {
		Arc::clone(&*self.sink.read())
	}

	/// Swap the sink. Existing loggers keep their old bindings until
	/// re-extended; see [`Registry::extend_all`].
	pub fn set_sink(&self, sink: Arc<dyn Sink>) {
		*self.sink.write() = sink;
	}

	pub fn create_strategy(&self) -> Arc<dyn CreateStrategy> {
		Arc::clone(&*self.create.read())
	}

	pub fn set_create(&self, strategy: Arc<dyn CreateStrategy>) {
		*self.create.write() = strategy;
	}

	pub fn construct_strategy(&self) -> Arc<dyn ConstructStrategy> {
		Arc::clone(&*self.construct.read())
	}

	pub fn set_construct(&self, strategy: Arc<dyn ConstructStrategy>) {
		*self.construct.write() = strategy;
	}

	pub fn extend_strategy(&self) -> Arc<dyn ExtendStrategy> {
		Arc::clone(&*self.extend.read())
	}

	pub fn set_extend(&self, strategy: Arc<dyn ExtendStrategy>) {
		*self.extend.write() = strategy;
	}

	/// Re-run the current extend strategy on one logger.
	pub fn extend(&self, logger: &Logger) {
		self.extend_strategy().extend(self, logger);
	}

	/// Re-run the current extend strategy on every cached logger, after
	/// the level table or the sink changed. Identities are untouched.
	pub fn extend_all(&self) {
		for logger in self.all().values() {
			self.extend(logger);
		}
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<_> = self.loggers.read().keys().cloned().collect();
		names.sort();
		f.debug_struct("Registry")
			.field("loggers", &names)
			.field("levels", &self.levels.snapshot())
			.finish()
	}
}

// Tests that exercise the registry through `omnilog-testing`'s capture sink
// live in `crates/core/tests/registry.rs` as integration tests: the testing
// crate depends on `omnilog-core`, so an inline `#[cfg(test)]` module would
// pull a second, incompatible copy of this crate into the test binary.
