// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Replaceable strategies for creating and extending loggers

use std::{collections::HashMap, sync::Arc};

use serde_json::Value;

use crate::{
	config::LoggerConfig,
	logger::{LevelMethod, Logger},
	registry::Registry,
	sink::{LogEvent, SinkFn},
};

/// Creation step: produce a ready-to-use logger for a name.
///
/// The default composes the registry's current construct and extend
/// strategies. Replace the whole slot to change the creation story end to
/// end, or leave it and replace the two smaller slots separately.
pub trait CreateStrategy: Send + Sync {
	fn create(&self, registry: &Registry, name: &str, config: &LoggerConfig) -> Arc<Logger>;
}

/// Construction step: build a fresh logger with nothing bound yet.
pub trait ConstructStrategy: Send + Sync {
	fn construct(&self, registry: &Registry, name: &str, config: &LoggerConfig) -> Arc<Logger>;
}

/// Extension step: (re)bind one method per level currently in the table.
///
/// Implementations must be idempotent: extending the same logger twice in a
/// row leaves it in the same state. Callers re-run extension after the
/// level table or sink changes; nothing propagates automatically.
pub trait ExtendStrategy: Send + Sync {
	fn extend(&self, registry: &Registry, logger: &Logger);
}

/// Default creation: construct, then extend, through whatever strategies
/// the registry currently holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCreate;

impl CreateStrategy for DefaultCreate {
	fn create(&self, registry: &Registry, name: &str, config: &LoggerConfig) -> Arc<Logger> {
		let logger = registry.construct_strategy().construct(registry, name, config);
		registry.extend_strategy().extend(registry, &logger);
		logger
	}
}

/// Default construction: a logger carrying the name verbatim and the
/// registry's live level table. The config is threaded through for
/// replacement strategies and unused here.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConstruct;

impl ConstructStrategy for DefaultConstruct {
	fn construct(&self, registry: &Registry, name: &str, _config: &LoggerConfig) -> Arc<Logger> {
		Arc::new(Logger::new(name, registry.levels_handle()))
	}
}

/// Default extension: for every level in the table, prefer the sink's
/// same-named writer, else its generic writer, else a no-op. The full map
/// is built first and swapped in one step.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExtend;

impl ExtendStrategy for DefaultExtend {
	fn extend(&self, registry: &Registry, logger: &Logger) {
		let sink = registry.sink();
		let mut methods = HashMap::new();
		for level in registry.levels().names() {
			let method = match sink.writer(&level).or_else(|| sink.fallback()) {
				Some(writer) => bind(level.clone(), writer),
				None => noop_method(),
			};
			methods.insert(level, method);
		}
		logger.rebind(methods);
	}
}

fn bind(level: String, writer: SinkFn) -> LevelMethod {
	Arc::new(move |logger: &Logger, payload: &[Value]| {
		writer(&LogEvent {
			logger: logger.name(),
			level: &level,
			payload,
		})
	})
}

fn noop_method() -> LevelMethod {
	Arc::new(|_, _| {})
}

// Tests that exercise extension through `omnilog-testing`'s capture sink live
// in `crates/core/tests/strategy.rs` as integration tests: the testing crate
// depends on `omnilog-core`, so an inline `#[cfg(test)]` module would pull a
// second, incompatible copy of this crate into the test binary.
