// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Re-extension, strategy replacement and the global entry points.

use std::sync::{
	Arc, Mutex,
	atomic::{AtomicUsize, Ordering},
};

use crossbeam_channel::{Receiver, unbounded};
use omnilog::{
	ConstructStrategy, CreateStrategy, ExtendStrategy, Logger, LoggerConfig, NoopSink, Registry, log, log_warn,
};
use omnilog_testing::{CaptureSink, CapturedEvent};
use serde_json::json;

fn capturing_registry() -> (Registry, Receiver<CapturedEvent>) {
	let (sender, receiver) = unbounded();
	let registry = Registry::builder().with_sink(Arc::new(CaptureSink::new(sender))).build();
	(registry, receiver)
}

#[test]
fn test_level_table_growth_propagates_on_re_extension() {
	let (registry, receiver) = capturing_registry();
	let logger = registry.get("db");

	registry.levels().set("silly", 7);
	// Recognized immediately for dispatch, but the binding is stale
	// until re-extension, so it degrades to the generic method.
	logger.call(&[json!("silly"), json!("before")]);
	assert_eq!(receiver.try_recv().unwrap().method, "log");

	registry.extend_all();
	logger.call(&[json!("silly"), json!("after")]);
	let event = receiver.try_recv().unwrap();
	assert_eq!(event.level, "silly");
	assert_eq!(event.method, "silly");
}

#[test]
fn test_sink_swap_propagates_on_re_extension_only() {
	let (registry, receiver) = capturing_registry();
	let logger = registry.get("db");

	registry.set_sink(Arc::new(NoopSink));
	logger.info(&[json!("old bindings still capture")]);
	assert_eq!(receiver.try_iter().count(), 1);

	registry.extend_all();
	logger.info(&[json!("new bindings are silent")]);
	assert_eq!(receiver.try_iter().count(), 0);
}

#[test]
fn test_re_extension_keeps_logger_identity() {
	let (registry, _receiver) = capturing_registry();
	let before = registry.get("db");
	registry.set_sink(Arc::new(NoopSink));
	registry.extend_all();
	assert!(Arc::ptr_eq(&before, &registry.get("db")));
}

struct PrefixedConstruct;

impl ConstructStrategy for PrefixedConstruct {
	fn construct(&self, registry: &Registry, name: &str, _config: &LoggerConfig) -> Arc<Logger> {
		Arc::new(Logger::new(format!("app/{name}"), registry.levels_handle()))
	}
}

#[test]
fn test_replacing_construct_affects_future_loggers_only() {
	let (registry, _receiver) = capturing_registry();
	let before = registry.get("db");
	registry.set_construct(Arc::new(PrefixedConstruct));
	let after = registry.get("net");
	assert_eq!(before.name(), "db");
	assert_eq!(after.name(), "app/net");
	// The cached logger is untouched by the new strategy.
	assert!(Arc::ptr_eq(&before, &registry.get("db")));
}

struct CountingCreate {
	created: Arc<AtomicUsize>,
}

impl CreateStrategy for CountingCreate {
	fn create(&self, registry: &Registry, name: &str, config: &LoggerConfig) -> Arc<Logger> {
		self.created.fetch_add(1, Ordering::SeqCst);
		let logger = registry.construct_strategy().construct(registry, name, config);
		registry.extend_strategy().extend(registry, &logger);
		logger
	}
}

#[test]
fn test_create_runs_once_per_name() {
	let (registry, _receiver) = capturing_registry();
	let created = Arc::new(AtomicUsize::new(0));
	registry.set_create(Arc::new(CountingCreate {
		created: Arc::clone(&created),
	}));
	registry.get("db");
	registry.get("db");
	registry.get("net");
	assert_eq!(created.load(Ordering::SeqCst), 2);
}

struct UppercaseExtend;

impl ExtendStrategy for UppercaseExtend {
	fn extend(&self, registry: &Registry, logger: &Logger) {
		let sink = registry.sink();
		for level in registry.levels().names() {
			if let Some(writer) = sink.writer(&level).or_else(|| sink.fallback()) {
				let level_name = level.clone();
				logger.bind(
					level,
					Arc::new(move |logger, payload| {
						let upper: Vec<_> = payload
							.iter()
							.map(|value| match value {
								omnilog::Value::String(text) => {
									omnilog::Value::String(text.to_uppercase())
								}
								other => other.clone(),
							})
							.collect();
						writer(&omnilog::LogEvent {
							logger: logger.name(),
							level: &level_name,
							payload: &upper,
						});
					}),
				);
			}
		}
	}
}

#[test]
fn test_replacing_extend_changes_binding_behavior() {
	let (registry, receiver) = capturing_registry();
	registry.set_extend(Arc::new(UppercaseExtend));
	let logger = registry.get("db");
	logger.warn(&[json!("disk full")]);
	let event = receiver.try_recv().unwrap();
	assert_eq!(event.payload, vec![json!("DISK FULL")]);
}

struct ConfigSniffingConstruct {
	seen: Arc<Mutex<Option<String>>>,
}

impl ConstructStrategy for ConfigSniffingConstruct {
	fn construct(&self, registry: &Registry, name: &str, config: &LoggerConfig) -> Arc<Logger> {
		if let Some(adapter) = config.field("adapter") {
			*self.seen.lock().unwrap() = adapter.as_str().map(str::to_string);
		}
		Arc::new(Logger::new(name, registry.levels_handle()))
	}
}

#[test]
fn test_config_is_threaded_through_to_strategies() {
	let (registry, _receiver) = capturing_registry();
	let seen = Arc::new(Mutex::new(None));
	registry.set_construct(Arc::new(ConfigSniffingConstruct {
		seen: Arc::clone(&seen),
	}));
	let config = LoggerConfig::new().with_field("adapter", "console");
	registry.get_with("db", &config);
	assert_eq!(seen.lock().unwrap().as_deref(), Some("console"));
}

#[test]
fn test_global_entry_points_share_one_registry() {
	let first = omnilog::get("it:global");
	let second = omnilog::registry().get("it:global");
	assert!(Arc::ptr_eq(&first, &second));
	assert!(omnilog::all().contains_key("it:global"));
}

#[test]
fn test_macros_drive_the_facade() {
	let (registry, receiver) = capturing_registry();
	let logger = registry.get("db");
	log!(logger, "warn", "disk full");
	log_warn!(logger, "{}% used", 93);
	let first = receiver.try_recv().unwrap();
	let second = receiver.try_recv().unwrap();
	assert_eq!(first.level, "warn");
	assert_eq!(first.payload, vec![json!("disk full")]);
	assert_eq!(second.level, "warn");
	assert_eq!(second.payload, vec![json!("93% used")]);
}
