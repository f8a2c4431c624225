// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::sync::Arc;

use omnilog::{NoopSink, Registry, log, log_error, log_info, value};

fn main() {
	let registry = Registry::builder().with_console_custom(true, true).build();

	let app = registry.get("app");
	let db = registry.get("app:db");

	log_info!(app, "=== omnilog facade demo ===");
	log_info!(app, "");

	// The callable form: a recognized leading level selects the level.
	app.call(&[value("warn"), value("cache size above watermark")]);
	log!(db, "info", "connected to primary");

	// A single argument is always payload, even when it names a level.
	db.call(&[value("info")]);

	// Unknown levels ride along as payload at the default level.
	log!(db, "fatal", "not a level, just words");

	// Level methods are plain methods.
	db.debug(&[value("pool"), value(serde_json::json!({"idle": 4, "busy": 2}))]);
	log_error!(db, "replica {} lagging by {}s", 2, 17);

	// Extending the level table, then re-extending existing loggers,
	// makes the new level dispatchable everywhere.
	registry.levels().set("silly", 7);
	registry.extend_all();
	db.call(&[value("silly"), value("walks department")]);

	// Swapping the sink reroutes output after re-extension.
	registry.set_sink(Arc::new(NoopSink));
	registry.extend_all();
	log_info!(app, "this line goes nowhere");

	let mut names: Vec<_> = registry.all().into_keys().collect();
	names.sort();
	println!("registry now holds {} loggers: {:?}", names.len(), names);
}
