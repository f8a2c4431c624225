// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Named loggers and call dispatch

use std::{collections::HashMap, fmt, sync::Arc};

use parking_lot::RwLock;
use serde_json::Value;

use crate::level::{DEFAULT_LEVEL, LevelTable};

/// A method bound on a logger for one level. Receives the logger itself as
/// the receiver plus the message payload.
pub type LevelMethod = Arc<dyn Fn(&Logger, &[Value]) + Send + Sync>;

/// A named dispatch target.
///
/// Identity is carried by the name field; any string is a legal name,
/// including ones with characters like `:` or `-`. All call sites that
/// request the same name from a registry share the same instance.
///
/// Method bindings are mutable: extension swaps the whole map under the
/// lock, and readers clone the bound `Arc` before invoking, so rebinding
/// never blocks an in-flight call.
pub struct Logger {
	name: String,
	levels: Arc<LevelTable>,
	methods: RwLock<HashMap<String, LevelMethod>>,
}

impl Logger {
	/// A fresh logger with no methods bound yet. Binding happens through
	/// extension; until then every call is a no-op.
	pub fn new(name: impl Into<String>, levels: Arc<LevelTable>) -> Self {
		Self {
			name: name.into(),
			levels,
			methods: RwLock::new(HashMap::new()),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// The callable form of the logger.
	///
	/// When more than one argument is given and the first is a string
	/// matching a level currently in the table, that argument selects the
	/// level and the rest is the payload. Anything else, including a
	/// single argument that happens to equal a level name, goes to the
	/// default level with the full argument list as payload.
	pub fn call(&self, args: &[Value]) {
		if args.len() > 1 {
			if let Some(Value::String(level)) = args.first() {
				if self.levels.contains(level) {
					self.invoke(level, &args[1..]);
					return;
				}
			}
		}
		self.invoke(DEFAULT_LEVEL, args);
	}

	/// Invoke the method bound for `level` with the logger as receiver.
	///
	/// A level with no binding (the table grew after the last extension)
	/// degrades to the default-level binding; a logger with no bindings at
	/// all silently drops the call. This path never fails.
	pub fn invoke(&self, level: &str, payload: &[Value]) {
		let method = {
			let methods = self.methods.read();
			methods.get(level).or_else(|| methods.get(DEFAULT_LEVEL)).cloned()
		};
		if let Some(method) = method {
			method(self, payload);
		}
	}

	pub fn error(&self, payload: &[Value]) {
		self.invoke("error", payload);
	}

	pub fn warn(&self, payload: &[Value]) {
		self.invoke("warn", payload);
	}

	pub fn info(&self, payload: &[Value]) {
		self.invoke("info", payload);
	}

	pub fn log(&self, payload: &[Value]) {
		self.invoke("log", payload);
	}

	pub fn debug(&self, payload: &[Value]) {
		self.invoke("debug", payload);
	}

	pub fn trace(&self, payload: &[Value]) {
		self.invoke("trace", payload);
	}

	/// The current binding for a level, if any.
	pub fn method(&self, level: &str) -> Option<LevelMethod> {
		self.methods.read().get(level).cloned()
	}

	/// Bind a single method, keeping the others.
	pub fn bind(&self, level: impl Into<String>, method: LevelMethod) {
		self.methods.write().insert(level.into(), method);
	}

	/// Swap the whole method map. Extension strategies build the new map
	/// first and publish it in one step.
	pub fn rebind(&self, methods: HashMap<String, LevelMethod>) {
		*self.methods.write() = methods;
	}

	/// Names that currently have a binding, sorted for stable output.
	pub fn bound_levels(&self) -> Vec<String> {
		let mut names: Vec<_> = self.methods.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// The level table this logger consults during dispatch.
	pub fn levels(&self) -> &LevelTable {
		&self.levels
	}
}

impl fmt::Debug for Logger {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Logger")
			.field("name", &self.name)
			.field("bound_levels", &self.bound_levels())
			.finish()
	}
}
