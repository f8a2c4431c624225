// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Sinks: the underlying output capability loggers bind against

use std::sync::Arc;

use serde_json::Value;

mod console;
mod noop;

pub use console::ConsoleSink;
pub use noop::NoopSink;

/// One dispatched log call, as seen by a sink writer.
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
	/// Name of the logger the call went through
	pub logger: &'a str,
	/// Level name the call was dispatched at
	pub level: &'a str,
	/// Message payload
	pub payload: &'a [Value],
}

impl LogEvent<'_> {
	/// Render the payload the way a console would: strings verbatim,
	/// everything else as JSON, space separated.
	pub fn message(&self) -> String {
		self.payload
			.iter()
			.map(|value| match value {
				Value::String(text) => text.clone(),
				other => other.to_string(),
			})
			.collect::<Vec<_>>()
			.join(" ")
	}
}

/// A writer taken from a sink at extension time.
pub type SinkFn = Arc<dyn Fn(&LogEvent<'_>) + Send + Sync>;

/// An output capability with optional per-level writers and an optional
/// generic one.
///
/// Extension probes capabilities explicitly: a level writer if the sink has
/// one, else the generic writer, else nothing (the binding becomes a
/// no-op). Sinks never get to fail a probe loudly; absence is expressed as
/// `None`.
pub trait Sink: Send + Sync {
	/// A writer dedicated to the given level name, if this sink has one.
	fn writer(&self, level: &str) -> Option<SinkFn>;

	/// The generic writer used when a level-specific one is absent.
	fn fallback(&self) -> Option<SinkFn>;
}
