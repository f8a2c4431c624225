// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Capture sink sending events through a channel

use std::{collections::BTreeSet, sync::Arc};

use crossbeam_channel::Sender;
use omnilog_core::{DEFAULT_LEVEL, LogEvent, Sink, SinkFn, Value};

/// One event as observed by a [`CaptureSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedEvent {
	/// Name of the logger the call went through
	pub logger: String,
	/// Level name the call was dispatched at
	pub level: String,
	/// Sink capability that handled it: the level name of a specific
	/// writer, or the generic method name for the fallback
	pub method: String,
	/// Message payload
	pub payload: Vec<Value>,
}

/// Sink that records every event into a channel instead of printing.
///
/// By default it has a writer for every level probed plus the generic
/// fallback. Restrict the per-level writers with [`CaptureSink::with_levels`]
/// and drop the fallback with [`CaptureSink::without_fallback`] to model a
/// console missing some or all methods.
#[derive(Debug, Clone)]
pub struct CaptureSink {
	sender: Sender<CapturedEvent>,
	levels: Option<BTreeSet<String>>,
	fallback: bool,
}

impl CaptureSink {
	pub fn new(sender: Sender<CapturedEvent>) -> Self {
		Self {
			sender,
			levels: None,
			fallback: true,
		}
	}

	/// Only the given level names get a dedicated writer; everything else
	/// has to go through the fallback.
	pub fn with_levels<I, S>(mut self, levels: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.levels = Some(levels.into_iter().map(Into::into).collect());
		self
	}

	/// Remove the generic writer as well.
	pub fn without_fallback(mut self) -> Self {
		self.fallback = false;
		self
	}

	fn record(sender: &Sender<CapturedEvent>, method: &str, event: &LogEvent<'_>) {
		// A dropped receiver just means nobody is looking anymore.
		let _ = sender.send(CapturedEvent {
			logger: event.logger.to_string(),
			level: event.level.to_string(),
			method: method.to_string(),
			payload: event.payload.to_vec(),
		});
	}
}

impl Sink for CaptureSink {
	fn writer(&self, level: &str) -> Option<SinkFn> {
		if let Some(levels) = &self.levels {
			if !levels.contains(level) {
				return None;
			}
		}
		let sender = self.sender.clone();
		let method = level.to_string();
		Some(Arc::new(move |event| Self::record(&sender, &method, event)))
	}

	fn fallback(&self) -> Option<SinkFn> {
		if !self.fallback {
			return None;
		}
		let sender = self.sender.clone();
		Some(Arc::new(move |event| Self::record(&sender, DEFAULT_LEVEL, event)))
	}
}

#[cfg(test)]
mod tests {
	use crossbeam_channel::unbounded;
	use serde_json::json;

	use super::*;

	#[test]
	fn test_default_capabilities() {
		let (sender, _receiver) = unbounded();
		let sink = CaptureSink::new(sender);
		assert!(sink.writer("error").is_some());
		assert!(sink.writer("anything").is_some());
		assert!(sink.fallback().is_some());
	}

	#[test]
	fn test_restricted_levels() {
		let (sender, _receiver) = unbounded();
		let sink = CaptureSink::new(sender).with_levels(["info"]);
		assert!(sink.writer("info").is_some());
		assert!(sink.writer("error").is_none());
		assert!(sink.fallback().is_some());
	}

	#[test]
	fn test_without_fallback() {
		let (sender, _receiver) = unbounded();
		let sink = CaptureSink::new(sender).with_levels(Vec::<String>::new()).without_fallback();
		assert!(sink.writer("info").is_none());
		assert!(sink.fallback().is_none());
	}

	#[test]
	fn test_records_logger_level_and_payload() {
		let (sender, receiver) = unbounded();
		let sink = CaptureSink::new(sender);
		let writer = sink.writer("warn").unwrap();
		let payload = vec![json!("disk full")];
		writer(&LogEvent {
			logger: "db",
			level: "warn",
			payload: &payload,
		});
		let event = receiver.try_recv().unwrap();
		assert_eq!(event.logger, "db");
		assert_eq!(event.level, "warn");
		assert_eq!(event.method, "warn");
		assert_eq!(event.payload, payload);
	}

	#[test]
	fn test_fallback_reports_generic_method() {
		let (sender, receiver) = unbounded();
		let sink = CaptureSink::new(sender).with_levels(["info"]);
		let writer = sink.fallback().unwrap();
		writer(&LogEvent {
			logger: "db",
			level: "trace",
			payload: &[],
		});
		let event = receiver.try_recv().unwrap();
		assert_eq!(event.level, "trace");
		assert_eq!(event.method, "log");
	}

	#[test]
	fn test_dropped_receiver_is_harmless() {
		let (sender, receiver) = unbounded();
		let sink = CaptureSink::new(sender);
		let writer = sink.writer("info").unwrap();
		drop(receiver);
		writer(&LogEvent {
			logger: "db",
			level: "info",
			payload: &[],
		});
	}
}
