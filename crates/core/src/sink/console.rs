// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Console sink writing to stdout/stderr

use std::sync::Arc;

use chrono::Utc;
use colored::Colorize;

use super::{LogEvent, Sink, SinkFn};

/// Level names a console natively has a method for. Everything else goes
/// through the generic writer.
const CONSOLE_LEVELS: [&str; 6] = ["error", "warn", "info", "log", "debug", "trace"];

/// Sink backed by the process console.
///
/// Writers exist for the six console level names; any other level falls
/// back to the generic writer. error and warn target stderr when
/// `stderr_for_errors` is on.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
	color: bool,
	stderr_for_errors: bool,
	timestamps: bool,
}

impl ConsoleSink {
	pub fn new() -> Self {
		Self {
			color: true,
			stderr_for_errors: true,
			timestamps: true,
		}
	}

	pub fn with_color(mut self, color: bool) -> Self {
		self.color = color;
		self
	}

	pub fn with_stderr_for_errors(mut self, stderr_for_errors: bool) -> Self {
		self.stderr_for_errors = stderr_for_errors;
		self
	}

	pub fn with_timestamps(mut self, timestamps: bool) -> Self {
		self.timestamps = timestamps;
		self
	}

	fn write(&self, event: &LogEvent<'_>) {
		let line = self.format(event);
		if self.stderr_for_errors && matches!(event.level, "error" | "warn") {
			eprintln!("{}", line);
		} else {
			println!("{}", line);
		}
	}

	fn format(&self, event: &LogEvent<'_>) -> String {
		let mut line = String::new();
		if self.timestamps {
			line.push_str(&Utc::now().format("%Y-%m-%d %H:%M:%S%.3f ").to_string());
		}
		let label = format!("{:>5}", event.level.to_uppercase());
		let label = if self.color {
			paint(event.level, &label)
		} else {
			label
		};
		line.push_str(&label);
		line.push_str(" [");
		line.push_str(event.logger);
		line.push_str("] ");
		line.push_str(&event.message());
		line
	}
}

fn paint(level: &str, label: &str) -> String {
	match level {
		"error" => label.red().bold(),
		"warn" => label.yellow(),
		"info" => label.green(),
		"debug" => label.blue(),
		"trace" => label.dimmed(),
		_ => label.normal(),
	}
	.to_string()
}

impl Default for ConsoleSink {
	fn default() -> Self {
		Self::new()
	}
}

impl Sink for ConsoleSink {
	fn writer(&self, level: &str) -> Option<SinkFn> {
		if !CONSOLE_LEVELS.contains(&level) {
			return None;
		}
		let sink = *self;
		Some(Arc::new(move |event| sink.write(event)))
	}

	fn fallback(&self) -> Option<SinkFn> {
		let sink = *self;
		Some(Arc::new(move |event| sink.write(event)))
	}
}
