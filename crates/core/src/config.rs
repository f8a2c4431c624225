// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Opaque per-logger config threaded through creation

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Config handed to the create and construct strategies.
///
/// The default strategies ignore it entirely; it exists so replacement
/// strategies have somewhere to read adapter-specific settings from.
/// Values that fail to serialize are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggerConfig {
	fields: HashMap<String, Value>,
}

impl LoggerConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_field(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
		if let Ok(json_value) = serde_json::to_value(value) {
			self.fields.insert(key.into(), json_value);
		}
		self
	}

	pub fn field(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}
