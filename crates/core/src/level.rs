// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Level table: level names mapped to numeric severities

use std::collections::BTreeMap;

use parking_lot::RwLock;

/// Numeric severity of a level. Higher values mean more verbose logging.
pub type Severity = u32;

/// Level used when a call does not select one, and the name of the generic
/// fallback method every sink may provide.
pub const DEFAULT_LEVEL: &str = "log";

/// The six default levels every logger is expected to expose.
pub const DEFAULT_LEVELS: [(&str, Severity); 6] = [
	("error", 1),
	("warn", 2),
	("info", 3),
	("log", 4),
	("debug", 5),
	("trace", 6),
];

/// Mapping from level name to severity.
///
/// The table is shared between a registry and every logger it creates, so
/// dispatch always consults the current contents. Callers may extend or
/// replace it at any time; already-created loggers pick up the change for
/// level recognition immediately, while their method bindings only change
/// once they are re-extended.
#[derive(Debug)]
pub struct LevelTable {
	levels: RwLock<BTreeMap<String, Severity>>,
}

impl LevelTable {
	/// A table with no levels at all.
	pub fn empty() -> Self {
		Self {
			levels: RwLock::new(BTreeMap::new()),
		}
	}

	pub fn contains(&self, name: &str) -> bool {
		self.levels.read().contains_key(name)
	}

	pub fn severity(&self, name: &str) -> Option<Severity> {
		self.levels.read().get(name).copied()
	}

	/// Add a level, or change the severity of an existing one.
	pub fn set(&self, name: impl Into<String>, severity: Severity) {
		self.levels.write().insert(name.into(), severity);
	}

	pub fn remove(&self, name: &str) -> Option<Severity> {
		self.levels.write().remove(name)
	}

	/// Replace the whole table in place. Loggers holding a handle to this
	/// table observe the new contents on their next call.
	pub fn replace(&self, levels: BTreeMap<String, Severity>) {
		*self.levels.write() = levels;
	}

	/// Level names in severity order.
	pub fn names(&self) -> Vec<String> {
		let levels = self.levels.read();
		let mut names: Vec<_> = levels.keys().cloned().collect();
		names.sort_by_key(|name| levels[name]);
		names
	}

	pub fn snapshot(&self) -> BTreeMap<String, Severity> {
		self.levels.read().clone()
	}

	pub fn len(&self) -> usize {
		self.levels.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.levels.read().is_empty()
	}
}

impl Default for LevelTable {
	fn default() -> Self {
		let table = Self::empty();
		for (name, severity) in DEFAULT_LEVELS {
			table.set(name, severity);
		}
		table
	}
}

impl From<BTreeMap<String, Severity>> for LevelTable {
	fn from(levels: BTreeMap<String, Severity>) -> Self {
		Self {
			levels: RwLock::new(levels),
		}
	}
}
