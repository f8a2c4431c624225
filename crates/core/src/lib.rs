// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Core of the omnilog logging facade.
//!
//! A [`Registry`] lazily creates and caches named [`Logger`]s. Each logger
//! carries one bound method per entry in the registry's [`LevelTable`];
//! extension (re)binds those methods from the current [`Sink`], preferring
//! a level-specific writer, then the generic one, then a no-op. The
//! create/construct/extend steps are replaceable strategies, so adapters
//! can swap any part of the pipeline without breaking logger references
//! already handed out.
//!
//! The facade never fails: unknown levels degrade to `"log"`, missing sink
//! capabilities degrade to silence.

use serde::Serialize;

mod builder;
mod config;
mod global;
mod level;
mod logger;
mod macros;
mod registry;
mod sink;
mod strategy;

pub use builder::RegistryBuilder;
pub use config::LoggerConfig;
pub use global::{all, get, get_with, registry};
pub use level::{DEFAULT_LEVEL, DEFAULT_LEVELS, LevelTable, Severity};
pub use logger::{LevelMethod, Logger};
pub use registry::Registry;
pub use serde_json::Value;
pub use sink::{ConsoleSink, LogEvent, NoopSink, Sink, SinkFn};
pub use strategy::{
	ConstructStrategy, CreateStrategy, DefaultConstruct, DefaultCreate, DefaultExtend, ExtendStrategy,
};

/// Convert anything serializable into a payload [`Value`]. Values that fail
/// to serialize become [`Value::Null`]; this path never fails.
pub fn value<T: Serialize>(value: T) -> Value {
	serde_json::to_value(value).unwrap_or(Value::Null)
}
