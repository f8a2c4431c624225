// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! omnilog: a minimal, pluggable logging facade.
//!
//! Ask a [`Registry`] for a name and get back a stable, shared [`Logger`]
//! whose per-level methods dispatch to whatever [`Sink`] is currently
//! configured. The level table and the create/construct/extend steps are
//! all replaceable at runtime without breaking logger references already
//! handed out.
//!
//! ```
//! use omnilog::{Registry, value};
//!
//! let registry = Registry::new();
//! let db = registry.get("app:db");
//!
//! // First argument selects the level when it matches the table.
//! db.call(&[value("warn"), value("disk almost full")]);
//!
//! // Or address a level method directly.
//! db.info(&[value("connected")]);
//!
//! // Same name, same logger.
//! assert!(std::sync::Arc::ptr_eq(&db, &registry.get("app:db")));
//! ```

pub use omnilog_core as core;

pub use omnilog_core::{
	ConsoleSink, ConstructStrategy, CreateStrategy, DEFAULT_LEVEL, DEFAULT_LEVELS, DefaultConstruct,
	DefaultCreate, DefaultExtend, ExtendStrategy, LevelMethod, LevelTable, LogEvent, Logger, LoggerConfig,
	NoopSink, Registry, RegistryBuilder, Severity, Sink, SinkFn, Value, all, get, get_with, registry, value,
};

pub use omnilog_core::{log, log_debug, log_error, log_info, log_trace, log_warn};
