// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Test helpers for the omnilog facade

mod capture;

pub use capture::{CaptureSink, CapturedEvent};
