// NGFW Simulator - Monitor Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Traffic log models and storage.

mod entry;
mod traffic_log;

pub use entry::LogEntry;
pub use traffic_log::TrafficLog;
