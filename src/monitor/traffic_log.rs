// NGFW Simulator - Traffic Log
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Append-only, session-scoped traffic log.

use std::collections::VecDeque;

use super::LogEntry;

/// The ordered log of commit attempts, most recent first. Unbounded; a
/// training session is short-lived and single-user.
#[derive(Debug, Default)]
pub struct TrafficLog {
    entries: VecDeque<LogEntry>,
}

impl TrafficLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Existing records are never touched.
    pub fn record(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
    }

    /// Iterate over all records, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Get a record by its position in `entries()` order.
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    /// Get the most recent record.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{App, Packet, Zone};
    use crate::policy::{Disposition, EvaluationResult};

    fn entry(time: &str) -> LogEntry {
        let packet = Packet {
            src_zone: Zone::Guest,
            dst_zone: Zone::Untrust,
            src_ip: "172.16.0.99",
            dst_ip: "1.2.3.4",
            proto: "UDP/53",
            app: App::Dns,
        };
        let result = EvaluationResult::pass("Traffic Allowed", Disposition::Allow);
        LogEntry::from_commit(time.to_string(), &packet, &result, 1000)
    }

    #[test]
    fn test_reads_most_recent_first() {
        let mut log = TrafficLog::new();
        log.record(entry("10:00:00"));
        log.record(entry("10:00:01"));
        log.record(entry("10:00:02"));

        let times: Vec<&str> = log.entries().map(|e| e.time.as_str()).collect();
        assert_eq!(times, ["10:00:02", "10:00:01", "10:00:00"]);
        assert_eq!(log.latest().unwrap().time, "10:00:02");
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_append_does_not_disturb_existing_records() {
        let mut log = TrafficLog::new();
        log.record(entry("10:00:00"));
        let first_reason = log.latest().unwrap().reason.clone();
        log.record(entry("10:00:01"));
        assert_eq!(log.get(1).unwrap().reason, first_reason);
        assert_eq!(log.get(1).unwrap().time, "10:00:00");
    }
}
