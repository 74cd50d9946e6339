// NGFW Simulator - Log Entry Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! The audit record written for every commit attempt.

use serde::Serialize;

use crate::models::{App, Packet};
use crate::policy::{Disposition, EvaluationResult};

/// One traffic log record. Immutable once appended.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Wall-clock time of the commit, "HH:MM:SS".
    pub time: String,
    pub src: String,
    pub dst: String,
    pub app: App,
    pub action: Disposition,
    /// Session volume; zero whenever the packet was dropped.
    pub bytes: u64,
    pub reason: String,
    pub flags: String,
    pub country: String,
}

impl LogEntry {
    /// Build the record for one commit attempt.
    pub fn from_commit(time: String, packet: &Packet, result: &EvaluationResult, bytes: u64) -> Self {
        let allowed = result.disposition == Disposition::Allow;
        Self {
            time,
            src: packet.src_ip.to_string(),
            dst: packet.dst_ip.to_string(),
            app: packet.app,
            action: result.disposition,
            bytes: if allowed { bytes } else { 0 },
            reason: result.reason.clone(),
            flags: if allowed { "0x00" } else { "0xBAD" }.to_string(),
            country: "US -> US".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Zone;

    fn packet() -> Packet {
        Packet {
            src_zone: Zone::Trust,
            dst_zone: Zone::Untrust,
            src_ip: "10.1.1.55",
            dst_ip: "142.250.1.1",
            proto: "TCP/443",
            app: App::Ssl,
        }
    }

    #[test]
    fn test_dropped_traffic_records_zero_bytes_and_bad_flags() {
        let result = EvaluationResult::fail("Zone Mismatch");
        let entry = LogEntry::from_commit("10:15:00".to_string(), &packet(), &result, 4242);
        assert_eq!(entry.bytes, 0);
        assert_eq!(entry.flags, "0xBAD");
        assert_eq!(entry.action, Disposition::Drop);
    }

    #[test]
    fn test_allowed_traffic_keeps_sampled_bytes() {
        let result = EvaluationResult::pass("Traffic Allowed", Disposition::Allow);
        let entry = LogEntry::from_commit("10:15:00".to_string(), &packet(), &result, 4242);
        assert_eq!(entry.bytes, 4242);
        assert_eq!(entry.flags, "0x00");
    }
}
