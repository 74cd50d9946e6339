// NGFW Simulator - Zone Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Security zone model.

use std::fmt;

use serde::Serialize;

/// A named trust boundary, used as both source and destination match field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Trust,
    Untrust,
    Dmz,
    Guest,
}

impl Zone {
    /// All zones in display order.
    pub const ALL: [Zone; 4] = [Zone::Trust, Zone::Untrust, Zone::Dmz, Zone::Guest];

    /// Get the short identifier used in commands and serialized data.
    pub fn id(&self) -> &'static str {
        match self {
            Zone::Trust => "trust",
            Zone::Untrust => "untrust",
            Zone::Dmz => "dmz",
            Zone::Guest => "guest",
        }
    }

    /// Get the interface label shown in the topology view.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Trust => "Trust-L3",
            Zone::Untrust => "Untrust-L3",
            Zone::Dmz => "DMZ-L3",
            Zone::Guest => "Guest-L3",
        }
    }

    /// Get the illustrative network for the zone. Display only; zone
    /// matching never inspects addresses.
    pub fn cidr(&self) -> &'static str {
        match self {
            Zone::Trust => "10.1.1.0/24",
            Zone::Untrust => "0.0.0.0/0",
            Zone::Dmz => "192.168.50.0/24",
            Zone::Guest => "172.16.0.0/24",
        }
    }

    /// Parse a zone from its short identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trust" => Some(Zone::Trust),
            "untrust" => Some(Zone::Untrust),
            "dmz" => Some(Zone::Dmz),
            "guest" => Some(Zone::Guest),
            _ => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for zone in Zone::ALL {
            assert_eq!(Zone::parse(zone.id()), Some(zone));
        }
        assert_eq!(Zone::parse("internet"), None);
    }
}
