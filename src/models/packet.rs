// NGFW Simulator - Packet Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! The ground-truth traffic a ticket asks the operator to handle.

use super::{App, Zone};

/// An inbound packet description. Static per ticket; addresses and the
/// protocol label are cosmetic, matching happens on zones and App-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet {
    pub src_zone: Zone,
    pub dst_zone: Zone,
    pub src_ip: &'static str,
    pub dst_ip: &'static str,
    /// Protocol label such as "TCP/443".
    pub proto: &'static str,
    pub app: App,
}

impl Packet {
    /// Get the port component of the protocol label, if present.
    pub fn port(&self) -> Option<&'static str> {
        self.proto.split('/').nth(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_from_proto_label() {
        let packet = Packet {
            src_zone: Zone::Trust,
            dst_zone: Zone::Dmz,
            src_ip: "10.1.1.100",
            dst_ip: "192.168.50.5",
            proto: "TCP/2222",
            app: App::Ssh,
        };
        assert_eq!(packet.port(), Some("2222"));
    }
}
