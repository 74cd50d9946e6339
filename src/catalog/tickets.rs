// NGFW Simulator - Built-in Tickets
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! The built-in training course.

use crate::models::{Action, App, NatType, Packet, SecurityProfile, Service, Zone};

use super::{EvaluationStrategy, Scenario, Solution};

/// All tickets, in course order.
pub const TICKETS: &[Scenario] = &[
    Scenario {
        id: 1,
        title: "Secure Internet Access",
        desc: "Users in Trust need to browse secure websites. Policy requires basic Antivirus protection.",
        packet: Packet {
            src_zone: Zone::Trust,
            dst_zone: Zone::Untrust,
            src_ip: "10.1.1.55",
            dst_ip: "142.250.1.1",
            proto: "TCP/443",
            app: App::Ssl,
        },
        solution: Solution {
            src_zone: Zone::Trust,
            dst_zone: Zone::Untrust,
            app: App::Ssl,
            service: Service::ApplicationDefault,
            action: Action::Allow,
            nat: NatType::Snat,
            profile: Some(SecurityProfile::Default),
        },
        strategy: EvaluationStrategy::Standard,
        hint: "Zone: Trust->Untrust. App: ssl. NAT: SNAT. Profile: Default (for AV).",
    },
    Scenario {
        id: 2,
        title: "Publishing DMZ Web Server",
        desc: "Public internet users need to access our Company Portal hosted in the DMZ.",
        packet: Packet {
            src_zone: Zone::Untrust,
            dst_zone: Zone::Dmz,
            src_ip: "203.0.113.50",
            dst_ip: "203.0.113.1",
            proto: "TCP/80",
            app: App::WebBrowsing,
        },
        solution: Solution {
            src_zone: Zone::Untrust,
            dst_zone: Zone::Dmz,
            app: App::WebBrowsing,
            service: Service::ApplicationDefault,
            action: Action::Allow,
            nat: NatType::Dnat,
            profile: Some(SecurityProfile::Default),
        },
        strategy: EvaluationStrategy::Standard,
        hint: "Inbound traffic needs DNAT to find the internal server IP.",
    },
    Scenario {
        id: 3,
        title: "Block Non-Standard SSH",
        desc: "An internal developer is trying to SSH to a server in the DMZ using a non-standard high port (2222).",
        packet: Packet {
            src_zone: Zone::Trust,
            dst_zone: Zone::Dmz,
            src_ip: "10.1.1.100",
            dst_ip: "192.168.50.5",
            proto: "TCP/2222",
            app: App::Ssh,
        },
        solution: Solution {
            src_zone: Zone::Trust,
            dst_zone: Zone::Dmz,
            app: App::Ssh,
            service: Service::ApplicationDefault,
            action: Action::Allow,
            nat: NatType::None,
            profile: None,
        },
        strategy: EvaluationStrategy::PortMismatchWarning,
        hint: "Use 'application-default' service to force standard ports. The packet should naturally drop.",
    },
    Scenario {
        id: 4,
        title: "The Hairpin (U-Turn) NAT",
        desc: "An internal user (Trust) is trying to access the DMZ Web Server via its PUBLIC IP.",
        packet: Packet {
            src_zone: Zone::Trust,
            dst_zone: Zone::Untrust,
            src_ip: "10.1.1.50",
            dst_ip: "203.0.113.1",
            proto: "TCP/80",
            app: App::WebBrowsing,
        },
        solution: Solution {
            src_zone: Zone::Trust,
            dst_zone: Zone::Untrust,
            app: App::WebBrowsing,
            service: Service::ApplicationDefault,
            action: Action::Allow,
            nat: NatType::DnatSnat,
            profile: Some(SecurityProfile::Default),
        },
        strategy: EvaluationStrategy::Standard,
        hint: "Requires DNAT (to find server) AND SNAT (so server replies to Firewall, not User).",
    },
    Scenario {
        id: 5,
        title: "Data Exfiltration Attempt",
        desc: "A compromised host in Guest is trying to tunnel data via DNS to a suspicious IP.",
        packet: Packet {
            src_zone: Zone::Guest,
            dst_zone: Zone::Untrust,
            src_ip: "172.16.0.99",
            dst_ip: "1.2.3.4",
            proto: "UDP/53",
            app: App::Dns,
        },
        solution: Solution {
            src_zone: Zone::Guest,
            dst_zone: Zone::Untrust,
            app: App::Dns,
            service: Service::ApplicationDefault,
            action: Action::Deny,
            nat: NatType::None,
            profile: None,
        },
        strategy: EvaluationStrategy::Standard,
        hint: "This looks suspicious. Create a DENY rule.",
    },
];
