// NGFW Simulator - Rule Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! The security-policy rule under construction.

use std::fmt;

use serde::Serialize;

use super::{App, SecurityProfile, Service, Zone};

/// The rule action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Allow,
    Deny,
}

impl Action {
    /// Get the display form, as shown in the policy table.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Allow => "ALLOW",
            Action::Deny => "DENY",
        }
    }

    /// Parse an action, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "allow" => Some(Action::Allow),
            "deny" => Some(Action::Deny),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The address-translation mode applied to matched traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NatType {
    None,
    Snat,
    Dnat,
    DnatSnat,
}

impl NatType {
    /// All NAT types in selector order.
    pub const ALL: [NatType; 4] = [NatType::None, NatType::Snat, NatType::Dnat, NatType::DnatSnat];

    /// Get the short identifier used in commands.
    pub fn id(&self) -> &'static str {
        match self {
            NatType::None => "none",
            NatType::Snat => "snat",
            NatType::Dnat => "dnat",
            NatType::DnatSnat => "dnat+snat",
        }
    }

    /// Get the display label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            NatType::None => "None",
            NatType::Snat => "SNAT",
            NatType::Dnat => "DNAT",
            NatType::DnatSnat => "U-Turn",
        }
    }

    /// Parse a NAT type from its short identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(NatType::None),
            "snat" => Some(NatType::Snat),
            "dnat" => Some(NatType::Dnat),
            "dnat+snat" | "u-turn" => Some(NatType::DnatSnat),
            _ => None,
        }
    }
}

impl fmt::Display for NatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The candidate security-policy rule the operator is editing.
///
/// Exactly one rule is active at a time, owned by the session controller
/// and tied to the current ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: String,
    pub src_zone: Zone,
    pub dst_zone: Zone,
    pub app: App,
    pub service: Service,
    pub action: Action,
    pub nat: NatType,
    pub profile: SecurityProfile,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            name: "Rule-1".to_string(),
            src_zone: Zone::Trust,
            dst_zone: Zone::Untrust,
            app: App::Any,
            service: Service::ApplicationDefault,
            action: Action::Allow,
            nat: NatType::None,
            profile: SecurityProfile::None,
        }
    }
}

impl Rule {
    /// Reset the fields that start fresh on a new ticket. Name, zones, and
    /// service carry over from the previous ticket.
    pub fn reset_for_next_ticket(&mut self) {
        self.action = Action::Allow;
        self.nat = NatType::None;
        self.app = App::Any;
        self.profile = SecurityProfile::None;
    }
}
