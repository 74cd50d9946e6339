// NGFW Simulator - Policy Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Security-policy evaluation.

mod evaluator;

pub use evaluator::evaluate;

use std::fmt;

use serde::Serialize;

/// Reason reported when the rule zones do not cover the packet.
pub const REASON_ZONE_MISMATCH: &str = "Zone Mismatch";
/// Reason reported when the rule's App-ID does not cover the packet.
pub const REASON_APP_MISMATCH: &str = "App-ID Mismatch";
/// Reason reported when the rule action is wrong for the ticket.
pub const REASON_ACTION_MISMATCH: &str = "Action Mismatch";
/// Reason reported when an allow rule declares the wrong NAT type.
pub const REASON_NAT_MISMATCH: &str = "NAT Mismatch";
/// Reason reported when an allow rule is missing a required profile.
pub const REASON_PROFILE_MISSING: &str = "Security Profile Missing! (Threat inspection required)";
/// Reason reported on a correctly configured rule.
pub const REASON_TRAFFIC_ALLOWED: &str = "Traffic Allowed";
/// Reason reported when a port-mismatch ticket sees any service other than
/// `application-default` or `any`.
pub const REASON_CONFIG_MISMATCH: &str = "Configuration mismatch.";

/// The simulated firewall's final verdict on the packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Disposition {
    Allow,
    Drop,
}

impl Disposition {
    /// Get the uppercase form used in the traffic log.
    pub fn label(&self) -> &'static str {
        match self {
            Disposition::Allow => "ALLOW",
            Disposition::Drop => "DROP",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome of one commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// Whether the operator solved the ticket.
    pub passed: bool,
    /// Operator-facing explanation of the verdict.
    pub reason: String,
    /// What happened to the packet.
    pub disposition: Disposition,
}

impl EvaluationResult {
    pub(crate) fn pass(reason: impl Into<String>, disposition: Disposition) -> Self {
        Self {
            passed: true,
            reason: reason.into(),
            disposition,
        }
    }

    pub(crate) fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: reason.into(),
            disposition: Disposition::Drop,
        }
    }
}
