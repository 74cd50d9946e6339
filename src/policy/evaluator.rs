// NGFW Simulator - Policy Evaluator
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! The pure decision function for a committed rule.
//!
//! Checks run in a fixed order and the first failure wins, so the reported
//! reason is always singular and deterministic. The byte counter and the
//! clock used by the traffic log are injected elsewhere; nothing here reads
//! ambient state.

use crate::catalog::{EvaluationStrategy, Scenario};
use crate::models::{Action, App, Rule, Service};

use super::{
    Disposition, EvaluationResult, REASON_ACTION_MISMATCH, REASON_APP_MISMATCH,
    REASON_CONFIG_MISMATCH, REASON_NAT_MISMATCH, REASON_PROFILE_MISSING, REASON_TRAFFIC_ALLOWED,
    REASON_ZONE_MISMATCH,
};

/// Evaluate a candidate rule against a ticket.
pub fn evaluate(scenario: &Scenario, rule: &Rule) -> EvaluationResult {
    match scenario.strategy {
        EvaluationStrategy::PortMismatchWarning => port_mismatch_verdict(scenario, rule),
        EvaluationStrategy::Standard => standard_verdict(scenario, rule),
    }
}

/// Verdict for tickets whose App-ID contradicts the port it arrives on.
/// Decided entirely by the declared service; zones and action are not
/// consulted, the drop happens before the rest of the rule matters.
fn port_mismatch_verdict(scenario: &Scenario, rule: &Rule) -> EvaluationResult {
    let packet = &scenario.packet;
    match rule.service {
        Service::ApplicationDefault => {
            // Catalog validation guarantees a standard port and a port label
            // for this strategy.
            let standard = packet.app.standard_port().unwrap_or_default();
            let seen = packet.port().unwrap_or_default();
            EvaluationResult::pass(
                format!(
                    "DROPPED: App-ID '{}' on port {} contradicts 'application-default' (Port {}). Good job enforcing standards!",
                    packet.app, seen, standard
                ),
                Disposition::Drop,
            )
        }
        Service::Any => EvaluationResult::pass(
            format!(
                "WARNING: You allowed {} on a non-standard port. It works, but violates security best practice.",
                packet.app.id().to_uppercase()
            ),
            Disposition::Allow,
        ),
        _ => EvaluationResult::fail(REASON_CONFIG_MISMATCH),
    }
}

/// The standard ordered checks. The declared service is intentionally not
/// checked here; only the port-mismatch strategy inspects it.
fn standard_verdict(scenario: &Scenario, rule: &Rule) -> EvaluationResult {
    let packet = &scenario.packet;
    let solution = &scenario.solution;

    if rule.src_zone != packet.src_zone || rule.dst_zone != packet.dst_zone {
        return EvaluationResult::fail(REASON_ZONE_MISMATCH);
    }

    if rule.app != App::Any && rule.app != packet.app {
        return EvaluationResult::fail(REASON_APP_MISMATCH);
    }

    if rule.action != solution.action {
        return EvaluationResult::fail(REASON_ACTION_MISMATCH);
    }

    if rule.action == Action::Allow && rule.nat != solution.nat {
        return EvaluationResult::fail(REASON_NAT_MISMATCH);
    }

    if rule.action == Action::Allow {
        if let Some(required) = solution.profile {
            if !rule.profile.satisfies(required) {
                return EvaluationResult::fail(REASON_PROFILE_MISSING);
            }
        }
    }

    let disposition = match rule.action {
        Action::Deny => Disposition::Drop,
        Action::Allow => Disposition::Allow,
    };
    EvaluationResult::pass(REASON_TRAFFIC_ALLOWED, disposition)
}
