// NGFW Simulator - Scenario Catalog
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! The ordered catalog of training tickets.
//!
//! Tickets are static data validated once at startup. A malformed ticket is
//! a configuration defect, not a runtime condition, so catalog construction
//! fails fast instead of guessing.

mod tickets;

use anyhow::{bail, Context, Result};

use crate::models::{Action, App, NatType, Packet, SecurityProfile, Service, Zone};

/// Incident number shown for the first ticket; later tickets count up.
const INCIDENT_BASE: u32 = 2040;

/// How a ticket is evaluated on commit.
///
/// Most tickets use the standard ordered checks. Deviating tickets carry an
/// explicit variant instead of ad-hoc callback logic, so the catalog stays
/// declarative data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationStrategy {
    /// Ordered zone/app/action/NAT/profile checks against the solution.
    Standard,
    /// The declared service decides the verdict: `application-default`
    /// correctly drops traffic whose App-ID contradicts its standard port,
    /// `any` lets it through with a warning, anything else is a
    /// misconfiguration.
    PortMismatchWarning,
}

/// The canonical correct rule for a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub src_zone: Zone,
    pub dst_zone: Zone,
    pub app: App,
    pub service: Service,
    pub action: Action,
    pub nat: NatType,
    /// Profile the rule must carry, if any. Only checked on allow rules.
    pub profile: Option<SecurityProfile>,
}

/// One training ticket.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Stable 1-based position in the course.
    pub id: u32,
    pub title: &'static str,
    pub desc: &'static str,
    pub packet: Packet,
    pub solution: Solution,
    pub strategy: EvaluationStrategy,
    pub hint: &'static str,
}

impl Scenario {
    /// Get the incident number shown in the ticket panel.
    pub fn incident_number(&self) -> u32 {
        INCIDENT_BASE + self.id - 1
    }
}

/// The validated, ordered ticket sequence.
#[derive(Debug, Clone)]
pub struct Catalog {
    tickets: &'static [Scenario],
}

impl Catalog {
    /// Load and validate the built-in tickets.
    pub fn load() -> Result<Self> {
        validate(tickets::TICKETS)?;
        Ok(Self {
            tickets: tickets::TICKETS,
        })
    }

    /// Get all tickets in course order.
    pub fn scenarios(&self) -> &[Scenario] {
        self.tickets
    }

    /// Get the number of tickets.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Get the index following `current`, wrapping to the first ticket.
    /// The returned flag is true exactly when the course wrapped.
    pub fn next_index(&self, current: usize) -> (usize, bool) {
        let next = (current + 1) % self.tickets.len();
        (next, next == 0)
    }
}

/// Check the ticket table for authoring defects.
fn validate(tickets: &[Scenario]) -> Result<()> {
    if tickets.is_empty() {
        bail!("The ticket catalog is empty");
    }

    for (index, ticket) in tickets.iter().enumerate() {
        check_ticket(index, ticket)
            .with_context(|| format!("Invalid ticket #{} ({:?})", index + 1, ticket.title))?;
    }

    Ok(())
}

fn check_ticket(index: usize, ticket: &Scenario) -> Result<()> {
    if ticket.id as usize != index + 1 {
        bail!("id {} does not match catalog position {}", ticket.id, index + 1);
    }
    if ticket.title.is_empty() || ticket.desc.is_empty() || ticket.hint.is_empty() {
        bail!("title, description, and hint must not be empty");
    }

    let solution = &ticket.solution;
    let packet = &ticket.packet;

    // The solution must survive its own zone check.
    if solution.src_zone != packet.src_zone || solution.dst_zone != packet.dst_zone {
        bail!("solution zones do not match the packet zones");
    }

    // NAT and profile checks are skipped for deny rules, so a deny solution
    // declaring them could never be exercised.
    if solution.action == Action::Deny {
        if solution.nat != NatType::None {
            bail!("a deny solution must not declare a NAT type");
        }
        if solution.profile.is_some() {
            bail!("a deny solution must not require a security profile");
        }
    }

    if ticket.strategy == EvaluationStrategy::PortMismatchWarning {
        if solution.service != Service::ApplicationDefault {
            bail!("a port-mismatch ticket must expect the application-default service");
        }
        if packet.app.standard_port().is_none() {
            bail!("a port-mismatch ticket needs an App-ID with a standard port");
        }
        if packet.port().is_none() {
            bail!("a port-mismatch ticket needs a port in the protocol label");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.scenarios()[0].incident_number(), 2040);
    }

    #[test]
    fn test_next_index_wraps_once_per_pass() {
        let catalog = Catalog::load().unwrap();
        let mut index = 0;
        let mut wraps = 0;
        for _ in 0..catalog.len() {
            let (next, wrapped) = catalog.next_index(index);
            index = next;
            if wrapped {
                wraps += 1;
            }
        }
        assert_eq!(index, 0);
        assert_eq!(wraps, 1);
    }

    #[test]
    fn test_rejects_mismatched_solution_zones() {
        let mut ticket = *tickets::TICKETS.first().unwrap();
        ticket.solution.src_zone = Zone::Guest;
        let err = validate(&[ticket]).unwrap_err();
        assert!(format!("{:#}", err).contains("zones"));
    }

    #[test]
    fn test_rejects_deny_solution_with_nat() {
        let mut ticket = *tickets::TICKETS.first().unwrap();
        ticket.solution.action = Action::Deny;
        ticket.solution.nat = NatType::Snat;
        ticket.solution.profile = None;
        let err = validate(&[ticket]).unwrap_err();
        assert!(format!("{:#}", err).contains("NAT"));
    }

    #[test]
    fn test_rejects_port_mismatch_ticket_without_default_service() {
        let mut ticket = *tickets::TICKETS.first().unwrap();
        ticket.strategy = EvaluationStrategy::PortMismatchWarning;
        ticket.solution.service = Service::Any;
        let err = validate(&[ticket]).unwrap_err();
        assert!(format!("{:#}", err).contains("application-default"));
    }

    #[test]
    fn test_rejects_out_of_order_ids() {
        let ticket = *tickets::TICKETS.last().unwrap();
        let err = validate(&[ticket]).unwrap_err();
        assert!(format!("{:#}", err).contains("position"));
    }
}
