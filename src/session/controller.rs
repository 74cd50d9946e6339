// NGFW Simulator - Session Controller
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! The commit lifecycle state machine.
//!
//! Every transition happens through a method on [`SessionController`]; the
//! phase enum makes illegal transitions unrepresentable at runtime. One
//! commit produces exactly one evaluation and one traffic log record.

use anyhow::{anyhow, Result};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::catalog::{Catalog, Scenario};
use crate::models::{Action, App, NatType, Rule, SecurityProfile, Service, Zone};
use crate::monitor::{LogEntry, TrafficLog};
use crate::policy::{self, Disposition, EvaluationResult};

use super::ports::{ByteSource, Clock, RandomBytes, SystemClock};
use super::{AdvanceOutcome, SessionEvent, SessionPhase};

/// Progress added per commit tick; twenty ticks complete a commit.
pub const COMMIT_STEP: u8 = 5;

/// Orchestrates the active ticket, the rule under edit, and the log.
pub struct SessionController {
    catalog: Catalog,
    index: usize,
    rule: Rule,
    log: TrafficLog,
    phase: SessionPhase,
    clock: Box<dyn Clock>,
    bytes: Box<dyn ByteSource>,
    event_sender: broadcast::Sender<SessionEvent>,
}

impl SessionController {
    /// Create a controller over a validated catalog, starting at the first
    /// ticket with a default rule.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_ports(catalog, Box::new(SystemClock), Box::new(RandomBytes))
    }

    /// Create a controller with explicit clock and byte-count sources.
    pub fn with_ports(catalog: Catalog, clock: Box<dyn Clock>, bytes: Box<dyn ByteSource>) -> Self {
        let (event_sender, _) = broadcast::channel(32);
        Self {
            catalog,
            index: 0,
            rule: Rule::default(),
            log: TrafficLog::new(),
            phase: SessionPhase::Idle,
            clock,
            bytes,
            event_sender,
        }
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_sender.subscribe()
    }

    /// Get the active ticket.
    pub fn scenario(&self) -> &Scenario {
        // The index always points inside the catalog.
        &self.catalog.scenarios()[self.index]
    }

    /// Get the 1-based position of the active ticket.
    pub fn ticket_number(&self) -> usize {
        self.index + 1
    }

    /// Get the number of tickets in the course.
    pub fn ticket_count(&self) -> usize {
        self.catalog.len()
    }

    /// Get the rule under construction.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Get the traffic log.
    pub fn log(&self) -> &TrafficLog {
        &self.log
    }

    /// Get the current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    // ── Rule editing (Idle only) ───────────────────────────────────────

    pub fn set_name(&mut self, name: String) -> Result<()> {
        self.ensure_editable()?;
        self.rule.name = name;
        Ok(())
    }

    pub fn set_src_zone(&mut self, zone: Zone) -> Result<()> {
        self.ensure_editable()?;
        self.rule.src_zone = zone;
        Ok(())
    }

    pub fn set_dst_zone(&mut self, zone: Zone) -> Result<()> {
        self.ensure_editable()?;
        self.rule.dst_zone = zone;
        Ok(())
    }

    pub fn set_app(&mut self, app: App) -> Result<()> {
        self.ensure_editable()?;
        self.rule.app = app;
        Ok(())
    }

    pub fn set_service(&mut self, service: Service) -> Result<()> {
        self.ensure_editable()?;
        self.rule.service = service;
        Ok(())
    }

    pub fn set_action(&mut self, action: Action) -> Result<()> {
        self.ensure_editable()?;
        self.rule.action = action;
        Ok(())
    }

    pub fn set_nat(&mut self, nat: NatType) -> Result<()> {
        self.ensure_editable()?;
        self.rule.nat = nat;
        Ok(())
    }

    pub fn set_profile(&mut self, profile: SecurityProfile) -> Result<()> {
        self.ensure_editable()?;
        self.rule.profile = profile;
        Ok(())
    }

    // ── Commit lifecycle ───────────────────────────────────────────────

    /// Start committing the rule. The rule freezes until the verdict is in.
    pub fn begin_commit(&mut self) -> Result<()> {
        match self.phase {
            SessionPhase::Idle => {
                info!("Committing rule {:?} for ticket {}", self.rule.name, self.ticket_number());
                self.set_phase(SessionPhase::Committing { progress: 0 });
                Ok(())
            }
            SessionPhase::Committing { .. } | SessionPhase::Evaluating => {
                Err(anyhow!("A commit is already in progress"))
            }
            SessionPhase::Succeeded | SessionPhase::Failed => {
                Err(anyhow!("Resolve the current verdict before committing again"))
            }
        }
    }

    /// Advance commit progress by [`COMMIT_STEP`]. At 100 the session moves
    /// to `Evaluating`; this is the only road there.
    pub fn tick_commit(&mut self) -> Result<SessionPhase> {
        match self.phase {
            SessionPhase::Committing { progress } => {
                let progress = progress.saturating_add(COMMIT_STEP).min(100);
                if progress >= 100 {
                    self.set_phase(SessionPhase::Evaluating);
                } else {
                    // Intermediate progress is not broadcast; renderers poll it.
                    self.phase = SessionPhase::Committing { progress };
                }
                Ok(self.phase)
            }
            _ => Err(anyhow!("No commit in progress")),
        }
    }

    /// Produce the verdict for the frozen rule. Runs the evaluator exactly
    /// once and appends exactly one log record, then lands in `Succeeded`
    /// or `Failed`.
    pub fn evaluate(&mut self) -> Result<EvaluationResult> {
        if self.phase != SessionPhase::Evaluating {
            return Err(anyhow!("Nothing to evaluate"));
        }

        let scenario = &self.catalog.scenarios()[self.index];
        let result = policy::evaluate(scenario, &self.rule);

        let bytes = if result.disposition == Disposition::Allow {
            self.bytes.traffic_bytes()
        } else {
            0
        };
        let time = self.clock.now().format("%H:%M:%S").to_string();
        self.log
            .record(LogEntry::from_commit(time, &scenario.packet, &result, bytes));
        let _ = self.event_sender.send(SessionEvent::TrafficLogged);

        debug!(
            "Ticket {} verdict: passed={} disposition={} reason={:?}",
            self.ticket_number(),
            result.passed,
            result.disposition,
            result.reason
        );

        if result.passed {
            self.set_phase(SessionPhase::Succeeded);
        } else {
            self.set_phase(SessionPhase::Failed);
        }
        Ok(result)
    }

    /// Move past a solved ticket. Resets the per-ticket rule fields and
    /// returns whether the course wrapped around.
    pub fn advance(&mut self) -> Result<AdvanceOutcome> {
        if self.phase != SessionPhase::Succeeded {
            return Err(anyhow!("The current ticket is not solved"));
        }

        let (next, wrapped) = self.catalog.next_index(self.index);
        self.index = next;
        self.rule.reset_for_next_ticket();
        self.set_phase(SessionPhase::Idle);

        if wrapped {
            info!("Course complete; restarting at the first ticket");
            let _ = self.event_sender.send(SessionEvent::CourseCompleted);
            Ok(AdvanceOutcome::CourseComplete)
        } else {
            Ok(AdvanceOutcome::Next)
        }
    }

    /// Return to editing after a failed commit. The rule is kept as-is so
    /// the operator can see what went wrong.
    pub fn reset(&mut self) -> Result<()> {
        if self.phase != SessionPhase::Failed {
            return Err(anyhow!("Nothing to retry"));
        }
        self.set_phase(SessionPhase::Idle);
        Ok(())
    }

    // ── Internal ───────────────────────────────────────────────────────

    fn set_phase(&mut self, phase: SessionPhase) {
        self.phase = phase;
        let _ = self.event_sender.send(SessionEvent::PhaseChanged(phase));
    }

    fn ensure_editable(&self) -> Result<()> {
        match self.phase {
            SessionPhase::Idle => Ok(()),
            SessionPhase::Committing { .. } | SessionPhase::Evaluating => {
                Err(anyhow!("The rule is frozen while a commit is in progress"))
            }
            SessionPhase::Succeeded => Err(anyhow!("Ticket solved; advance to the next one first")),
            SessionPhase::Failed => Err(anyhow!("Run retry before editing the rule")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Clock pinned to a fixed local time.
    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> chrono::DateTime<chrono::Local> {
            chrono::Local.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap()
        }
    }

    /// Byte source returning a known constant.
    struct FixedBytes(u64);

    impl ByteSource for FixedBytes {
        fn traffic_bytes(&mut self) -> u64 {
            self.0
        }
    }

    fn controller() -> SessionController {
        let catalog = Catalog::load().unwrap();
        SessionController::with_ports(catalog, Box::new(FixedClock), Box::new(FixedBytes(1234)))
    }

    fn apply_solution(controller: &mut SessionController) {
        let solution = controller.scenario().solution;
        controller.set_src_zone(solution.src_zone).unwrap();
        controller.set_dst_zone(solution.dst_zone).unwrap();
        controller.set_app(solution.app).unwrap();
        controller.set_service(solution.service).unwrap();
        controller.set_action(solution.action).unwrap();
        controller.set_nat(solution.nat).unwrap();
        controller
            .set_profile(solution.profile.unwrap_or(SecurityProfile::None))
            .unwrap();
    }

    fn run_commit(controller: &mut SessionController) -> EvaluationResult {
        controller.begin_commit().unwrap();
        while controller.tick_commit().unwrap() != SessionPhase::Evaluating {}
        controller.evaluate().unwrap()
    }

    #[test]
    fn test_commit_lifecycle_success() {
        let mut c = controller();
        apply_solution(&mut c);
        let result = run_commit(&mut c);
        assert!(result.passed);
        assert_eq!(c.phase(), SessionPhase::Succeeded);
        assert_eq!(c.log().len(), 1);
        assert_eq!(c.log().latest().unwrap().time, "10:30:00");
    }

    #[test]
    fn test_one_log_record_per_commit_regardless_of_verdict() {
        let mut c = controller();

        // Failed attempt.
        c.set_dst_zone(Zone::Guest).unwrap();
        let result = run_commit(&mut c);
        assert!(!result.passed);
        assert_eq!(c.log().len(), 1);
        assert_eq!(c.log().latest().unwrap().bytes, 0);

        // Corrected attempt.
        c.reset().unwrap();
        apply_solution(&mut c);
        let result = run_commit(&mut c);
        assert!(result.passed);
        assert_eq!(c.log().len(), 2);
        assert_eq!(c.log().latest().unwrap().bytes, 1234);
    }

    #[test]
    fn test_rule_frozen_during_commit() {
        let mut c = controller();
        c.begin_commit().unwrap();
        assert!(c.set_app(App::Dns).is_err());
        assert!(c.begin_commit().is_err());
        c.tick_commit().unwrap();
        assert!(c.set_action(Action::Deny).is_err());
    }

    #[test]
    fn test_evaluate_requires_full_commit_progress() {
        let mut c = controller();
        assert!(c.evaluate().is_err());
        c.begin_commit().unwrap();
        assert!(c.evaluate().is_err());

        let mut ticks = 1;
        while c.tick_commit().unwrap() != SessionPhase::Evaluating {
            ticks += 1;
        }
        assert_eq!(ticks, (100 / COMMIT_STEP) as usize);
        assert!(c.begin_commit().is_err());
        assert!(c.evaluate().is_ok());
    }

    #[test]
    fn test_failure_preserves_rule_until_reset() {
        let mut c = controller();
        c.set_dst_zone(Zone::Dmz).unwrap();
        c.set_app(App::UnknownTcp).unwrap();
        let before = c.rule().clone();

        let result = run_commit(&mut c);
        assert!(!result.passed);
        assert_eq!(c.phase(), SessionPhase::Failed);
        assert_eq!(c.rule(), &before);

        // Editing is rejected until retry.
        assert!(c.set_app(App::Ssl).is_err());
        c.reset().unwrap();
        assert_eq!(c.rule(), &before);
        c.set_app(App::Ssl).unwrap();
    }

    #[test]
    fn test_advance_resets_documented_fields() {
        let mut c = controller();
        apply_solution(&mut c);
        run_commit(&mut c);
        assert_eq!(c.advance().unwrap(), AdvanceOutcome::Next);

        assert_eq!(c.ticket_number(), 2);
        assert_eq!(c.phase(), SessionPhase::Idle);
        let rule = c.rule();
        assert_eq!(rule.action, Action::Allow);
        assert_eq!(rule.nat, NatType::None);
        assert_eq!(rule.app, App::Any);
        assert_eq!(rule.profile, SecurityProfile::None);
        // Zones and service carry over from the solved ticket.
        assert_eq!(rule.src_zone, Zone::Trust);
        assert_eq!(rule.dst_zone, Zone::Untrust);
    }

    #[test]
    fn test_course_wraps_and_signals_completion_once() {
        let mut c = controller();
        let mut events = c.subscribe();
        let count = c.ticket_count();

        for ticket in 0..count {
            apply_solution(&mut c);
            let result = run_commit(&mut c);
            assert!(result.passed, "ticket {} failed: {}", ticket + 1, result.reason);
            let outcome = c.advance().unwrap();
            if ticket + 1 == count {
                assert_eq!(outcome, AdvanceOutcome::CourseComplete);
            } else {
                assert_eq!(outcome, AdvanceOutcome::Next);
            }
        }

        assert_eq!(c.ticket_number(), 1);
        assert_eq!(c.log().len(), count);

        let mut completions = 0;
        while let Ok(event) = events.try_recv() {
            if matches!(event, SessionEvent::CourseCompleted) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_advance_rejected_outside_success() {
        let mut c = controller();
        assert!(c.advance().is_err());
        assert!(c.reset().is_err());
    }
}
