// NGFW Simulator - Console Front-End
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Line-oriented front-end for the training session.
//!
//! The console renders tickets, the rule row, and the traffic log, and maps
//! operator commands onto session transitions. Pacing sleeps are cosmetic;
//! the core never depends on them.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::broadcast;
use tracing::debug;

use crate::config::Settings;
use crate::models::{Action, App, NatType, SecurityProfile, Service, Zone};
use crate::monitor::LogEntry;
use crate::session::{SessionController, SessionEvent, SessionPhase};

/// Simulated device identity shown in headers.
const DEVICE_NAME: &str = "PA-3220-HQ";
/// Public address of the simulated firewall.
const FIREWALL_IP: &str = "203.0.113.1";

/// The interactive console application.
pub struct ConsoleApp {
    controller: SessionController,
    settings: Settings,
    events: broadcast::Receiver<SessionEvent>,
}

impl ConsoleApp {
    /// Create the console over a ready session controller.
    pub fn new(controller: SessionController, settings: Settings) -> Self {
        let events = controller.subscribe();
        Self {
            controller,
            settings,
            events,
        }
    }

    /// Run the command loop until the operator quits or stdin closes.
    pub fn run(&mut self) -> Result<()> {
        println!("NGFW SIMULATOR :: MANAGEMENT CONSOLE ({})", DEVICE_NAME);
        println!();

        if !self.settings.onboarding_seen() {
            self.print_welcome();
            self.settings.set_onboarding_seen();
        }

        self.print_ticket();
        self.print_rule();

        let stdin = io::stdin();
        loop {
            print!("ngfw> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                break;
            }

            if let Err(e) = self.dispatch(line) {
                println!("error: {:#}", e);
            }
            self.drain_events();
        }

        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Result<()> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        match command {
            "help" => self.print_help(),
            "show" => {
                self.print_ticket();
                self.print_rule();
            }
            "set" => self.set_field(&rest)?,
            "commit" => self.run_commit()?,
            "next" => {
                self.controller.advance()?;
                self.print_ticket();
                self.print_rule();
            }
            "retry" => {
                self.controller.reset()?;
                self.print_rule();
            }
            "options" => self.print_options(),
            "hint" => self.print_hint(),
            "hints" => self.toggle_hints(&rest)?,
            "logs" => self.print_logs(),
            "log" => self.print_log_detail(&rest)?,
            _ => println!("unknown command {:?}; try 'help'", command),
        }
        Ok(())
    }

    // ── Rule editing ───────────────────────────────────────────────────

    fn set_field(&mut self, args: &[&str]) -> Result<()> {
        let (field, value) = match args.split_first() {
            Some((field, rest)) if !rest.is_empty() => (*field, rest.join(" ")),
            _ => {
                println!("usage: set <field> <value>   (fields: name, src, dst, app, service, action, nat, profile)");
                return Ok(());
            }
        };

        match field {
            "name" => self.controller.set_name(value)?,
            "src" => self.controller.set_src_zone(parse_zone(&value)?)?,
            "dst" => self.controller.set_dst_zone(parse_zone(&value)?)?,
            "app" => match App::parse(&value) {
                Some(app) => self.controller.set_app(app)?,
                None => return unknown_value("app", App::ALL.iter().map(|a| a.id())),
            },
            "service" => match Service::parse(&value) {
                Some(service) => self.controller.set_service(service)?,
                None => return unknown_value("service", Service::ALL.iter().map(|s| s.id())),
            },
            "action" => match Action::parse(&value) {
                Some(action) => self.controller.set_action(action)?,
                None => return unknown_value("action", ["allow", "deny"].into_iter()),
            },
            "nat" => match NatType::parse(&value) {
                Some(nat) => self.controller.set_nat(nat)?,
                None => return unknown_value("nat", NatType::ALL.iter().map(|n| n.id())),
            },
            "profile" => match SecurityProfile::parse(&value) {
                Some(profile) => self.controller.set_profile(profile)?,
                None => return unknown_value("profile", SecurityProfile::ALL.iter().map(|p| p.id())),
            },
            _ => println!("unknown field {:?}", field),
        }

        self.print_rule();
        Ok(())
    }

    fn toggle_hints(&mut self, args: &[&str]) -> Result<()> {
        match args.first().copied() {
            Some("on") => self.settings.set_show_hints(true),
            Some("off") => self.settings.set_show_hints(false),
            _ => println!("usage: hints on|off"),
        }
        Ok(())
    }

    // ── Commit flow ────────────────────────────────────────────────────

    fn run_commit(&mut self) -> Result<()> {
        self.controller.begin_commit()?;
        let tick = Duration::from_millis(self.settings.commit_tick_ms());

        loop {
            let phase = self.controller.tick_commit()?;
            match phase {
                SessionPhase::Committing { progress } => {
                    print!("\rCommitting... {:3}%", progress);
                    io::stdout().flush()?;
                    thread::sleep(tick);
                }
                _ => break,
            }
        }
        println!("\rCommitting... done.");

        self.narrate_packet(tick);
        let result = self.controller.evaluate()?;

        println!();
        if result.passed {
            println!("  ✔ TICKET RESOLVED");
        } else {
            println!("  ✘ POLICY BLOCKED");
        }
        // The freshest log record carries the verdict reason, like the
        // result panel on the monitor page.
        if let Some(entry) = self.controller.log().latest() {
            println!("    {}", entry.reason);
        }
        println!(
            "    {}",
            if result.passed {
                "Type 'next' for the next scenario."
            } else {
                "Type 'retry' to reconfigure the rule."
            }
        );
        println!();
        Ok(())
    }

    /// Cosmetic packet-path narration between commit and verdict.
    fn narrate_packet(&self, tick: Duration) {
        let scenario = self.controller.scenario();
        let packet = &scenario.packet;
        let pause = tick.max(Duration::from_millis(25)) * 4;

        println!(
            "  {} appears in {} ({})",
            packet.src_ip,
            packet.src_zone.label(),
            packet.src_zone.cidr()
        );
        thread::sleep(pause);

        println!("  -> inspecting at {} ({})", DEVICE_NAME, FIREWALL_IP);
        let rule = self.controller.rule();
        if rule.action == Action::Allow {
            match rule.nat {
                NatType::Snat => println!("  -> source translated to {}", FIREWALL_IP),
                NatType::Dnat => println!("  -> destination translated to the internal server"),
                NatType::DnatSnat => println!("  -> U-Turn: destination and source translated"),
                NatType::None => {}
            }
        }
        thread::sleep(pause);
    }

    // ── Rendering ──────────────────────────────────────────────────────

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                SessionEvent::PhaseChanged(phase) => debug!("Session phase: {:?}", phase),
                SessionEvent::TrafficLogged => {
                    if let Some(entry) = self.controller.log().latest() {
                        println!("  monitor: {}", format_log_line(entry));
                    }
                }
                SessionEvent::CourseCompleted => {
                    println!();
                    println!("  ★ PCNSE Certification Achieved! All scenarios complete.");
                    println!("    Restarting at the first scenario.");
                    println!();
                }
            }
        }
    }

    fn print_welcome(&self) {
        println!("Welcome, Network Admin.");
        println!("Incoming tickets describe live traffic that needs a policy decision.");
        println!("Configure the security rule with 'set', then 'commit' to push it.");
        println!("Type 'help' for the full command list.");
        println!();
    }

    fn print_help(&self) {
        println!("commands:");
        println!("  show                     redraw the ticket and the rule");
        println!("  set <field> <value>      edit the rule (name, src, dst, app, service, action, nat, profile)");
        println!("  options                  list the selectable values per field");
        println!("  commit                   push the rule and evaluate the traffic");
        println!("  next                     advance after a resolved ticket");
        println!("  retry                    reopen the rule after a failed commit");
        println!("  hint                     show the ticket hint");
        println!("  hints on|off             enable or disable hints");
        println!("  logs                     list traffic log records");
        println!("  log <n>                  show one record in detail");
        println!("  quit                     leave the simulator");
    }

    fn print_ticket(&self) {
        let scenario = self.controller.scenario();
        let packet = &scenario.packet;

        println!();
        println!(
            "Incident #{} - {}   (ticket {} of {})",
            scenario.incident_number(),
            scenario.title,
            self.controller.ticket_number(),
            self.controller.ticket_count()
        );
        println!("  {}", scenario.desc);
        println!(
            "  SRC {} [{} {}]  ->  DST {} [{} {}]   {}",
            packet.src_ip,
            packet.src_zone.label(),
            packet.src_zone.cidr(),
            packet.dst_ip,
            packet.dst_zone.label(),
            packet.dst_zone.cidr(),
            packet.proto
        );
    }

    fn print_rule(&self) {
        let rule = self.controller.rule();
        println!();
        match self.controller.phase() {
            SessionPhase::Idle => {}
            SessionPhase::Succeeded => println!("  [ticket resolved - 'next' to continue]"),
            SessionPhase::Failed => println!("  [commit failed - 'retry' to reconfigure]"),
            phase => println!("  [rule locked: {:?}]", phase),
        }
        println!("  NAME        SRC       DST       APP           SERVICE               ACTION  PROFILE  NAT");
        println!(
            "  {:<10}  {:<8}  {:<8}  {:<12}  {:<20}  {:<6}  {:<7}  {}",
            rule.name,
            rule.src_zone,
            rule.dst_zone,
            rule.app,
            rule.service,
            rule.action,
            rule.profile,
            rule.nat.label()
        );
        println!();
    }

    fn print_options(&self) {
        println!("zones (src, dst):");
        for zone in Zone::ALL {
            println!("  {:<20} {}  {}", zone.id(), zone.label(), zone.cidr());
        }
        println!("app:");
        for app in App::ALL {
            println!("  {:<20} {}", app.id(), app.label());
        }
        println!("service:");
        for service in Service::ALL {
            println!("  {:<20} {}", service.id(), service.label());
        }
        println!("action: allow, deny");
        println!("profile:");
        for profile in SecurityProfile::ALL {
            println!("  {:<20} {}", profile.id(), profile.label());
        }
        println!("nat:");
        for nat in NatType::ALL {
            println!("  {:<20} {}", nat.id(), nat.label());
        }
    }

    fn print_hint(&self) {
        if self.settings.show_hints() {
            println!("hint: {}", self.controller.scenario().hint);
        } else {
            println!("hints are disabled; 'hints on' to enable them");
        }
    }

    fn print_logs(&self) {
        let log = self.controller.log();
        if log.is_empty() {
            println!("no traffic logged yet");
            return;
        }
        println!("  TIME      SOURCE           DEST             APP           ACTION  BYTES");
        for entry in log.entries() {
            println!("  {}", format_log_line(entry));
        }
        println!("  ({} records; 'log <n>' for details)", log.len());
    }

    fn print_log_detail(&self, args: &[&str]) -> Result<()> {
        let index: usize = match args.first().and_then(|s| s.parse().ok()) {
            Some(index) => index,
            None => {
                println!("usage: log <n>   (0 is the most recent record)");
                return Ok(());
            }
        };
        match self.controller.log().get(index) {
            Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
            None => println!("no record {}", index),
        }
        Ok(())
    }
}

fn format_log_line(entry: &LogEntry) -> String {
    format!(
        "{}  {:<15}  {:<15}  {:<12}  {:<6}  {}",
        entry.time, entry.src, entry.dst, entry.app, entry.action, entry.bytes
    )
}

fn parse_zone(value: &str) -> Result<Zone> {
    Zone::parse(value)
        .ok_or_else(|| anyhow::anyhow!("unknown zone {:?}; options: trust, untrust, dmz, guest", value))
}

fn unknown_value<'a>(field: &str, options: impl Iterator<Item = &'a str>) -> Result<()> {
    let options: Vec<&str> = options.collect();
    println!("unknown {} value; options: {}", field, options.join(", "));
    Ok(())
}
