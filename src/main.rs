// NGFW Simulator - Main Entry Point
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! NGFW Simulator - an interactive terminal trainer for firewall policy
//! configuration.

use anyhow::{Context, Result};

mod catalog;
mod config;
mod models;
mod monitor;
mod policy;
mod session;
mod ui;

use catalog::Catalog;
use config::Settings;
use session::SessionController;
use ui::ConsoleApp;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = Settings::new();
    let catalog = Catalog::load().context("Failed to load the ticket catalog")?;
    let controller = SessionController::new(catalog);

    ConsoleApp::new(controller, settings).run()
}
