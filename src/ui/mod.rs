// NGFW Simulator - UI Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Terminal front-end. Rendering only; every decision lives in the
//! session core.

mod console;

pub use console::ConsoleApp;
