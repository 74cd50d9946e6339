// NGFW Simulator - Service Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Service model. The service declares which transport ports a rule
//! applies to; `application-default` ties it to the matched App-ID's
//! standard port.

use std::fmt;

use serde::Serialize;

/// The declared transport port set of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    ApplicationDefault,
    ServiceHttp,
    ServiceHttps,
    Any,
}

impl Service {
    /// All services in selector order.
    pub const ALL: [Service; 4] = [
        Service::ApplicationDefault,
        Service::ServiceHttp,
        Service::ServiceHttps,
        Service::Any,
    ];

    /// Get the short identifier used in commands and serialized data.
    pub fn id(&self) -> &'static str {
        match self {
            Service::ApplicationDefault => "application-default",
            Service::ServiceHttp => "service-http",
            Service::ServiceHttps => "service-https",
            Service::Any => "any",
        }
    }

    /// Get the display label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Service::ApplicationDefault => "application-default",
            Service::ServiceHttp => "service-http (80)",
            Service::ServiceHttps => "service-https (443)",
            Service::Any => "any",
        }
    }

    /// Parse a service from its short identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "application-default" => Some(Service::ApplicationDefault),
            "service-http" => Some(Service::ServiceHttp),
            "service-https" => Some(Service::ServiceHttps),
            "any" => Some(Service::Any),
            _ => None,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
