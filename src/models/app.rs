// NGFW Simulator - Application Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! App-ID model. Applications are matched by signature identity,
//! independent of the port the traffic arrives on.

use std::fmt;

use serde::Serialize;

/// A recognized application signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum App {
    Any,
    WebBrowsing,
    Ssl,
    Ssh,
    Dns,
    UnknownTcp,
}

impl App {
    /// All applications in selector order.
    pub const ALL: [App; 6] = [
        App::Any,
        App::WebBrowsing,
        App::Ssl,
        App::Ssh,
        App::Dns,
        App::UnknownTcp,
    ];

    /// Get the App-ID string.
    pub fn id(&self) -> &'static str {
        match self {
            App::Any => "any",
            App::WebBrowsing => "web-browsing",
            App::Ssl => "ssl",
            App::Ssh => "ssh",
            App::Dns => "dns",
            App::UnknownTcp => "unknown-tcp",
        }
    }

    /// Get the display label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            App::Any => "any",
            App::WebBrowsing => "web-browsing (HTTP)",
            App::Ssl => "ssl (HTTPS)",
            App::Ssh => "ssh",
            App::Dns => "dns",
            App::UnknownTcp => "unknown-tcp",
        }
    }

    /// Get the standard port the application-default service resolves to.
    pub fn standard_port(&self) -> Option<u16> {
        match self {
            App::WebBrowsing => Some(80),
            App::Ssl => Some(443),
            App::Ssh => Some(22),
            App::Dns => Some(53),
            App::Any | App::UnknownTcp => None,
        }
    }

    /// Parse an application from its App-ID string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "any" => Some(App::Any),
            "web-browsing" => Some(App::WebBrowsing),
            "ssl" => Some(App::Ssl),
            "ssh" => Some(App::Ssh),
            "dns" => Some(App::Dns),
            "unknown-tcp" => Some(App::UnknownTcp),
            _ => None,
        }
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for app in App::ALL {
            assert_eq!(App::parse(app.id()), Some(app));
        }
        assert_eq!(App::parse("ftp"), None);
    }

    #[test]
    fn test_standard_ports() {
        assert_eq!(App::Ssh.standard_port(), Some(22));
        assert_eq!(App::Any.standard_port(), None);
    }
}
