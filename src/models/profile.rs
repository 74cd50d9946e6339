// NGFW Simulator - Security Profile Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Security profile model.

use std::fmt;

use serde::Serialize;

/// A threat-inspection profile attached to an allow rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityProfile {
    None,
    Default,
    Strict,
}

impl SecurityProfile {
    /// All profiles in selector order.
    pub const ALL: [SecurityProfile; 3] = [
        SecurityProfile::None,
        SecurityProfile::Default,
        SecurityProfile::Strict,
    ];

    /// Get the short identifier used in commands and serialized data.
    pub fn id(&self) -> &'static str {
        match self {
            SecurityProfile::None => "none",
            SecurityProfile::Default => "default",
            SecurityProfile::Strict => "strict",
        }
    }

    /// Get the display label for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            SecurityProfile::None => "None",
            SecurityProfile::Default => "Default (AV+Vuln)",
            SecurityProfile::Strict => "Strict (URL+Wildfire)",
        }
    }

    /// Check whether this profile satisfies a required one. `Strict`
    /// inspects a superset of what `Default` does, so it satisfies any
    /// requirement.
    pub fn satisfies(&self, required: SecurityProfile) -> bool {
        *self == required || *self == SecurityProfile::Strict
    }

    /// Parse a profile from its short identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(SecurityProfile::None),
            "default" => Some(SecurityProfile::Default),
            "strict" => Some(SecurityProfile::Strict),
            _ => None,
        }
    }
}

impl fmt::Display for SecurityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_satisfies_default() {
        assert!(SecurityProfile::Strict.satisfies(SecurityProfile::Default));
        assert!(SecurityProfile::Default.satisfies(SecurityProfile::Default));
        assert!(!SecurityProfile::None.satisfies(SecurityProfile::Default));
    }
}
