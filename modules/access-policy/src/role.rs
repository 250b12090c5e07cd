//! Role enumerations for the access policy evaluator.
//!
//! Two independent namespaces exist: platform-wide [`GlobalRole`] and
//! per-workspace [`WorkspaceRole`]. An actor may hold both at once (a global
//! role plus a membership role inside a specific workspace). The tagged
//! [`Role`] union makes the namespace explicit at the type level; string
//! parsing for the guard boundary lives in the `FromStr` impls.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Platform-wide actor classification, immutable for the request lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalRole {
    Owner,
    Admin,
    Manager,
    Editor,
    Author,
    Writer,
    Publisher,
    Creator,
    User,
    Guest,
}

impl GlobalRole {
    /// Numeric hierarchy rank, OWNER highest (6) down to GUEST (0).
    ///
    /// Used only for coarse "at least as privileged" comparisons elsewhere in
    /// the platform; the resource permission matrix does not consult it.
    /// Ranks are not distinct: AUTHOR, WRITER, PUBLISHER and CREATOR share a
    /// tier.
    #[must_use]
    pub const fn hierarchy_rank(self) -> u8 {
        match self {
            Self::Owner => 6,
            Self::Admin => 5,
            Self::Manager => 4,
            Self::Editor => 3,
            Self::Author | Self::Writer | Self::Publisher | Self::Creator => 2,
            Self::User => 1,
            Self::Guest => 0,
        }
    }

    /// Whether this role ranks at least as high as `other`.
    #[must_use]
    pub const fn at_least(self, other: Self) -> bool {
        self.hierarchy_rank() >= other.hierarchy_rank()
    }

    /// Canonical upper-case name, as stored in session claims.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Editor => "EDITOR",
            Self::Author => "AUTHOR",
            Self::Writer => "WRITER",
            Self::Publisher => "PUBLISHER",
            Self::Creator => "CREATOR",
            Self::User => "USER",
            Self::Guest => "GUEST",
        }
    }
}

impl fmt::Display for GlobalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlobalRole {
    type Err = ParseError;

    /// Case-insensitive match against the canonical role names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OWNER" => Ok(Self::Owner),
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            "EDITOR" => Ok(Self::Editor),
            "AUTHOR" => Ok(Self::Author),
            "WRITER" => Ok(Self::Writer),
            "PUBLISHER" => Ok(Self::Publisher),
            "CREATOR" => Ok(Self::Creator),
            "USER" => Ok(Self::User),
            "GUEST" => Ok(Self::Guest),
            _ => Err(ParseError::UnknownRole(s.to_owned())),
        }
    }
}

/// Workspace-scoped membership role, independent of [`GlobalRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceRole {
    Owner,
    Admin,
    Editor,
    Author,
    Viewer,
}

impl WorkspaceRole {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Admin => "ADMIN",
            Self::Editor => "EDITOR",
            Self::Author => "AUTHOR",
            Self::Viewer => "VIEWER",
        }
    }
}

impl fmt::Display for WorkspaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkspaceRole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OWNER" => Ok(Self::Owner),
            "ADMIN" => Ok(Self::Admin),
            "EDITOR" => Ok(Self::Editor),
            "AUTHOR" => Ok(Self::Author),
            "VIEWER" => Ok(Self::Viewer),
            _ => Err(ParseError::UnknownRole(s.to_owned())),
        }
    }
}

/// A role with its namespace made explicit.
///
/// The session layer historically passed bare strings and let the evaluator
/// search both tables; typed callers supply the namespace instead, which
/// removes the silent first-table-wins behavior for names present in both
/// (`OWNER`, `ADMIN`, `EDITOR`, `AUTHOR`). The bare-string path survives as
/// [`Role::parse_lenient`] for the guard boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "scope", content = "role", rename_all = "snake_case")]
pub enum Role {
    Global(GlobalRole),
    Workspace(WorkspaceRole),
}

impl Role {
    /// Resolve a bare role string the way the session layer does: the global
    /// table is consulted first, then the workspace table. `None` for a name
    /// found in neither (the caller treats that as the empty permission set).
    #[must_use]
    pub fn parse_lenient(s: &str) -> Option<Self> {
        s.parse::<GlobalRole>()
            .map(Self::Global)
            .or_else(|_| s.parse::<WorkspaceRole>().map(Self::Workspace))
            .ok()
    }

    /// Canonical upper-case name, namespace dropped.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global(r) => r.as_str(),
            Self::Workspace(r) => r.as_str(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
