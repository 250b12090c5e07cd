//! Protected resource and action enumerations.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A protected noun the policy matrix gates mutations on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resource {
    Tenant,
    Workspace,
    User,
    Article,
    Workflow,
    Plugin,
    FeatureFlag,
    Experiment,
    Analytics,
    Store,
    Settings,
    Ad,
}

impl Resource {
    /// All resource values, in declaration order. Handy for exhaustive
    /// table tests.
    pub const ALL: [Self; 12] = [
        Self::Tenant,
        Self::Workspace,
        Self::User,
        Self::Article,
        Self::Workflow,
        Self::Plugin,
        Self::FeatureFlag,
        Self::Experiment,
        Self::Analytics,
        Self::Store,
        Self::Settings,
        Self::Ad,
    ];

    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tenant => "TENANT",
            Self::Workspace => "WORKSPACE",
            Self::User => "USER",
            Self::Article => "ARTICLE",
            Self::Workflow => "WORKFLOW",
            Self::Plugin => "PLUGIN",
            Self::FeatureFlag => "FEATURE_FLAG",
            Self::Experiment => "EXPERIMENT",
            Self::Analytics => "ANALYTICS",
            Self::Store => "STORE",
            Self::Settings => "SETTINGS",
            Self::Ad => "AD",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TENANT" => Ok(Self::Tenant),
            "WORKSPACE" => Ok(Self::Workspace),
            "USER" => Ok(Self::User),
            "ARTICLE" => Ok(Self::Article),
            "WORKFLOW" => Ok(Self::Workflow),
            "PLUGIN" => Ok(Self::Plugin),
            "FEATURE_FLAG" => Ok(Self::FeatureFlag),
            "EXPERIMENT" => Ok(Self::Experiment),
            "ANALYTICS" => Ok(Self::Analytics),
            "STORE" => Ok(Self::Store),
            "SETTINGS" => Ok(Self::Settings),
            "AD" => Ok(Self::Ad),
            _ => Err(ParseError::UnknownResource(s.to_owned())),
        }
    }
}

/// An operation on a [`Resource`].
///
/// READ is deliberately ungated by the matrix (any actor may read; read
/// gating, where it exists, happens upstream of the evaluator). MANAGE is
/// reserved for OWNER/ADMIN regardless of resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    Manage,
}

impl Action {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Manage => "MANAGE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "READ" => Ok(Self::Read),
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            "MANAGE" => Ok(Self::Manage),
            _ => Err(ParseError::UnknownAction(s.to_owned())),
        }
    }
}
