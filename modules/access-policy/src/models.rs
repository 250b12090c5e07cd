//! Evaluation models for the access policy evaluator.
//!
//! Subject + Action + Resource in, decision out. The upstream session
//! middleware authenticates the caller and produces the [`Subject`]; the
//! guard layer builds an [`EvaluationRequest`] per mutating request and
//! translates a deny into HTTP 403 (both outside this crate).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resource::{Action, Resource};
use crate::role::{Role, WorkspaceRole};

/// The authenticated actor making the request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Subject {
    /// Subject identifier (user ID, service ID).
    pub id: Uuid,
    /// Subject's home tenant.
    pub tenant_id: Option<Uuid>,
    /// Platform-wide role, with its namespace tagged.
    pub role: Role,
    /// Membership in the workspace the request targets, if any.
    pub workspace: Option<WorkspaceMembership>,
}

/// A subject's role inside one workspace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceMembership {
    pub workspace_id: Uuid,
    pub role: WorkspaceRole,
}

/// Access evaluation request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationRequest {
    /// The subject (who is making the request).
    pub subject: Subject,
    /// The action being performed.
    pub action: Action,
    /// The resource type being accessed.
    pub resource: Resource,
    /// Specific resource instance, when the action targets one.
    pub resource_id: Option<Uuid>,
    /// Workspace scope for the request, when the route is workspace-scoped.
    pub workspace_id: Option<Uuid>,
}

/// The outcome of an evaluation.
///
/// Constructed fresh per call and consumed immediately; never persisted.
/// The reason string is machine-readable and ends up in the 403 body and
/// the audit log (both written by callers, not here).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AccessDecision {
    /// Whether access is granted.
    pub allow: bool,
    /// Why, in either direction.
    pub reason: String,
}

impl AccessDecision {
    /// An allow decision with the given reason.
    #[must_use]
    pub fn allow(reason: impl Into<String>) -> Self {
        Self {
            allow: true,
            reason: reason.into(),
        }
    }

    /// A deny decision with the given reason.
    #[must_use]
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allow: false,
            reason: reason.into(),
        }
    }
}
