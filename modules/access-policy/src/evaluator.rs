//! The access policy evaluator.
//!
//! ## Decision matrix (fail-closed)
//!
//! | action | rule |
//! |--------|------|
//! | READ   | always allowed; read gating, where any, happens upstream |
//! | CREATE / UPDATE / DELETE | role's matrix set must contain the resource |
//! | MANAGE | OWNER or ADMIN only, in either namespace, resource ignored |
//! | anything else | denied |
//!
//! Nothing in this module errors or panics: unknown roles and actions are
//! decisions (deny), not failures. The caller turns a deny into HTTP 403
//! and audit-logs it.

use tracing::debug;

use crate::matrix;
use crate::models::{AccessDecision, EvaluationRequest};
use crate::resource::{Action, Resource};
use crate::role::{GlobalRole, Role, WorkspaceRole};

/// Whether `role`'s permission set contains `resource`.
///
/// The bare-string entry point for the guard layer. The string is matched
/// case-insensitively against the global role table first, then the
/// workspace table; a name found in neither yields `false`.
#[must_use]
pub fn has_role_permission(role: &str, resource: Resource) -> bool {
    Role::parse_lenient(role).is_some_and(|r| matrix::permissions(r).contains(&resource))
}

/// Whether `role` may perform `action` on `resource`, both supplied as
/// strings by the guard layer.
///
/// Unknown action strings are denied outright.
#[must_use]
pub fn has_action_permission(role: &str, resource: Resource, action: &str) -> bool {
    match action.parse::<Action>() {
        Ok(Action::Read) => true,
        Ok(Action::Create | Action::Update | Action::Delete) => {
            has_role_permission(role, resource)
        }
        Ok(Action::Manage) => is_manage_role(role),
        Err(_) => false,
    }
}

/// MANAGE eligibility for a bare role string: the normalized name must be
/// OWNER or ADMIN. Both namespaces use those names, so the check is
/// namespace-blind by construction.
fn is_manage_role(role: &str) -> bool {
    matches!(role.to_ascii_uppercase().as_str(), "OWNER" | "ADMIN")
}

/// Typed variant of [`has_role_permission`].
#[must_use]
pub fn can_access(role: Role, resource: Resource) -> bool {
    matrix::permissions(role).contains(&resource)
}

/// Typed variant of [`has_action_permission`].
#[must_use]
pub fn can_perform(role: Role, resource: Resource, action: Action) -> bool {
    match action {
        Action::Read => true,
        Action::Create | Action::Update | Action::Delete => can_access(role, resource),
        Action::Manage => matches!(
            role,
            Role::Global(GlobalRole::Owner | GlobalRole::Admin)
                | Role::Workspace(WorkspaceRole::Owner | WorkspaceRole::Admin)
        ),
    }
}

/// Policy decision point over [`EvaluationRequest`] models.
///
/// Stateless; the permission tables it consults are `const`. One instance
/// serves all resource types and any number of concurrent callers.
pub struct PolicyService;

impl PolicyService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a request and produce a decision with a reason.
    ///
    /// For a workspace-scoped request where the subject holds a membership
    /// in that workspace, the membership role decides; otherwise the
    /// subject's tagged role does. Denies are logged at `debug`.
    #[must_use]
    pub fn evaluate(&self, request: &EvaluationRequest) -> AccessDecision {
        let role = effective_role(request);
        let decision = decide(role, request.resource, request.action);
        if !decision.allow {
            debug!(
                subject = %request.subject.id,
                role = %role,
                action = %request.action,
                resource = %request.resource,
                reason = %decision.reason,
                "access denied"
            );
        }
        decision
    }
}

impl Default for PolicyService {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the role that governs this request.
fn effective_role(request: &EvaluationRequest) -> Role {
    if let (Some(workspace_id), Some(membership)) =
        (request.workspace_id, request.subject.workspace.as_ref())
    {
        if membership.workspace_id == workspace_id {
            return Role::Workspace(membership.role);
        }
    }
    request.subject.role
}

fn decide(role: Role, resource: Resource, action: Action) -> AccessDecision {
    match action {
        Action::Read => AccessDecision::allow("read access is not gated by the policy matrix"),
        Action::Create | Action::Update | Action::Delete => {
            if can_access(role, resource) {
                AccessDecision::allow(format!("role {role} may {action} {resource}"))
            } else {
                AccessDecision::deny(format!(
                    "role {role} lacks {action} permission on {resource}"
                ))
            }
        }
        Action::Manage => {
            if can_perform(role, resource, Action::Manage) {
                AccessDecision::allow(format!("role {role} may manage {resource}"))
            } else {
                AccessDecision::deny(format!("manage on {resource} requires OWNER or ADMIN"))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{Subject, WorkspaceMembership};
    use tracing_test::traced_test;
    use uuid::Uuid;

    fn subject(role: Role, workspace: Option<WorkspaceMembership>) -> Subject {
        Subject {
            id: Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap(),
            tenant_id: Some(Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap()),
            role,
            workspace,
        }
    }

    fn request(role: Role, action: Action, resource: Resource) -> EvaluationRequest {
        EvaluationRequest {
            subject: subject(role, None),
            action,
            resource,
            resource_id: None,
            workspace_id: None,
        }
    }

    #[test]
    fn unknown_role_is_denied_everywhere() {
        for resource in Resource::ALL {
            assert!(!has_role_permission("nonexistent", resource));
        }
    }

    #[test]
    fn read_is_always_allowed() {
        assert!(has_action_permission("GUEST", Resource::Settings, "READ"));
        assert!(has_action_permission("nonexistent", Resource::Tenant, "read"));
        for resource in Resource::ALL {
            assert!(has_action_permission("VIEWER", resource, "READ"));
        }
    }

    #[test]
    fn manage_is_owner_or_admin_only() {
        assert!(has_action_permission("OWNER", Resource::Store, "MANAGE"));
        assert!(has_action_permission("admin", Resource::Store, "MANAGE"));
        assert!(!has_action_permission("EDITOR", Resource::Store, "MANAGE"));
        assert!(!has_action_permission("MANAGER", Resource::Store, "MANAGE"));
    }

    #[test]
    fn unknown_action_is_denied() {
        assert!(!has_action_permission("OWNER", Resource::Article, "PUBLISH"));
        assert!(!has_action_permission("OWNER", Resource::Article, ""));
    }

    #[test]
    fn mutations_consult_the_matrix() {
        assert!(has_action_permission("AUTHOR", Resource::Article, "CREATE"));
        assert!(!has_action_permission("AUTHOR", Resource::Plugin, "CREATE"));
        assert!(has_action_permission("editor", Resource::Workflow, "UPDATE"));
        assert!(!has_action_permission("USER", Resource::Article, "DELETE"));
    }

    #[test]
    fn typed_manage_covers_both_namespaces() {
        assert!(can_perform(
            Role::Workspace(WorkspaceRole::Admin),
            Resource::Article,
            Action::Manage
        ));
        assert!(!can_perform(
            Role::Workspace(WorkspaceRole::Editor),
            Resource::Article,
            Action::Manage
        ));
    }

    #[test]
    fn workspace_membership_governs_scoped_requests() {
        let workspace_id = Uuid::parse_str("33333333-3333-3333-3333-333333333333").unwrap();
        let service = PolicyService::new();

        // A global USER (empty set) with an EDITOR membership may update
        // articles inside that workspace...
        let mut request = EvaluationRequest {
            subject: subject(
                Role::Global(GlobalRole::User),
                Some(WorkspaceMembership {
                    workspace_id,
                    role: WorkspaceRole::Editor,
                }),
            ),
            action: Action::Update,
            resource: Resource::Article,
            resource_id: None,
            workspace_id: Some(workspace_id),
        };
        assert!(service.evaluate(&request).allow);

        // ...but not in a workspace they are no member of.
        request.workspace_id =
            Some(Uuid::parse_str("44444444-4444-4444-4444-444444444444").unwrap());
        assert!(!service.evaluate(&request).allow);
    }

    #[test]
    fn decision_carries_a_reason() {
        let service = PolicyService::new();
        let decision = service.evaluate(&request(
            Role::Global(GlobalRole::Guest),
            Action::Delete,
            Resource::Article,
        ));
        assert!(!decision.allow);
        assert!(decision.reason.contains("GUEST"));
        assert!(decision.reason.contains("DELETE"));
    }

    #[traced_test]
    #[test]
    fn deny_is_logged() {
        let service = PolicyService::new();
        let _ = service.evaluate(&request(
            Role::Global(GlobalRole::Writer),
            Action::Delete,
            Resource::Store,
        ));
        assert!(logs_contain("access denied"));
    }
}
