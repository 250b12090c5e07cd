//! The static permission matrix.
//!
//! Two tables — one per role namespace — mapping each role to the set of
//! resources it may mutate. Both are `const` data selected by exhaustive
//! `match`, so they exist before first use, are never mutated, and every
//! role value has an entry (empty for GUEST and workspace VIEWER).
//!
//! The sets narrow monotonically down the hierarchy:
//! OWNER ⊇ ADMIN ⊇ MANAGER ⊇ EDITOR ⊇ AUTHOR ⊇ USER.
//!
//! The matrix gates CREATE/UPDATE/DELETE only. READ bypasses it entirely and
//! MANAGE is an OWNER/ADMIN check independent of resource; see
//! [`crate::evaluator`].

use crate::resource::Resource;
use crate::role::{GlobalRole, Role, WorkspaceRole};

const ALL_RESOURCES: &[Resource] = &Resource::ALL;

/// Everything but TENANT, which only the tenant owner may touch.
const ADMIN_RESOURCES: &[Resource] = &[
    Resource::Workspace,
    Resource::User,
    Resource::Article,
    Resource::Workflow,
    Resource::Plugin,
    Resource::FeatureFlag,
    Resource::Experiment,
    Resource::Analytics,
    Resource::Store,
    Resource::Settings,
    Resource::Ad,
];

const MANAGER_RESOURCES: &[Resource] = &[
    Resource::Workspace,
    Resource::User,
    Resource::Article,
    Resource::Workflow,
    Resource::Analytics,
    Resource::Store,
    Resource::Ad,
];

const EDITOR_RESOURCES: &[Resource] = &[Resource::Article, Resource::Workflow, Resource::Analytics];

/// The content tier: AUTHOR, WRITER, CREATOR.
const CONTENT_RESOURCES: &[Resource] = &[Resource::Article];

const PUBLISHER_RESOURCES: &[Resource] = &[Resource::Article, Resource::Workflow];

const NO_RESOURCES: &[Resource] = &[];

/// Workspace OWNER: full control of workspace-scoped resources.
const WS_OWNER_RESOURCES: &[Resource] = &[
    Resource::Workspace,
    Resource::User,
    Resource::Article,
    Resource::Workflow,
    Resource::Analytics,
    Resource::Settings,
];

const WS_ADMIN_RESOURCES: &[Resource] = &[
    Resource::Workspace,
    Resource::User,
    Resource::Article,
    Resource::Workflow,
    Resource::Analytics,
];

const WS_EDITOR_RESOURCES: &[Resource] = &[Resource::Article, Resource::Workflow];

/// Mutable resource set for a global role.
#[must_use]
pub const fn global_permissions(role: GlobalRole) -> &'static [Resource] {
    match role {
        GlobalRole::Owner => ALL_RESOURCES,
        GlobalRole::Admin => ADMIN_RESOURCES,
        GlobalRole::Manager => MANAGER_RESOURCES,
        GlobalRole::Editor => EDITOR_RESOURCES,
        GlobalRole::Publisher => PUBLISHER_RESOURCES,
        GlobalRole::Author | GlobalRole::Writer | GlobalRole::Creator => CONTENT_RESOURCES,
        GlobalRole::User | GlobalRole::Guest => NO_RESOURCES,
    }
}

/// Mutable resource set for a workspace membership role.
#[must_use]
pub const fn workspace_permissions(role: WorkspaceRole) -> &'static [Resource] {
    match role {
        WorkspaceRole::Owner => WS_OWNER_RESOURCES,
        WorkspaceRole::Admin => WS_ADMIN_RESOURCES,
        WorkspaceRole::Editor => WS_EDITOR_RESOURCES,
        WorkspaceRole::Author => CONTENT_RESOURCES,
        WorkspaceRole::Viewer => NO_RESOURCES,
    }
}

/// Permission set for a tagged role.
#[must_use]
pub const fn permissions(role: Role) -> &'static [Resource] {
    match role {
        Role::Global(r) => global_permissions(r),
        Role::Workspace(r) => workspace_permissions(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_all(superset: &[Resource], subset: &[Resource]) -> bool {
        subset.iter().all(|r| superset.contains(r))
    }

    #[test]
    fn global_hierarchy_narrows_monotonically() {
        assert!(contains_all(ALL_RESOURCES, ADMIN_RESOURCES));
        assert!(contains_all(ADMIN_RESOURCES, MANAGER_RESOURCES));
        assert!(contains_all(MANAGER_RESOURCES, EDITOR_RESOURCES));
        assert!(contains_all(EDITOR_RESOURCES, CONTENT_RESOURCES));
        assert!(contains_all(CONTENT_RESOURCES, NO_RESOURCES));
    }

    #[test]
    fn workspace_hierarchy_narrows_monotonically() {
        assert!(contains_all(WS_OWNER_RESOURCES, WS_ADMIN_RESOURCES));
        assert!(contains_all(WS_ADMIN_RESOURCES, WS_EDITOR_RESOURCES));
        assert!(contains_all(WS_EDITOR_RESOURCES, CONTENT_RESOURCES));
    }

    #[test]
    fn only_the_owner_touches_the_tenant() {
        assert!(global_permissions(GlobalRole::Owner).contains(&Resource::Tenant));
        assert!(!global_permissions(GlobalRole::Admin).contains(&Resource::Tenant));
        assert!(!workspace_permissions(WorkspaceRole::Owner).contains(&Resource::Tenant));
    }

    #[test]
    fn bottom_tiers_have_empty_sets() {
        assert!(global_permissions(GlobalRole::Guest).is_empty());
        assert!(global_permissions(GlobalRole::User).is_empty());
        assert!(workspace_permissions(WorkspaceRole::Viewer).is_empty());
    }

    #[test]
    fn editor_differs_between_namespaces() {
        // The same bare name resolves to different sets per namespace, which
        // is why the tagged Role exists.
        assert!(global_permissions(GlobalRole::Editor).contains(&Resource::Analytics));
        assert!(!workspace_permissions(WorkspaceRole::Editor).contains(&Resource::Analytics));
    }
}
