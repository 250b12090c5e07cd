//! Access Policy Evaluator
//!
//! This crate decides whether an actor may perform an action on a protected
//! resource, against a static role → resource permission matrix:
//!
//! - [`GlobalRole`], [`WorkspaceRole`], [`Role`] - role namespaces
//! - [`Resource`], [`Action`] - the protected nouns and verbs
//! - [`has_role_permission`], [`has_action_permission`] - string entry points
//!   for the guard layer
//! - [`PolicyService`] - decision point over [`EvaluationRequest`] models
//! - [`AccessDecision`] - allow/deny with a reason
//!
//! Evaluation is pure and fail-closed: unrecognized roles and actions deny,
//! nothing here errors or blocks. The upstream guard translates a deny into
//! HTTP 403 and audit-logs it.
//!
//! ## Usage
//!
//! ```
//! use access_policy::{has_action_permission, Resource};
//!
//! // From the guard layer, with session-claim strings:
//! assert!(has_action_permission("editor", Resource::Article, "UPDATE"));
//! assert!(!has_action_permission("guest", Resource::Article, "DELETE"));
//! ```

pub mod error;
pub mod evaluator;
pub mod matrix;
pub mod models;
pub mod resource;
pub mod role;

// Re-export main types at crate root
pub use error::ParseError;
pub use evaluator::{
    PolicyService, can_access, can_perform, has_action_permission, has_role_permission,
};
pub use models::{AccessDecision, EvaluationRequest, Subject, WorkspaceMembership};
pub use resource::{Action, Resource};
pub use role::{GlobalRole, Role, WorkspaceRole};
