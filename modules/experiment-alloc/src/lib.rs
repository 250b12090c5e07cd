//! Experiment Variant Allocator
//!
//! Deterministic, stateless bucketing of identities into experiment variants:
//!
//! - [`Experiment`], [`TrafficAllocation`] - configuration models
//! - [`assign_variant`] - identity → variant, honoring configured weights
//! - [`hash_unit`] - the SHA-256 → unit-interval step, exposed for tests
//!
//! No assignment state is persisted and no randomness is drawn at call time:
//! the same `(experiment, identity)` pair yields the same variant for as long
//! as the allocation map is unchanged. Recording an exposure event is the
//! caller's write path, not this crate's.
//!
//! ## Usage
//!
//! ```
//! use experiment_alloc::{Experiment, TrafficAllocation, assign_variant};
//!
//! let experiment = Experiment {
//!     id: "onboarding-cta".to_owned(),
//!     traffic_allocation: TrafficAllocation::new()
//!         .with("control", 0.5)
//!         .with("v1", 0.5),
//! };
//!
//! let variant = assign_variant(&experiment, Some("user-42"), None);
//! assert_eq!(variant, assign_variant(&experiment, Some("user-42"), None));
//! ```

pub mod allocator;
pub mod models;

// Re-export main types at crate root
pub use allocator::{ANONYMOUS_IDENTITY, FALLBACK_VARIANT, assign_variant, hash_unit};
pub use models::{Experiment, TrafficAllocation};
