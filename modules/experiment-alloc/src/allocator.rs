//! Deterministic variant assignment.
//!
//! Stateless hash bucketing: the identity key is digested with SHA-256,
//! mapped onto the unit interval, and walked against the experiment's
//! cumulative weight distribution. No assignment is persisted, so recomputing
//! for the same identity and an unchanged allocation always lands in the same
//! bucket; editing weights or variant order may reassign identities, which is
//! accepted.
//!
//! ## Degenerate configurations (all tolerated, never errors)
//!
//! | configuration | outcome |
//! |---------------|---------|
//! | empty allocation | literal `"control"` |
//! | weights sum < 1 | remainder falls back to the first entry |
//! | weights sum > 1 | tail variants become unreachable |
//! | non-finite weight | contributes `0.0` to the cumulative sum |

use sha2::{Digest, Sha256};
use tracing::trace;

use crate::models::Experiment;

/// Variant returned for an experiment with no allocation entries.
pub const FALLBACK_VARIANT: &str = "control";

/// Identity used when neither a user id nor a session id is available.
///
/// All such callers collapse into one bucket per experiment. Known and
/// accepted: anonymous traffic is not individually bucketed.
pub const ANONYMOUS_IDENTITY: &str = "anon";

/// Map a key onto the unit interval via SHA-256.
///
/// The first four digest bytes, read big-endian (equivalently: the first
/// eight hex characters parsed as a u32), divided by `u32::MAX`.
#[must_use]
pub fn hash_unit(key: &str) -> f64 {
    let digest = Sha256::digest(key.as_bytes());
    let bucket = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    f64::from(bucket) / f64::from(u32::MAX)
}

/// Assign an identity to one of the experiment's variants.
///
/// The identity key is `"{experiment.id}:{user_id ?? session_id ?? "anon"}"`.
/// Entries are walked in stored order against a running cumulative sum; the
/// first variant whose cumulative sum reaches the hashed unit value wins.
/// A walk that exhausts the entries (weights summing below the hashed value)
/// falls back to the first entry rather than erroring.
#[must_use]
pub fn assign_variant(
    experiment: &Experiment,
    user_id: Option<&str>,
    session_id: Option<&str>,
) -> String {
    let entries = experiment.traffic_allocation.entries();
    let Some((first, _)) = entries.first() else {
        return FALLBACK_VARIANT.to_owned();
    };

    let identity = user_id.or(session_id).unwrap_or(ANONYMOUS_IDENTITY);
    let key = format!("{}:{identity}", experiment.id);
    let unit = hash_unit(&key);

    let mut cumulative = 0.0_f64;
    for (variant, weight) in entries {
        if weight.is_finite() {
            cumulative += weight;
        }
        if cumulative >= unit {
            trace!(experiment = %experiment.id, %variant, unit, "variant assigned");
            return variant.clone();
        }
    }

    // Weights sum below the hashed value: tolerant fallback, not an error.
    trace!(experiment = %experiment.id, variant = %first, unit, "allocation exhausted, fell back to first variant");
    first.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrafficAllocation;

    fn experiment(id: &str, allocation: TrafficAllocation) -> Experiment {
        Experiment {
            id: id.to_owned(),
            traffic_allocation: allocation,
        }
    }

    #[test]
    fn hash_unit_stays_in_the_unit_interval() {
        for key in ["1:42", "1:anon", "exp:session-abc", ""] {
            let unit = hash_unit(key);
            assert!((0.0..=1.0).contains(&unit), "{key}: {unit}");
        }
    }

    #[test]
    fn assignment_is_deterministic_for_a_user() {
        let exp = experiment(
            "1",
            TrafficAllocation::new().with("control", 0.5).with("v1", 0.5),
        );
        let first = assign_variant(&exp, Some("42"), None);
        let second = assign_variant(&exp, Some("42"), None);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_allocation_yields_control() {
        let exp = experiment("1", TrafficAllocation::new());
        assert_eq!(assign_variant(&exp, Some("42"), None), "control");
        assert_eq!(assign_variant(&exp, None, None), "control");
    }

    #[test]
    fn undersubscribed_allocation_falls_back_to_first_entry() {
        let exp = experiment("under", TrafficAllocation::new().with("only", 0.1));
        // Whatever the hash lands on, the sole entry is the answer.
        for id in ["1", "2", "3", "4", "5", "6", "7", "8"] {
            assert_eq!(assign_variant(&exp, Some(id), None), "only");
        }
    }

    #[test]
    fn oversubscribed_first_entry_absorbs_everything() {
        let exp = experiment(
            "over",
            TrafficAllocation::new().with("a", 2.0).with("b", 0.5),
        );
        for id in ["x", "y", "z"] {
            assert_eq!(assign_variant(&exp, Some(id), None), "a");
        }
    }

    #[test]
    fn non_finite_weights_contribute_nothing() {
        let exp = experiment(
            "nan",
            TrafficAllocation::new()
                .with("bad", f64::NAN)
                .with("good", 1.0),
        );
        // "bad" only wins when the hash lands exactly on 0, which no id here does.
        for id in ["a", "b", "c", "d"] {
            assert_eq!(assign_variant(&exp, Some(id), None), "good");
        }
    }

    #[test]
    fn session_id_is_the_identity_when_user_id_is_absent() {
        let exp = experiment(
            "s",
            TrafficAllocation::new().with("control", 0.5).with("v1", 0.5),
        );
        let by_session = assign_variant(&exp, None, Some("sess-1"));
        let by_user = assign_variant(&exp, Some("sess-1"), None);
        // Same identity string, same bucket, whichever field carried it.
        assert_eq!(by_session, by_user);
    }

    #[test]
    fn anonymous_callers_share_one_bucket() {
        let exp = experiment(
            "anon-exp",
            TrafficAllocation::new().with("control", 0.5).with("v1", 0.5),
        );
        let first = assign_variant(&exp, None, None);
        let second = assign_variant(&exp, None, None);
        assert_eq!(first, second);
    }
}
