//! Experiment configuration models.
//!
//! [`TrafficAllocation`] is order-preserving: the allocator walks variants in
//! the order the configuration API stored them, so the representation is an
//! ordered list behind a map-shaped serde surface.

use schemars::JsonSchema;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Variant key → fractional traffic weight, in insertion order.
///
/// Weights are not normalized and need not sum to 1; the allocator's bucket
/// walk and fallback define what happens when they don't. Non-numeric weight
/// values in a stored configuration deserialize as `0.0` rather than failing
/// the whole experiment record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficAllocation {
    entries: Vec<(String, f64)>,
}

impl TrafficAllocation {
    /// An empty allocation. The allocator answers `"control"` for it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a variant, keeping insertion order.
    #[must_use]
    pub fn with(mut self, variant: impl Into<String>, weight: f64) -> Self {
        self.entries.push((variant.into(), weight));
        self
    }

    /// The variants in stored order.
    #[must_use]
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, f64)> for TrafficAllocation {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for TrafficAllocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (variant, weight) in &self.entries {
            map.serialize_entry(variant, weight)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TrafficAllocation {
    /// Deserialize from a JSON object, preserving document order.
    ///
    /// Weight values that are not numbers (strings, nulls, nested objects in
    /// a corrupted record) are coerced to `0.0`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AllocationVisitor;

        impl<'de> Visitor<'de> for AllocationVisitor {
            type Value = TrafficAllocation;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of variant keys to fractional weights")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((variant, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    let weight = value.as_f64().unwrap_or(0.0);
                    entries.push((variant, weight));
                }
                Ok(TrafficAllocation { entries })
            }
        }

        deserializer.deserialize_map(AllocationVisitor)
    }
}

/// An experiment as persisted by the configuration API.
///
/// Read-only from the allocator's perspective; creation and weight updates
/// go through a separate write path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    /// Stable experiment identifier, part of every identity hash key.
    pub id: String,
    /// Variant weights in stored order.
    #[schemars(with = "std::collections::BTreeMap<String, f64>")]
    pub traffic_allocation: TrafficAllocation,
}
