//! Flagged points and the ordered set that holds them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single flagged point: its time step and its observed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Index into the stream the anomaly was derived from.
    pub index: usize,
    /// The value observed at `index`.
    pub value: f64,
}

impl Anomaly {
    pub fn new(index: usize, value: f64) -> Self {
        Self { index, value }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:.4})", self.index, self.value)
    }
}

/// Anomalies in strictly increasing index order, at most one per index.
///
/// Only [`AnomalySetBuilder`] can produce a non-empty set, and it refuses
/// out-of-order or repeated indices.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct AnomalySet(Vec<Anomaly>);

impl AnomalySet {
    /// The set with no anomalies.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Anomaly] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Anomaly> {
        self.0.iter()
    }

    /// Indices of the flagged points, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|a| a.index)
    }

    /// Whether `index` was flagged. Binary search over the ordered set.
    pub fn contains_index(&self, index: usize) -> bool {
        self.0.binary_search_by_key(&index, |a| a.index).is_ok()
    }
}

impl<'a> IntoIterator for &'a AnomalySet {
    type Item = &'a Anomaly;
    type IntoIter = std::slice::Iter<'a, Anomaly>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Accumulates anomalies from a forward scan.
#[derive(Debug, Default)]
pub struct AnomalySetBuilder {
    items: Vec<Anomaly>,
}

impl AnomalySetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an anomaly. Returns `false` and drops it if its index is not
    /// strictly greater than the last accepted index.
    pub fn push(&mut self, anomaly: Anomaly) -> bool {
        if let Some(last) = self.items.last() {
            if anomaly.index <= last.index {
                return false;
            }
        }
        self.items.push(anomaly);
        true
    }

    pub fn build(self) -> AnomalySet {
        AnomalySet(self.items)
    }
}
