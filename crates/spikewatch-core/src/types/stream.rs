//! DataStream — an immutable, time-ordered series of samples.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Ordered sequence of real-valued samples, indexed by time step.
///
/// Once built the values cannot be changed; consumers only ever see a
/// shared `&[f64]` view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataStream(Vec<f64>);

impl DataStream {
    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the samples in time order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for DataStream {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for DataStream {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for DataStream {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}
