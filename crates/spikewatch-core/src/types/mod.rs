//! Series data model: the generated stream and the flagged points derived from it.

pub mod anomaly;
pub mod stream;

pub use anomaly::{Anomaly, AnomalySet, AnomalySetBuilder};
pub use stream::DataStream;
