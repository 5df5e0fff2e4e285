//! Primary weighted model — scores the feature vector against the evolving
//! weight table.

pub mod scorer;
pub mod weights;

pub use scorer::{contribution_class, score, ModelScore};
pub use weights::{WeightVector, WEIGHT_MAX, WEIGHT_MIN};
