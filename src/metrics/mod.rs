//! Text metrics: readability estimation and topic extraction.

pub mod readability;
pub mod topics;
