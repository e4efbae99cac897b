//! The matching pipeline: query normalization, per-record scoring, ranking.
//!
//! Stages feed forward: [`normalize`] produces query terms, [`scoring`]
//! computes a relevance score per record, [`rank`] orders and truncates.
//! [`crate::search`] is the public entry point.

pub mod normalize;
pub mod rank;
pub mod scoring;
