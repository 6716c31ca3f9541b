//! quizgrade-core — Quiz scoring, review assembly, and tier classification.
//!
//! Everything in this crate is a pure function of in-memory values: the
//! caller hands over a completed quiz session and gets back a per-question
//! review, an aggregated score, and the feedback tier for that score.

pub mod error;
pub mod evaluator;
pub mod model;
pub mod profile;
pub mod results;
pub mod session;
pub mod submission;
pub mod tier;
pub mod validate;
