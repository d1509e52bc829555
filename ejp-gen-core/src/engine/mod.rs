//! Top-level module for the prediction generation system.
//!
//! This crate provides a seedable two-pool prediction generator, including:
//! - Seedable pseudo-random sources (`Mulberry32`, `Lcg32`, `SystemRandom`)
//! - Weighted sampling without replacement and display shuffling
//! - Four weight-shaping algorithms (`Algorithm`)
//! - Cross-algorithm vote aggregation (consensus)
//! - A high-level generation interface (`Generator`)

/// High-level interface for generating prediction sets.
///
/// Derives one random source per request (from seed text or ambient
/// randomness) and runs the selected method against it.
pub mod generator;

/// Seedable pseudo-random sources driving the sampling pipeline.
///
/// Exposes the `RandomSource` trait, the two deterministic generators,
/// the ambient platform-backed source and the text seed fold.
pub mod rng;

/// Weighted sampling without replacement and Fisher-Yates shuffling.
///
/// This module is not exposed publicly: every seeded trajectory depends
/// on its exact draw consumption.
mod sampler;

/// Insertion-ordered vote counting.
///
/// Shared by the ensemble algorithm and the consensus aggregation.
/// This module is not exposed publicly.
mod tally;

/// The four weight-shaping algorithms and their shared set routine.
pub mod variants;

/// Cross-algorithm consensus aggregation.
///
/// Runs every algorithm several times on one stream and keeps the
/// most-voted numbers. This module is not exposed publicly.
mod consensus;

/// Prediction request parameters.
///
/// Stores the selected method, the number of sets to emit and the
/// optional seed text. Used by `Generator`.
pub mod prediction_input;

/// Result set type and pool dimensions.
pub mod result_set;
