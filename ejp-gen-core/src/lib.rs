//! Weighted-sampling prediction library for EuroJackpot-style draws.
//!
//! This crate provides a modular prediction engine including:
//! - Text seed derivation into deterministic 32-bit generator state
//! - Seedable pseudo-random generators with exact wrapping arithmetic
//! - Weighted sampling without replacement over the two number pools
//! - Four weight-shaping algorithms plus a cross-algorithm consensus
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core generators, sampling and orchestration logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal sampling mechanics private.
pub mod engine;
