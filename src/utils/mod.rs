//! Shared string helpers.

pub mod normalize;
