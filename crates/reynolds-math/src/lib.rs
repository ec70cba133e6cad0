//! Sparse linear algebra for the Reynolds bearing engine.

pub mod banded;
pub mod ordering;
pub mod sparse;
