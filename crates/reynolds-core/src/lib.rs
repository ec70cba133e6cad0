//! Journal bearing model on the steady Reynolds equation.
//!
//! film → assembly → pressure → integrals, driven through [`Bearing`].

pub mod assembly;
pub mod bearing;
pub mod film;
pub mod integrals;
pub mod pressure;
pub mod sweep;

pub use bearing::Bearing;
