//! Domain models for the Hawaii Climate API

mod measurement;
mod station;
mod summary;

pub use measurement::*;
pub use station::*;
pub use summary::*;
