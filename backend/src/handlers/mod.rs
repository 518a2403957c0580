//! HTTP handlers for the Hawaii Climate API

mod climate;
mod health;
mod summary;

pub use climate::*;
pub use health::*;
pub use summary::*;
