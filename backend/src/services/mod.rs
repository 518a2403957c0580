//! Query services for the Hawaii Climate API

pub mod aggregation;
pub mod climate;

pub use aggregation::AggregationService;
pub use climate::ClimateService;
