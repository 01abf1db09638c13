//! Common types and traits shared by every aggregate

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
