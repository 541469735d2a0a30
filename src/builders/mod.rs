//! Builders to construct rotators from configuration.

pub mod rotator_builder;

pub use rotator_builder::RotatorBuilder;
