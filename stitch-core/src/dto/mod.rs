//! Data Transfer Objects for the stitch service API
//!
//! Wire-shaped representations of the service's JSON bodies. Field names
//! follow the service's camelCase contract; the domain layer converts them
//! into validated entities.

pub mod stitch;
