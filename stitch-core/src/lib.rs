//! Stitch Core
//!
//! Core types for the GP record stitch client.
//!
//! This crate contains:
//! - Domain types: the stitch job entity and its status lifecycle
//! - DTOs: wire representations of the stitch service's JSON bodies

pub mod domain;
pub mod dto;
