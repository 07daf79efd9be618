//! Core domain types
//!
//! This module contains the domain structures shared between the stitch
//! client and its consumers. A stitch job exists only for the duration of
//! one retrieval; nothing here is persisted client-side.

pub mod stitch;
