//! Domain-level types and helpers shared by the persistence and API layers.
//!
//! This crate has no IO and no internal dependencies so it can be used from
//! repositories, handlers, and any future CLI tooling alike.

pub mod dates;
pub mod error;
pub mod pagination;
pub mod types;
