//! Row models and DTOs for each table.

pub mod image;
pub mod session;
pub mod user;
