//! Repository modules, one per table.
//!
//! Repositories are stateless structs with associated async functions that
//! take a pool reference. All SQL lives here; handlers never embed queries.

pub mod image_repo;
pub mod session_repo;
pub mod user_repo;

pub use image_repo::GeneratedImageRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
