//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the corresponding repository in `galleria_db` and map
//! errors via `crate::error::AppError`.

pub mod auth;
pub mod images;
