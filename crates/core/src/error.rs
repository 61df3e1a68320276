/// Domain-level error taxonomy.
///
/// Carries no HTTP knowledge; the API layer maps each variant to a status
/// code and response body.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
