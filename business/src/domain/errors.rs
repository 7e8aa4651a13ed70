/// Errors raised by persistence adapters.
/// Variants display as code-style identifiers so the presentation layer can translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
