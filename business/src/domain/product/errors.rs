#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_csrf_token")]
    InvalidCsrfToken,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Maps a lookup failure, keeping `NotFound` as a domain error.
    pub fn from_lookup(err: crate::domain::errors::RepositoryError) -> Self {
        match err {
            crate::domain::errors::RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
