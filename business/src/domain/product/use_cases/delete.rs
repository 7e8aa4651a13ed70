use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: i64,
    /// Anti-forgery token submitted with the form, bound to `delete{id}`.
    pub token: String,
}

/// Fails with `ProductError::InvalidCsrfToken` when the token does not match,
/// leaving the product in place.
#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
