use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Raw form input; `price` is converted according to the configured policy.
pub struct CreateProductParams {
    pub name: String,
    pub price: String,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
