use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct UpdateProductParams {
    pub id: i64,
    pub name: String,
    pub price: String,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
