use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

/// Each write method is a commit boundary of its own.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in the store's natural order (ascending id).
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
