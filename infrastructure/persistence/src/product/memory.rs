use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

struct Store {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// Process-local product store used when no database is configured.
///
/// Ids start at 1 and are never reused, so iteration order is insertion order.
pub struct ProductRepositoryInMemory {
    store: RwLock<Store>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let store = self.store.read().await;
        store.rows.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let product = product.clone().into_product(id);
        store.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        match store.rows.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
