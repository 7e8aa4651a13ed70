use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("Product query failed: {err}");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, ProductEntity>("SELECT id, name, price FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id, name, price",
        )
        .bind(&product.name)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET name = $2, price = $3 WHERE id = $1")
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
