use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.get_all().await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProduct;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_products_in_store_order() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                Product::from_repository(1, "Intex".to_string(), 800.0),
                Product::from_repository(2, "Micromax".to_string(), 1200.0),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(products[1].name, "Micromax");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
