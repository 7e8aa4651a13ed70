use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::csrf::CsrfTokenService;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub csrf: Arc<dyn CsrfTokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Verify product exists before looking at the token
        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        if !self
            .csrf
            .is_token_valid(&product.delete_token_scope(), &params.token)
        {
            self.logger.warn(&format!(
                "Delete of product {} skipped: invalid anti-forgery token",
                product.id
            ));
            return Err(ProductError::InvalidCsrfToken);
        }

        self.repository
            .delete(product.id)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger.info(&format!("Product deleted: {}", product.id));
        Ok(())
    }
}
