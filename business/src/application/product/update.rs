use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::{Price, PriceParsePolicy};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub price_policy: PriceParsePolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Existence is checked before the price so a missing id is always a 404
        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        let price = Price::parse(&params.price, self.price_policy).inspect_err(|_| {
            self.logger
                .warn(&format!("Rejected price input: {:?}", params.price));
        })?;

        product.apply_changes(params.name, price.value());

        self.repository
            .update(&product)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
