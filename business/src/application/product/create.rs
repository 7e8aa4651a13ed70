use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::{Price, PriceParsePolicy};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub price_policy: PriceParsePolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let price = Price::parse(&params.price, self.price_policy).inspect_err(|_| {
            self.logger
                .warn(&format!("Rejected price input: {:?}", params.price));
        })?;

        let product = self
            .repository
            .insert(&NewProduct::new(params.name, price.value()))
            .await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
