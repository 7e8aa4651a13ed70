use std::sync::Arc;

use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::csrf::CsrfTokenService;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductPages;
use crate::config::catalog_config::CatalogConfig;
use crate::view::renderer::TemplateRenderer;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_pages: ProductPages,
}

impl DependencyContainer {
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        csrf: Arc<dyn CsrfTokenService>,
        renderer: Arc<dyn TemplateRenderer>,
        catalog: &CatalogConfig,
    ) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            price_policy: catalog.price_policy,
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            price_policy: catalog.price_policy,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            csrf: csrf.clone(),
            logger,
        });

        let product_pages = ProductPages::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            csrf,
            renderer,
        );

        Self {
            health_api,
            product_pages,
        }
    }
}
