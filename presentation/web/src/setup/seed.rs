use business::domain::errors::RepositoryError;
use business::domain::product::model::NewProduct;
use business::domain::product::repository::ProductRepository;

/// Demo catalog shown before any product has been added.
pub const DEMO_PRODUCTS: [(&str, f64); 2] = [("Intex", 800.0), ("Micromax", 1200.0)];

/// Inserts the demo catalog when the store is empty. Returns how many rows were added.
pub async fn seed_demo_products(repository: &dyn ProductRepository) -> Result<usize, RepositoryError> {
    if !repository.get_all().await?.is_empty() {
        tracing::info!("Product store is not empty; skipping demo catalog");
        return Ok(0);
    }

    for (name, price) in DEMO_PRODUCTS {
        repository.insert(&NewProduct::new(name, price)).await?;
    }

    tracing::info!("Seeded {} demo products", DEMO_PRODUCTS.len());
    Ok(DEMO_PRODUCTS.len())
}
