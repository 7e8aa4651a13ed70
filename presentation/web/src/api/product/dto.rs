use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::csrf::CsrfTokenService;
use business::domain::product::model::Product;

/// Create/edit form as posted by the browser. Missing fields arrive as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Object)]
pub struct ProductForm {
    /// Product name (not validated)
    #[oai(default)]
    #[serde(default)]
    pub name: String,
    /// Price as typed; converted according to the configured price policy
    #[oai(default)]
    #[serde(default)]
    pub price: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Delete confirmation form carrying the anti-forgery token.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteProductForm {
    #[serde(rename = "_token", default)]
    pub token: String,
}

/// Product as handed to the templates, with the token its delete form needs.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub delete_token: String,
}

impl ProductView {
    pub fn new(product: Product, csrf: &dyn CsrfTokenService) -> Self {
        let delete_token = csrf.generate_token(&product.delete_token_scope());
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            delete_token,
        }
    }
}
