use serde::Serialize;

/// Catalog entry as held by the store. `id` is assigned on insert and never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// A product that has not been persisted yet, so it has no identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Attaches the identity handed out by the store.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

impl Product {
    /// Constructor for data already persisted in the repository.
    pub fn from_repository(id: i64, name: String, price: f64) -> Self {
        Self { id, name, price }
    }

    /// Overwrites the mutable fields; the identity is kept.
    pub fn apply_changes(&mut self, name: String, price: f64) {
        self.name = name;
        self.price = price;
    }

    /// Scope an anti-forgery token must be bound to for deleting this product.
    pub fn delete_token_scope(&self) -> String {
        delete_token_scope(self.id)
    }
}

pub fn delete_token_scope(id: i64) -> String {
    format!("delete{}", id)
}
