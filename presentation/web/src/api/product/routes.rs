use std::sync::Arc;

use poem::http::StatusCode;
use poem::web::Form as BrowserForm;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::Path,
    payload::{Form, Html},
};
use serde_json::{Value, json};

use business::domain::csrf::CsrfTokenService;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{IntoErrorPage, fallback_page, render_error_page};
use crate::api::product::dto::{DeleteProductForm, ProductForm, ProductView};
use crate::api::tags::ApiTags;
use crate::view::renderer::TemplateRenderer;

/// Every successful form submission lands back on the list.
const LIST_PATH: &str = "/products";

pub struct ProductPages {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    csrf: Arc<dyn CsrfTokenService>,
    renderer: Arc<dyn TemplateRenderer>,
}

impl ProductPages {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        csrf: Arc<dyn CsrfTokenService>,
        renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            csrf,
            renderer,
        }
    }

    fn render(&self, view: &str, model: &Value) -> Result<Html<String>, Html<String>> {
        self.renderer
            .render(view, model)
            .map(Html)
            .map_err(|e| fallback_page(&e))
    }

    fn error_page(&self, err: ProductError) -> (StatusCode, Html<String>) {
        let (status, view) = err.into_error_page();
        (status, render_error_page(self.renderer.as_ref(), status, &view))
    }

    fn product_view(&self, product: Product) -> ProductView {
        ProductView::new(product, self.csrf.as_ref())
    }
}

/// Product catalog pages
///
/// Server-rendered HTML for listing, viewing, creating, editing and deleting products.
#[OpenApi]
impl ProductPages {
    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self) -> PageResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let views: Vec<ProductView> =
                    products.into_iter().map(|p| self.product_view(p)).collect();
                self.render("product/list.html", &json!({ "products": views }))
                    .into()
            }
            Err(err) => self.error_page(err).into(),
        }
    }

    /// Show the create form
    #[oai(path = "/products/new", method = "get", tag = "ApiTags::Products")]
    async fn new_product_form(&self) -> PageResponse {
        self.render(
            "product/new.html",
            &json!({ "form": ProductForm::default(), "error": null }),
        )
        .into()
    }

    /// Create a product
    ///
    /// Redirects to the list on success.
    #[oai(path = "/products/new", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, form: Form<ProductForm>) -> SubmitResponse {
        let form = form.0;
        let params = CreateProductParams {
            name: form.name.clone(),
            price: form.price.clone(),
        };

        match self.create_use_case.execute(params).await {
            Ok(_) => SubmitResponse::SeeOther(LIST_PATH.to_string()),
            Err(ProductError::InvalidPrice) => {
                match self.render(
                    "product/new.html",
                    &json!({ "form": form, "error": ProductError::InvalidPrice.to_string() }),
                ) {
                    Ok(html) => SubmitResponse::BadRequest(html),
                    Err(html) => SubmitResponse::InternalError(html),
                }
            }
            Err(err) => self.error_page(err).into(),
        }
    }

    /// Show a product
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn show_product(&self, id: Path<i64>) -> PageResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => self
                .render(
                    "product/show.html",
                    &json!({ "product": self.product_view(product) }),
                )
                .into(),
            Err(err) => self.error_page(err).into(),
        }
    }

    /// Show the edit form
    #[oai(path = "/products/:id/edit", method = "get", tag = "ApiTags::Products")]
    async fn edit_product_form(&self, id: Path<i64>) -> PageResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => {
                let form = ProductForm::from_product(&product);
                self.render(
                    "product/edit.html",
                    &json!({ "product": product, "form": form, "error": null }),
                )
                .into()
            }
            Err(err) => self.error_page(err).into(),
        }
    }

    /// Update a product
    ///
    /// Redirects to the list on success.
    #[oai(path = "/products/:id/edit", method = "post", tag = "ApiTags::Products")]
    async fn update_product(&self, id: Path<i64>, form: Form<ProductForm>) -> SubmitResponse {
        let form = form.0;
        let params = UpdateProductParams {
            id: id.0,
            name: form.name.clone(),
            price: form.price.clone(),
        };

        match self.update_use_case.execute(params).await {
            Ok(_) => SubmitResponse::SeeOther(LIST_PATH.to_string()),
            Err(ProductError::InvalidPrice) => {
                match self.render(
                    "product/edit.html",
                    &json!({
                        "product": { "id": id.0, "name": form.name },
                        "form": form,
                        "error": ProductError::InvalidPrice.to_string(),
                    }),
                ) {
                    Ok(html) => SubmitResponse::BadRequest(html),
                    Err(html) => SubmitResponse::InternalError(html),
                }
            }
            Err(err) => self.error_page(err).into(),
        }
    }

    /// Delete a product
    ///
    /// Requires the `_token` rendered with the delete form. A rejected or
    /// missing token leaves the product in place and still redirects to the list.
    /// The body is optional so an empty POST still gets the 404 check.
    #[oai(path = "/products/:id/delete", method = "post", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        id: Path<i64>,
        form: Option<BrowserForm<DeleteProductForm>>,
    ) -> SubmitResponse {
        let token = form.map(|form| form.0.token).unwrap_or_default();

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0, token })
            .await
        {
            Ok(()) | Err(ProductError::InvalidCsrfToken) => {
                SubmitResponse::SeeOther(LIST_PATH.to_string())
            }
            Err(err) => self.error_page(err).into(),
        }
    }
}

#[derive(ApiResponse)]
pub enum PageResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 404)]
    NotFound(Html<String>),
    #[oai(status = 500)]
    InternalError(Html<String>),
}

impl From<Result<Html<String>, Html<String>>> for PageResponse {
    fn from(rendered: Result<Html<String>, Html<String>>) -> Self {
        match rendered {
            Ok(html) => PageResponse::Ok(html),
            Err(html) => PageResponse::InternalError(html),
        }
    }
}

impl From<(StatusCode, Html<String>)> for PageResponse {
    fn from((status, html): (StatusCode, Html<String>)) -> Self {
        match status.as_u16() {
            404 => PageResponse::NotFound(html),
            _ => PageResponse::InternalError(html),
        }
    }
}

#[derive(ApiResponse)]
pub enum SubmitResponse {
    #[oai(status = 303)]
    SeeOther(#[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Html<String>),
    #[oai(status = 404)]
    NotFound(Html<String>),
    #[oai(status = 500)]
    InternalError(Html<String>),
}

impl From<(StatusCode, Html<String>)> for SubmitResponse {
    fn from((status, html): (StatusCode, Html<String>)) -> Self {
        match status.as_u16() {
            400 => SubmitResponse::BadRequest(html),
            404 => SubmitResponse::NotFound(html),
            _ => SubmitResponse::InternalError(html),
        }
    }
}
