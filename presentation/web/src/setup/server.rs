use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::server_config::ServerConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub fn build_app(container: DependencyContainer, base_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_pages),
            "Product Catalog",
            env!("CARGO_PKG_VERSION"),
        )
        .server(base_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(Tracing)
    }

    pub async fn run(config: &ServerConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.bind_address();
        let app = Self::build_app(container, &config.base_url());
        tracing::info!("Catalog running at {}/products", config.base_url());
        tracing::info!("Swagger UI at {}/docs", config.base_url());
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use business::domain::csrf::CsrfTokenService;
    use business::domain::product::value_objects::PriceParsePolicy;
    use csrf::token_manager::CsrfTokenManagerHmac;
    use persistence::product::memory::ProductRepositoryInMemory;
    use poem::http::StatusCode;
    use poem::test::{TestClient, TestResponse};

    use super::*;
    use crate::config::catalog_config::CatalogConfig;
    use crate::setup::seed::seed_demo_products;
    use crate::view::renderer::MinijinjaRenderer;

    const SECRET: &[u8] = b"scenario-secret";

    async fn app_with(price_policy: PriceParsePolicy) -> impl Endpoint {
        let repository = Arc::new(ProductRepositoryInMemory::new());
        seed_demo_products(repository.as_ref()).await.unwrap();

        let container = DependencyContainer::new(
            repository,
            Arc::new(CsrfTokenManagerHmac::new(SECRET).unwrap()),
            Arc::new(MinijinjaRenderer::new().unwrap()),
            &CatalogConfig {
                price_policy,
                seed_demo_products: true,
            },
        );
        Server::build_app(container, "http://localhost")
    }

    async fn client() -> TestClient<impl Endpoint> {
        TestClient::new(app_with(PriceParsePolicy::Lenient).await)
    }

    fn delete_token(id: i64) -> String {
        CsrfTokenManagerHmac::new(SECRET)
            .unwrap()
            .generate_token(&format!("delete{id}"))
    }

    async fn body(resp: TestResponse) -> String {
        resp.0.into_body().into_string().await.unwrap()
    }

    fn assert_redirects_to_list(resp: &TestResponse) {
        resp.assert_status(StatusCode::SEE_OTHER);
        resp.assert_header("location", "/products");
    }

    #[tokio::test]
    async fn should_list_seeded_products_in_insertion_order() {
        let cli = client().await;

        let resp = cli.get("/products").send().await;

        resp.assert_status_is_ok();
        let html = body(resp).await;
        let intex = html.find("Intex").unwrap();
        let micromax = html.find("Micromax").unwrap();
        assert!(intex < micromax);
        assert!(html.contains(&delete_token(1)));
    }

    #[tokio::test]
    async fn should_run_create_then_delete_scenario() {
        let cli = client().await;

        let resp = cli
            .post("/products/new")
            .form(&[("name", "Tablet"), ("price", "300")])
            .send()
            .await;
        assert_redirects_to_list(&resp);

        let resp = cli.get("/products/3").send().await;
        resp.assert_status_is_ok();
        let html = body(resp).await;
        assert!(html.contains("Tablet"));
        assert!(html.contains("300"));

        let token = delete_token(1);
        let resp = cli
            .post("/products/1/delete")
            .form(&[("_token", token.as_str())])
            .send()
            .await;
        assert_redirects_to_list(&resp);

        cli.get("/products/1")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let html = body(cli.get("/products").send().await).await;
        assert!(!html.contains("Intex"));
        assert!(html.contains("/products/2\""));
        assert!(html.contains("/products/3\""));
    }

    #[tokio::test]
    async fn should_keep_product_when_delete_token_is_wrong() {
        let cli = client().await;

        let resp = cli
            .post("/products/1/delete")
            .form(&[("_token", delete_token(2).as_str())])
            .send()
            .await;
        assert_redirects_to_list(&resp);

        let resp = cli.post("/products/1/delete").form(&[("other", "x")]).send().await;
        assert_redirects_to_list(&resp);

        cli.get("/products/1").send().await.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_check_existence_before_requiring_a_delete_body() {
        let cli = client().await;

        let resp = cli.post("/products/99/delete").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        assert!(body(resp).await.contains("product.not_found"));

        let resp = cli.post("/products/1/delete").send().await;
        assert_redirects_to_list(&resp);

        cli.get("/products/1").send().await.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_document_delete_without_forbidden_response() {
        let cli = client().await;

        let resp = cli.get("/openapi.json").send().await;
        resp.assert_status_is_ok();
        let doc: serde_json::Value = serde_json::from_str(&body(resp).await).unwrap();

        let responses = &doc["paths"]["/products/{id}/delete"]["post"]["responses"];
        assert!(responses.get("303").is_some());
        assert!(responses.get("403").is_none());
    }

    #[tokio::test]
    async fn should_answer_404_for_unknown_ids() {
        let cli = client().await;

        cli.get("/products/99")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        cli.get("/products/99/edit")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        cli.post("/products/99/edit")
            .form(&[("name", "Ghost"), ("price", "1")])
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let resp = cli
            .post("/products/99/delete")
            .form(&[("_token", delete_token(99).as_str())])
            .send()
            .await;
        resp.assert_status(StatusCode::NOT_FOUND);
        assert!(body(resp).await.contains("product.not_found"));
    }

    #[tokio::test]
    async fn should_store_zero_price_for_non_numeric_input() {
        let cli = client().await;

        let resp = cli
            .post("/products/new")
            .form(&[("name", "Phone"), ("price", "abc")])
            .send()
            .await;
        assert_redirects_to_list(&resp);

        let html = body(cli.get("/products/3/edit").send().await).await;
        assert!(html.contains(r#"name="price" value="0""#));
    }

    #[tokio::test]
    async fn should_update_name_and_price_in_place() {
        let cli = client().await;

        let resp = cli
            .post("/products/2/edit")
            .form(&[("name", "Micromax X"), ("price", "999")])
            .send()
            .await;
        assert_redirects_to_list(&resp);

        let resp = cli.get("/products/2/edit").send().await;
        resp.assert_status_is_ok();
        let html = body(resp).await;
        assert!(html.contains("Edit product #2"));
        assert!(html.contains(r#"value="Micromax X""#));
        assert!(html.contains(r#"value="999""#));
    }

    #[tokio::test]
    async fn should_render_create_form() {
        let cli = client().await;

        let resp = cli.get("/products/new").send().await;

        resp.assert_status_is_ok();
        assert!(body(resp).await.contains(r#"action="/products/new""#));
    }

    #[tokio::test]
    async fn should_rerender_form_when_price_rejected_by_strict_policy() {
        let cli = TestClient::new(app_with(PriceParsePolicy::Strict).await);

        let resp = cli
            .post("/products/new")
            .form(&[("name", "Phone"), ("price", "abc")])
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let html = body(resp).await;
        assert!(html.contains("product.invalid_price"));
        assert!(html.contains(r#"value="Phone""#));

        let html = body(cli.get("/products").send().await).await;
        assert!(!html.contains("Phone"));
    }

    #[tokio::test]
    async fn should_report_healthy() {
        let cli = client().await;

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("status").assert_string("healthy");
    }
}
