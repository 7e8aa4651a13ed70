use poem::http::StatusCode;
use poem_openapi::payload::Html;
use serde::Serialize;
use serde_json::json;

use crate::view::renderer::TemplateRenderer;

/// Served when even the error template cannot be rendered.
const FALLBACK_ERROR_BODY: &str = "<!DOCTYPE html><h1>500 Internal Server Error</h1>";

#[derive(Debug, Serialize)]
pub struct ErrorView {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorPage {
    fn into_error_page(self) -> (StatusCode, ErrorView);
}

pub fn render_error_page(
    renderer: &dyn TemplateRenderer,
    status: StatusCode,
    view: &ErrorView,
) -> Html<String> {
    let model = json!({
        "status": status.as_u16(),
        "name": view.name,
        "message": view.message,
    });

    match renderer.render("error.html", &model) {
        Ok(body) => Html(body),
        Err(e) => fallback_page(&e),
    }
}

pub fn fallback_page(err: &dyn std::error::Error) -> Html<String> {
    tracing::error!("Failed to render page: {err}");
    Html(FALLBACK_ERROR_BODY.to_string())
}
