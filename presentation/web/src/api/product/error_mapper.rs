use poem::http::StatusCode;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorView, IntoErrorPage};

impl IntoErrorPage for ProductError {
    fn into_error_page(self) -> (StatusCode, ErrorView) {
        let (status, name, message) = match &self {
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_price",
            ),
            ProductError::InvalidCsrfToken => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "product.invalid_csrf_token",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            ErrorView {
                name: name.to_string(),
                message: message.to_string(),
            },
        )
    }
}
