use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid ingredients: {0}")]
    InvalidIngredients(String),

    #[error("Missing or invalid configuration: {0}")]
    MissingConfig(String),

    #[error("Recipe service unreachable: {0}")]
    ProviderUnavailable(String),

    #[error("Recipe service rejected the request ({status}): {message}")]
    ProviderRejected { status: u16, message: String },

    #[error("Recipe service returned an empty completion")]
    EmptyCompletion,

    #[error("No recipe has been generated yet")]
    NoRecipe,

    #[error("Failed to export PDF: {0}")]
    PdfExport(String),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidIngredients(_) => "Please enter some ingredients.",
            Self::MissingConfig(_) => "The recipe service is not configured.",
            Self::ProviderUnavailable(_) => {
                "Could not reach the recipe service. Try again in a moment."
            }
            Self::ProviderRejected { status: 401 | 403, .. } => {
                "The recipe service refused our credentials."
            }
            Self::ProviderRejected { status: 429, .. } => {
                "The recipe service is busy right now. Try again in a moment."
            }
            Self::ProviderRejected { .. } => "The recipe service could not handle this request.",
            Self::EmptyCompletion => "The recipe service returned nothing. Try again.",
            Self::NoRecipe => "Generate a recipe first.",
            Self::PdfExport(_) => "Could not create the PDF.",
            Self::Session(_) | Self::Internal(_) => "Something went wrong on our side.",
        }
    }

    /// Whether repeating the same user action may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ProviderUnavailable(_) | Self::EmptyCompletion => true,
            Self::ProviderRejected { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
        retryable: bool,
    }

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::InvalidIngredients(_) => StatusCode::UNPROCESSABLE_ENTITY,
                AppError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
                AppError::ProviderRejected { status: 429, .. } => StatusCode::TOO_MANY_REQUESTS,
                AppError::ProviderRejected { .. } => StatusCode::BAD_GATEWAY,
                AppError::EmptyCompletion => StatusCode::BAD_GATEWAY,
                AppError::NoRecipe => StatusCode::NOT_FOUND,
                AppError::MissingConfig(_)
                | AppError::PdfExport(_)
                | AppError::Session(_)
                | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            let body = ErrorResponse {
                message: self.user_message().to_string(),
                retryable: self.is_retryable(),
            };
            (status, Json(body)).into_response()
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_classification() {
        assert!(AppError::ProviderUnavailable("timeout".to_string()).is_retryable());
        assert!(AppError::EmptyCompletion.is_retryable());
        assert!(AppError::ProviderRejected {
            status: 503,
            message: String::new()
        }
        .is_retryable());
        assert!(!AppError::ProviderRejected {
            status: 401,
            message: String::new()
        }
        .is_retryable());
        assert!(!AppError::InvalidIngredients("empty".to_string()).is_retryable());
        assert!(!AppError::NoRecipe.is_retryable());
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = AppError::ProviderRejected {
            status: 401,
            message: "invalid api key sk-123".to_string(),
        };
        assert!(!err.user_message().contains("sk-123"));
        assert!(err.to_string().contains("401"));
    }
}
