use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures unrelated to what the visitor typed, such as a broken session store.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Something went wrong")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match &self {
            Self::InternalServerError(e) => {
                tracing::error!(error.cause_chain = ?e, error.message = %e, "{self}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
