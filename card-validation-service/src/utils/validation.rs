use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Why a request body could not be turned into the expected payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("Json parse error: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl From<PayloadError> for AppError {
    fn from(err: PayloadError) -> Self {
        AppError::BadRequest(anyhow::Error::new(err))
    }
}

impl IntoResponse for PayloadError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// JSON body that has been decoded and passed its `validator` rules.
///
/// Unlike `axum::Json` the `Content-Type` header is not required, and every
/// decode or validation failure is a plain 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = PayloadError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        Ok(ValidatedJson(decode(&body)?))
    }
}

pub fn decode<T>(body: &[u8]) -> Result<T, PayloadError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(body)?;
    value.validate()?;
    Ok(value)
}
