//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::Response,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body, then validates it with the `validator`
/// crate's `Validate` trait. Both a malformed body and a well-formed body
/// that fails validation are rejected with 422.
///
/// # Example
/// ```ignore
/// use axum_helpers::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 1))]
///     title: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProduct>) {
///     // payload passed validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        use axum::response::IntoResponse;

        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
