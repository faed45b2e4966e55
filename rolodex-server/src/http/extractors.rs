//! Custom axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::models::{AccountName, ValidationError};

use super::error::ApiError;

/// Extract and validate the `{name}` path capture.
///
/// A missing or malformed capture is a handled 400, never an unchecked
/// index into a pattern match.
pub struct ValidAccountName(pub AccountName);

impl<S> FromRequestParts<S> for ValidAccountName
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "name" }))?;

        let name = AccountName::new(&name)?;
        Ok(Self(name))
    }
}
