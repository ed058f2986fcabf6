//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract and parse a product id from the path.
///
/// Any path segment that does not parse as an integer is rejected with 400
/// before the handler runs, so the store is never queried for garbage ids.
pub struct ValidProductId(pub i64);

impl<S> FromRequestParts<S> for ValidProductId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidProductId)?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::InvalidProductId)?;
        Ok(Self(id))
    }
}
