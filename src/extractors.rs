use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::store::TenantToken;

/// The caller's tenant, taken byte for byte from the `Authorization` header.
/// Rejects with 403 when the header is absent or empty.
#[derive(Debug, Clone)]
pub struct Tenant(pub TenantToken);

impl<S> FromRequestParts<S> for Tenant
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_token(parts)
            .map(|token| Tenant(TenantToken::new(token.to_vec())))
            .ok_or(AppError::MissingToken)
    }
}

fn extract_token(parts: &Parts) -> Option<&[u8]> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .map(|v| v.as_bytes())
        .filter(|token| !token.is_empty())
}
