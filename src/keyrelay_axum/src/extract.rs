use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use keyrelay_core::SessionContext;
use secrecy::Secret;

const BEARER_PREFIX: &str = "Bearer ";

/// Caller session taken from the `Authorization: Bearer` header.
///
/// A missing or non-bearer header yields an anonymous session instead of a
/// rejection; the backend then resolves no user and the flow reports it.
#[derive(Debug, Clone)]
pub struct Session(pub SessionContext);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        let session = match token {
            Some(token) => SessionContext::bearer(Secret::new(token.to_string())),
            None => SessionContext::anonymous(),
        };

        Ok(Session(session))
    }
}
