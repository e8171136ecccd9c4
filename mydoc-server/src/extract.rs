//! Request extractors whose rejections use the `{"detail": ...}` error body.

use axum::extract::FromRequest;

use crate::error::ServerError;

/// `axum::Json`, but a bad body answers through [`ServerError`] instead of
/// axum's plain-text rejection. Status codes are unchanged (400, 415, 422).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);
