//! Request extractors

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejection renders as an [`ApiError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
