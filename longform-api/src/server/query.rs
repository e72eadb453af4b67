use crate::server::ServerError;
use axum::extract::{FromRequestParts, Query as AxumQuery};

/// Query extractor whose rejection is routed into [`ServerError`] so malformed
/// parameters get the same error body as every other failure.
#[derive(FromRequestParts, Debug, Clone, Copy, Default)]
#[from_request(via(AxumQuery), rejection(ServerError))]
pub struct Query<T>(pub T);
