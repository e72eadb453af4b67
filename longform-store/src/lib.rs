pub mod http;
pub mod memory;
pub mod record;

use crate::record::RecordError;
use longform_common::model::post::{Post, PostId};
use std::{future::Future, sync::Arc};
use thiserror::Error;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("A stored post was invalid: {0}")]
    Data(#[from] RecordError),
    #[error("Error requesting posts from the backend: {0}")]
    Http(#[from] reqwest::Error),
}

/// Read contract of the post repository.
///
/// The collection is served as an immutable snapshot. Absence of a post is
/// `None`, never an error; [`StoreError`] is reserved for retrieval failures.
pub trait PostStore {
    fn list_posts(&self) -> impl Future<Output = Result<Arc<[Post]>>> + Send;

    fn fetch_post(&self, id: &PostId) -> impl Future<Output = Result<Option<Post>>> + Send;
}
