use crate::{PostStore, Result, record::{PostRecord, RecordError}};
use longform_common::model::post::{Post, PostId};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::debug;

/// Post source backed by the longform HTTP api.
#[derive(Clone, Debug)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl PostStore for HttpStore {
    async fn list_posts(&self) -> Result<Arc<[Post]>> {
        let records: Vec<PostRecord> = self
            .client
            .get(format!("{}/posts", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(count = records.len(), "Fetched the post collection");

        let posts = records
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, RecordError>>()?;

        Ok(posts.into())
    }

    async fn fetch_post(&self, id: &PostId) -> Result<Option<Post>> {
        let response = self
            .client
            .get(format!("{}/posts/{id}", self.base_url))
            .send()
            .await?;

        // Absence is a valid outcome, distinct from a retrieval failure.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let record: PostRecord = response.error_for_status()?.json().await?;
        Ok(Some(Post::try_from(record)?))
    }
}
