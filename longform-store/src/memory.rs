use crate::{PostStore, Result, record::PostRecord};
use longform_common::model::post::{Post, PostId};
use std::{sync::Arc, time::Duration};

/// Post source serving an immutable in-memory snapshot.
///
/// The optional latency emulates a data source that resolves asynchronously
/// rather than inline.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    posts: Arc<[Post]>,
    latency: Option<Duration>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: posts.into(),
            latency: None,
        }
    }

    pub fn from_records(records: Vec<PostRecord>) -> Result<Self> {
        let posts = records
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(posts))
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl PostStore for MemoryStore {
    async fn list_posts(&self) -> Result<Arc<[Post]>> {
        self.delay().await;
        Ok(Arc::clone(&self.posts))
    }

    async fn fetch_post(&self, id: &PostId) -> Result<Option<Post>> {
        self.delay().await;
        Ok(self.posts.iter().find(|post| post.id == *id).cloned())
    }
}
