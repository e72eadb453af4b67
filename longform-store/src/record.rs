use longform_common::model::{
    EmptyIdError,
    post::{Post, PostId},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Id(#[from] EmptyIdError),
    #[error("Read time is out of range: {0}")]
    ReadTimeOutOfRange(i64),
}

/// Wire shape of a post as served by the backend and as embedded in seed
/// catalogs. Conversion into the model validates it.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_avatar: String,
    pub date: String,
    pub read_time: i64,
    pub tags: Vec<String>,
    pub image_url: String,
    pub excerpt: String,
}

impl TryFrom<PostRecord> for Post {
    type Error = RecordError;

    fn try_from(value: PostRecord) -> Result<Self, Self::Error> {
        let read_time = u32::try_from(value.read_time)
            .map_err(|_| RecordError::ReadTimeOutOfRange(value.read_time))?;

        Ok(Self {
            id: PostId::new(value.id)?,
            title: value.title,
            content: value.content,
            author: value.author,
            author_avatar: value.author_avatar,
            date: value.date,
            read_time,
            tags: value.tags,
            image_url: value.image_url,
            excerpt: value.excerpt,
        })
    }
}
