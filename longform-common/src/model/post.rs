use crate::model::Id;
use serde::Serialize;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

pub type PostId = Id<PostMarker>;

/// An immutable article record. Consumers never mutate a post; every derived
/// view is recomputed from a fresh snapshot.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_avatar: String,
    pub date: String,
    pub read_time: u32,
    pub tags: Vec<String>,
    pub image_url: String,
    pub excerpt: String,
}
