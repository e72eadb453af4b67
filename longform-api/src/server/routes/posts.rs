use crate::server::{Result, ServerError, ServerRouter, json::Json, query::Query};
use axum::{Router, extract::State};
use axum_extra::routing::{RouterExt, TypedPath};
use longform_common::{
    filter::{Category, filter_posts},
    model::post::{Post, PostId},
    related::{DEFAULT_RELATED_LIMIT, related_posts},
};
use longform_store::{PostStore, memory::MemoryStore};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    Router::new()
        .typed_get(list_posts)
        .typed_get(get_post)
        .typed_get(get_related_posts)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts")]
struct PostsPath;

#[derive(Deserialize)]
struct ListPostsParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    category: Category,
}

#[axum::debug_handler]
async fn list_posts(
    _: PostsPath,
    Query(params): Query<ListPostsParams>,
    State(store): State<Arc<MemoryStore>>,
) -> Result<Json<Vec<Post>>> {
    let posts = store.list_posts().await?;

    Ok(Json(filter_posts(&posts, &params.q, &params.category)))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{id}", rejection(ServerError))]
struct GetPostPath {
    id: PostId,
}

#[axum::debug_handler]
async fn get_post(
    GetPostPath { id }: GetPostPath,
    State(store): State<Arc<MemoryStore>>,
) -> Result<Json<Post>> {
    let post = store
        .fetch_post(&id)
        .await?
        .ok_or_else(|| ServerError::PostByIdNotFound(id))?;

    Ok(Json(post))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{id}/related", rejection(ServerError))]
struct GetRelatedPostsPath {
    id: PostId,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

#[derive(Deserialize)]
struct RelatedParams {
    #[serde(default = "default_related_limit")]
    limit: usize,
}

#[axum::debug_handler]
async fn get_related_posts(
    GetRelatedPostsPath { id }: GetRelatedPostsPath,
    Query(params): Query<RelatedParams>,
    State(store): State<Arc<MemoryStore>>,
) -> Result<Json<Vec<Post>>> {
    let current = store
        .fetch_post(&id)
        .await?
        .ok_or_else(|| ServerError::PostByIdNotFound(id))?;
    let all = store.list_posts().await?;

    Ok(Json(related_posts(&current, &all, params.limit)))
}
