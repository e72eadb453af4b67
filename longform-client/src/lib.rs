pub mod feed;
pub mod fetch;
pub mod lifecycle;
pub mod memo;
pub mod post;
pub mod related;
