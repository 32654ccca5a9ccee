pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use repository::{PostListFilter, PostReadRepository, PostWriteRepository};
pub use value_objects::{Category, PostContent, PostId, PostSlug, PostTitle};
