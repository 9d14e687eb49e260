use crate::domain::{BlogDraft, EditorDocument};
use serde::Serialize;

/// Body of `POST /blog/create-blog`.
#[derive(Debug, Serialize)]
pub struct CreateBlogData<'a> {
    pub title: &'a str,
    pub banner: &'a str,
    pub description: &'a str,
    pub content: &'a EditorDocument,
    pub tags: &'a [String],
    pub draft: bool,
}

impl<'a> CreateBlogData<'a> {
    pub fn draft(blog: &'a BlogDraft, content: &'a EditorDocument) -> Self {
        Self {
            title: &blog.title,
            banner: &blog.banner,
            description: &blog.description,
            content,
            tags: &blog.tags,
            draft: true,
        }
    }
}
