mod blog_draft;
mod editor_document;
mod trending_entry;

pub use blog_draft::BlogDraft;
pub use editor_document::EditorDocument;
pub use trending_entry::{Author, TrendingEntry};
