use crate::domain::EditorDocument;
use serde::{Deserialize, Serialize};

/// The blog record being authored. Owned by the editor page, never by the navbar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub banner: String,
    pub description: String,
    pub tags: Vec<String>,
    pub content: EditorDocument,
}

impl BlogDraft {
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_banner(&self) -> bool {
        !self.banner.is_empty()
    }

    /// Shallow copy of this draft with `content` replaced.
    pub fn with_content(&self, content: EditorDocument) -> Self {
        Self {
            content,
            ..self.clone()
        }
    }
}
