use crate::constant::{EDITOR_STATE_EDITOR, EDITOR_STATE_PUBLISH};
use crate::domain::{BlogDraft, EditorDocument};
use async_trait::async_trait;

/// The page an editor session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Editor,
    Publish,
}

impl EditorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorState::Editor => EDITOR_STATE_EDITOR,
            EditorState::Publish => EDITOR_STATE_PUBLISH,
        }
    }
}

/// Control surface of the rich-text editor.
#[async_trait]
pub trait TextEditor: Send + Sync {
    fn is_ready(&self) -> bool;

    async fn save(&self) -> anyhow::Result<EditorDocument>;
}

/// Editor page state shared with the navbar.
pub trait EditorContext: Send + Sync {
    fn blog(&self) -> BlogDraft;

    fn text_editor(&self) -> &dyn TextEditor;

    fn set_editor_state(&self, state: EditorState);

    fn set_blog(&self, blog: BlogDraft);
}
