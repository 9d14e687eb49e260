use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured output of the rich-text editor.
///
/// Only `blocks` is interpreted here; every other field the editor emits
/// (`time`, `version`, ...) is carried through to the backend untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorDocument {
    #[serde(default)]
    pub blocks: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EditorDocument {
    pub fn new(blocks: Vec<Value>) -> Self {
        Self {
            blocks,
            extra: Map::new(),
        }
    }

    /// An empty `blocks` sequence means nothing has been authored yet.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
