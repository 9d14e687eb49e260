//! Capabilities the navbar and the trending feed borrow from the surrounding app.
mod date;
mod editor;
mod navigation;
mod notification;

pub use date::{ChronoDayFormatter, DayFormatter};
pub use editor::{EditorContext, EditorState, TextEditor};
pub use navigation::Navigator;
pub use notification::{Notifier, ToastId};
