//! Typeboard Core Library
//!
//! Platform-agnostic state and interaction logic for the Typeboard
//! text-box canvas editor.

pub mod boxes;
pub mod history;
pub mod input;
pub mod session;
pub mod store;

pub use boxes::{Alignment, BoxId, BoxPatch, FontFamily, TextBox, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use history::{History, MAX_UNDO_HISTORY};
pub use input::{DragState, PointerButton, PointerEvent};
pub use session::EditorSession;
pub use store::{BoxStore, Snapshot};
