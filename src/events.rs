use crate::editor::Tool;
use std::path::PathBuf;

/// Editor-level commands triggered by key bindings or palette buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Undo,
    ExportJson,
    ExportImage,
    Import,
}

/// Events the controller consumes, independent of the windowing toolkit.
/// The SDL layer translates raw window events into these; tests feed them
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerDown { x: i32, y: i32 },
    PointerMoved { x: i32, y: i32 },
    PointerUp,
    ToolSelected(Option<Tool>),
    Command(EditorCommand),
    /// Resolution of a pending file dialog; `None` means cancelled.
    PathPicked(Option<PathBuf>),
}
