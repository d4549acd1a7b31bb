use crate::error::Result;
use crate::events::{EditorCommand, InputEvent};
use crate::layout::GridLayout;
use crate::map::{Position, TileMap};
use crate::snapshot;
use crate::theme::Theme;
use crate::tile::TileKind;
use crate::undo::UndoLog;

use log::{error, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};

/// The active painting tool. `None` at the controller level means no tool
/// is selected and pointer input is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Obstacle,
    Vacuum,
    Eraser,
}

impl Tool {
    /// The tile kind this tool writes. The eraser writes `Floor`, which
    /// removes the cell's entry.
    pub fn paints(self) -> TileKind {
        match self {
            Tool::Obstacle => TileKind::Obstacle,
            Tool::Vacuum => TileKind::Vacuum,
            Tool::Eraser => TileKind::Floor,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Obstacle => "Obstacle",
            Tool::Vacuum => "Vacuum",
            Tool::Eraser => "Eraser",
        }
    }
}

/// The file operation a pending dialog will resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingFileOp {
    ExportJson,
    ExportImage,
    Import,
}

impl fmt::Display for PendingFileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PendingFileOp::ExportJson => "JSON export",
            PendingFileOp::ExportImage => "PNG export",
            PendingFileOp::Import => "JSON import",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    /// Pointer held; `last` is the most recently painted cell of this
    /// drag, used to suppress repeat mutations while hovering it.
    Painting { last: Position },
    AwaitingFileDialog(PendingFileOp),
}

/// Owns the map and its history, and interprets input events. All
/// snapshot failures are reported through the log and leave the map
/// untouched; nothing here ends the session except a quit event.
pub struct EditorController {
    map: TileMap,
    undo: UndoLog,
    layout: GridLayout,
    theme: Theme,
    tool: Option<Tool>,
    state: EditorState,
    quit: bool,
}

impl EditorController {
    pub fn new(map: TileMap, layout: GridLayout, theme: Theme) -> Self {
        Self {
            map,
            undo: UndoLog::new(),
            layout,
            theme,
            tool: None,
            state: EditorState::Idle,
            quit: false,
        }
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The operation waiting on a file path, if any. The app layer drives
    /// the file-picking collaborator and answers with
    /// `InputEvent::PathPicked`.
    pub fn pending_dialog(&self) -> Option<PendingFileOp> {
        match self.state {
            EditorState::AwaitingFileDialog(op) => Some(op),
            _ => None,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit = true,
            InputEvent::ToolSelected(tool) => self.tool = tool,
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMoved { x, y } => self.pointer_moved(x, y),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Command(command) => self.command(command),
            InputEvent::PathPicked(path) => self.path_picked(path),
        }
    }

    fn pointer_down(&mut self, px: i32, py: i32) {
        if matches!(self.state, EditorState::AwaitingFileDialog(_)) {
            return;
        }

        let Some(tool) = self.tool else {
            return;
        };

        // Pixels outside the grid rectangle are silently ignored.
        let Some(pos) = self.layout.pixel_to_position(px, py) else {
            return;
        };

        self.paint(pos, tool);
        self.state = EditorState::Painting { last: pos };
    }

    fn pointer_moved(&mut self, px: i32, py: i32) {
        let EditorState::Painting { last } = self.state else {
            return;
        };

        let Some(tool) = self.tool else {
            return;
        };

        let Some(pos) = self.layout.pixel_to_position(px, py) else {
            return;
        };

        // One mutation (and one undo entry) per cell entered during the
        // drag; hovering in place does nothing further.
        if pos == last {
            return;
        }

        self.paint(pos, tool);
        self.state = EditorState::Painting { last: pos };
    }

    fn pointer_up(&mut self) {
        if matches!(self.state, EditorState::Painting { .. }) {
            self.state = EditorState::Idle;
        }
    }

    fn paint(&mut self, pos: Position, tool: Tool) {
        // Undo entry first, capturing the pre-mutation value.
        self.undo.record(pos, self.map.get(pos));

        if let Err(err) = self.map.set(pos, tool.paints()) {
            warn!("paint failed: {}", err);
        }
    }

    fn command(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::Undo => {
                self.state = EditorState::Idle;
                self.undo_one();
            }
            EditorCommand::ExportJson => self.begin_dialog(PendingFileOp::ExportJson),
            EditorCommand::ExportImage => self.begin_dialog(PendingFileOp::ExportImage),
            EditorCommand::Import => self.begin_dialog(PendingFileOp::Import),
        }
    }

    fn begin_dialog(&mut self, op: PendingFileOp) {
        if self.state == EditorState::Idle {
            self.state = EditorState::AwaitingFileDialog(op);
        }
    }

    /// Reverts the most recent edit. Restoring goes through the normal
    /// `set`, so a restored vacuum tile still displaces any other vacuum
    /// on the map; nothing is recorded, so undo never feeds itself.
    pub fn undo_one(&mut self) {
        if let Some(entry) = self.undo.pop() {
            if let Err(err) = self.map.set(entry.pos, entry.previous) {
                warn!("undo failed: {}", err);
            }
        }
    }

    fn path_picked(&mut self, path: Option<PathBuf>) {
        let EditorState::AwaitingFileDialog(op) = self.state else {
            return;
        };

        self.state = EditorState::Idle;

        let Some(path) = path else {
            info!("{} cancelled", op);
            return;
        };

        let result = match op {
            PendingFileOp::ExportJson => snapshot::write_json(&self.map, &path),
            PendingFileOp::ExportImage => {
                snapshot::write_image(&self.map, self.layout.cell_size(), &self.theme, &path)
            }
            PendingFileOp::Import => self.import(&path),
        };

        match result {
            Ok(()) => info!("{}: {}", op, path.display()),
            Err(err) => error!("{} failed: {}", op, err),
        }
    }

    /// All-or-nothing: the live map is replaced only once the whole file
    /// parsed and validated. History entries describe the replaced map,
    /// so they go with it.
    fn import(&mut self, path: &Path) -> Result<()> {
        let imported = snapshot::read_json(path, self.map.grid_size())?;

        self.map = imported;
        self.undo.clear();

        Ok(())
    }
}
