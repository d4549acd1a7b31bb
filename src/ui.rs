use crate::editor::Tool;
use crate::events::EditorCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    Select(Tool),
    Command(EditorCommand),
}

#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
    pub action: PaletteAction,
}

impl Button {
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && py >= self.y
            && px < self.x + self.width as i32
            && py < self.y + self.height as i32
    }
}

const BUTTON_WIDTH: u32 = 100;
const BUTTON_HEIGHT: u32 = 23;

/// Tool and command buttons stacked in the top-left corner. Pure
/// geometry; the renderer draws it and the event translation layer asks
/// it whether a click landed on a button.
#[derive(Debug, Clone)]
pub struct Palette {
    buttons: Vec<Button>,
}

impl Palette {
    pub fn new() -> Self {
        let entries: [(&'static str, PaletteAction); 7] = [
            ("Vacuum", PaletteAction::Select(Tool::Vacuum)),
            ("Obstacle", PaletteAction::Select(Tool::Obstacle)),
            ("Eraser", PaletteAction::Select(Tool::Eraser)),
            ("Undo", PaletteAction::Command(EditorCommand::Undo)),
            ("Save JSON", PaletteAction::Command(EditorCommand::ExportJson)),
            ("Save PNG", PaletteAction::Command(EditorCommand::ExportImage)),
            ("Load", PaletteAction::Command(EditorCommand::Import)),
        ];

        let buttons = entries
            .iter()
            .enumerate()
            .map(|(index, &(label, action))| Button {
                x: 0,
                y: index as i32 * BUTTON_HEIGHT as i32,
                width: BUTTON_WIDTH,
                height: BUTTON_HEIGHT,
                label,
                action,
            })
            .collect();

        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn hit(&self, px: i32, py: i32) -> Option<PaletteAction> {
        self.buttons
            .iter()
            .find(|button| button.contains(px, py))
            .map(|button| button.action)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
