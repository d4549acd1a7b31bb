use vacuum_map::editor::{EditorController, EditorState, PendingFileOp, Tool};
use vacuum_map::events::{EditorCommand, InputEvent};
use vacuum_map::layout::{GridLayout, Size};
use vacuum_map::map::TileMap;
use vacuum_map::snapshot;
use vacuum_map::theme::Theme;
use vacuum_map::tile::TileKind;
use vacuum_map::ui::{Palette, PaletteAction};

fn controller_with(grid_size: usize, cell_size: u32, width: u32, height: u32) -> EditorController {
    let layout = GridLayout::new(grid_size, cell_size, Size { width, height });

    EditorController::new(TileMap::new(grid_size), layout, Theme::default())
}

fn controller() -> EditorController {
    controller_with(8, 10, 200, 200)
}

/// Center pixel of a cell, for synthesizing pointer events.
fn cell_pixel(controller: &EditorController, x: usize, y: usize) -> (i32, i32) {
    let (px, py, w, h) = controller.layout().cell_rect((x, y));

    (px + w as i32 / 2, py + h as i32 / 2)
}

fn click(controller: &mut EditorController, x: usize, y: usize) {
    let (px, py) = cell_pixel(controller, x, y);

    controller.handle_event(InputEvent::PointerDown { x: px, y: py });
    controller.handle_event(InputEvent::PointerUp);
}

#[test]
fn test_pointer_down_paints_and_records() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    let (px, py) = cell_pixel(&editor, 2, 3);
    editor.handle_event(InputEvent::PointerDown { x: px, y: py });

    assert_eq!(editor.map().get((2, 3)), TileKind::Obstacle);
    assert_eq!(editor.state(), EditorState::Painting { last: (2, 3) });
    assert_eq!(editor.undo_depth(), 1);

    editor.handle_event(InputEvent::PointerUp);
    assert_eq!(editor.state(), EditorState::Idle);
}

#[test]
fn test_pointer_is_inert_without_a_tool() {
    let mut editor = controller();

    click(&mut editor, 2, 3);

    assert!(editor.map().is_empty());
    assert_eq!(editor.undo_depth(), 0);
    assert_eq!(editor.state(), EditorState::Idle);
}

#[test]
fn test_pointer_outside_the_grid_is_ignored() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    // the centered 8x10px grid starts at (60, 60)
    editor.handle_event(InputEvent::PointerDown { x: 3, y: 3 });

    assert!(editor.map().is_empty());
    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.undo_depth(), 0);
}

#[test]
fn test_drag_paints_once_per_cell() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));

    let (px, py) = cell_pixel(&editor, 1, 1);
    editor.handle_event(InputEvent::PointerDown { x: px, y: py });
    // hovering inside the same cell adds nothing
    editor.handle_event(InputEvent::PointerMoved { x: px + 2, y: py + 2 });
    assert_eq!(editor.undo_depth(), 1);

    let (qx, qy) = cell_pixel(&editor, 2, 1);
    editor.handle_event(InputEvent::PointerMoved { x: qx, y: qy });
    editor.handle_event(InputEvent::PointerUp);

    assert_eq!(editor.map().get((1, 1)), TileKind::Obstacle);
    assert_eq!(editor.map().get((2, 1)), TileKind::Obstacle);
    assert_eq!(editor.undo_depth(), 2);
}

#[test]
fn test_pointer_move_without_a_drag_does_nothing() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    let (px, py) = cell_pixel(&editor, 4, 4);
    editor.handle_event(InputEvent::PointerMoved { x: px, y: py });

    assert!(editor.map().is_empty());
    assert_eq!(editor.state(), EditorState::Idle);
}

#[test]
fn test_undo_restores_the_previous_value() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Vacuum)));
    click(&mut editor, 4, 4);
    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    click(&mut editor, 4, 4);

    assert_eq!(editor.map().get((4, 4)), TileKind::Obstacle);

    editor.handle_event(InputEvent::Command(EditorCommand::Undo));
    assert_eq!(editor.map().get((4, 4)), TileKind::Vacuum);

    editor.handle_event(InputEvent::Command(EditorCommand::Undo));
    assert_eq!(editor.map().get((4, 4)), TileKind::Floor);
    assert!(editor.map().is_empty());
    assert_eq!(editor.undo_depth(), 0);

    // undoing an empty history is a no-op
    editor.handle_event(InputEvent::Command(EditorCommand::Undo));
    assert!(editor.map().is_empty());
}

#[test]
fn test_undo_touches_only_the_edited_cell() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    click(&mut editor, 1, 1);
    click(&mut editor, 5, 5);

    editor.handle_event(InputEvent::Command(EditorCommand::Undo));

    assert_eq!(editor.map().get((5, 5)), TileKind::Floor);
    assert_eq!(editor.map().get((1, 1)), TileKind::Obstacle);
}

#[test]
fn test_export_scenario_with_two_undos() {
    let mut editor = controller_with(3, 10, 100, 100);

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    click(&mut editor, 0, 0);
    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Vacuum)));
    click(&mut editor, 1, 1);

    assert_eq!(
        snapshot::export_json(editor.map()).unwrap(),
        "[[1,0,0],[0,2,0],[0,0,0]]"
    );

    editor.handle_event(InputEvent::Command(EditorCommand::Undo));
    editor.handle_event(InputEvent::Command(EditorCommand::Undo));

    assert_eq!(
        snapshot::export_json(editor.map()).unwrap(),
        "[[0,0,0],[0,0,0],[0,0,0]]"
    );
}

#[test]
fn test_vacuum_tool_keeps_the_singleton() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Vacuum)));
    click(&mut editor, 1, 1);
    click(&mut editor, 2, 2);

    assert_eq!(editor.map().get((1, 1)), TileKind::Floor);
    assert_eq!(editor.map().get((2, 2)), TileKind::Vacuum);
    assert_eq!(editor.map().vacuum(), Some((2, 2)));
}

#[test]
fn test_undo_while_painting_returns_to_idle() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    let (px, py) = cell_pixel(&editor, 3, 3);
    editor.handle_event(InputEvent::PointerDown { x: px, y: py });
    assert!(matches!(editor.state(), EditorState::Painting { .. }));

    editor.handle_event(InputEvent::Command(EditorCommand::Undo));

    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.map().get((3, 3)), TileKind::Floor);
}

#[test]
fn test_export_json_through_the_dialog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.json");
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    click(&mut editor, 2, 2);

    editor.handle_event(InputEvent::Command(EditorCommand::ExportJson));
    assert_eq!(editor.pending_dialog(), Some(PendingFileOp::ExportJson));
    assert_eq!(
        editor.state(),
        EditorState::AwaitingFileDialog(PendingFileOp::ExportJson)
    );

    editor.handle_event(InputEvent::PathPicked(Some(path.clone())));
    assert_eq!(editor.state(), EditorState::Idle);

    let restored = snapshot::read_json(&path, 8).unwrap();
    assert_eq!(restored.get((2, 2)), TileKind::Obstacle);
    assert_eq!(restored.len(), 1);
}

#[test]
fn test_export_png_through_the_dialog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.png");
    let mut editor = controller();

    editor.handle_event(InputEvent::Command(EditorCommand::ExportImage));
    editor.handle_event(InputEvent::PathPicked(Some(path.clone())));

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (80, 80));
}

#[test]
fn test_import_through_the_dialog_replaces_map_and_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.json");

    let mut source = TileMap::new(8);
    source.set((0, 7), TileKind::Obstacle).unwrap();
    source.set((6, 1), TileKind::Vacuum).unwrap();
    snapshot::write_json(&source, &path).unwrap();

    let mut editor = controller();
    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    click(&mut editor, 3, 3);
    assert_eq!(editor.undo_depth(), 1);

    editor.handle_event(InputEvent::Command(EditorCommand::Import));
    editor.handle_event(InputEvent::PathPicked(Some(path)));

    assert_eq!(editor.map().get((0, 7)), TileKind::Obstacle);
    assert_eq!(editor.map().get((6, 1)), TileKind::Vacuum);
    assert_eq!(editor.map().get((3, 3)), TileKind::Floor);
    assert_eq!(editor.undo_depth(), 0);
}

#[test]
fn test_cancelled_dialog_changes_nothing() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Vacuum)));
    click(&mut editor, 1, 1);

    editor.handle_event(InputEvent::Command(EditorCommand::Import));
    editor.handle_event(InputEvent::PathPicked(None));

    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.map().get((1, 1)), TileKind::Vacuum);
    assert_eq!(editor.undo_depth(), 1);
}

#[test]
fn test_failed_import_leaves_state_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[[0,0],[0,9]]").unwrap();

    let mut editor = controller();
    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    click(&mut editor, 3, 3);

    editor.handle_event(InputEvent::Command(EditorCommand::Import));
    editor.handle_event(InputEvent::PathPicked(Some(path)));

    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.map().get((3, 3)), TileKind::Obstacle);
    assert_eq!(editor.undo_depth(), 1);
}

#[test]
fn test_commands_are_ignored_while_painting() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    let (px, py) = cell_pixel(&editor, 3, 3);
    editor.handle_event(InputEvent::PointerDown { x: px, y: py });

    editor.handle_event(InputEvent::Command(EditorCommand::ExportJson));
    assert_eq!(editor.pending_dialog(), None);
    assert!(matches!(editor.state(), EditorState::Painting { .. }));

    editor.handle_event(InputEvent::PointerUp);
}

#[test]
fn test_pointer_is_ignored_while_a_dialog_is_pending() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    editor.handle_event(InputEvent::Command(EditorCommand::ExportJson));

    let (px, py) = cell_pixel(&editor, 2, 2);
    editor.handle_event(InputEvent::PointerDown { x: px, y: py });

    assert!(editor.map().is_empty());
    assert_eq!(
        editor.state(),
        EditorState::AwaitingFileDialog(PendingFileOp::ExportJson)
    );

    editor.handle_event(InputEvent::PathPicked(None));
    assert_eq!(editor.state(), EditorState::Idle);
}

#[test]
fn test_stray_path_picked_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stray.json");
    let mut editor = controller();

    editor.handle_event(InputEvent::PathPicked(Some(path.clone())));

    assert_eq!(editor.state(), EditorState::Idle);
    assert!(!path.exists());
}

#[test]
fn test_tool_selection_is_orthogonal_to_state() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Eraser)));
    assert_eq!(editor.tool(), Some(Tool::Eraser));
    assert_eq!(editor.state(), EditorState::Idle);
    assert!(editor.map().is_empty());

    editor.handle_event(InputEvent::ToolSelected(None));
    assert_eq!(editor.tool(), None);
}

#[test]
fn test_eraser_removes_entries() {
    let mut editor = controller();

    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Obstacle)));
    click(&mut editor, 2, 2);
    editor.handle_event(InputEvent::ToolSelected(Some(Tool::Eraser)));
    click(&mut editor, 2, 2);

    assert_eq!(editor.map().get((2, 2)), TileKind::Floor);
    assert!(editor.map().is_empty());
    assert_eq!(editor.undo_depth(), 2);
}

#[test]
fn test_quit_event_sets_the_flag() {
    let mut editor = controller();

    assert!(!editor.should_quit());
    editor.handle_event(InputEvent::Quit);
    assert!(editor.should_quit());
}

#[test]
fn test_palette_hit_testing() {
    let palette = Palette::new();

    assert_eq!(palette.hit(5, 5), Some(PaletteAction::Select(Tool::Vacuum)));
    assert_eq!(
        palette.hit(5, 30),
        Some(PaletteAction::Select(Tool::Obstacle))
    );
    assert_eq!(
        palette.hit(99, 3 * 23 + 5),
        Some(PaletteAction::Command(EditorCommand::Undo))
    );
    assert_eq!(palette.hit(100, 5), None);
    assert_eq!(palette.hit(5, 7 * 23 + 1), None);
    assert_eq!(palette.hit(400, 300), None);
}
