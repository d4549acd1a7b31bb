use super::label_cache::LabelCache;
use crate::editor::Tool;
use crate::events::{EditorCommand, InputEvent};
use crate::layout::{GridLayout, Size};
use crate::map::TileMap;
use crate::text::LabelRenderer;
use crate::theme::Theme;
use crate::ui::{Palette, PaletteAction};

use image::Rgba;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::{FullscreenType, Window};
use sdl2::EventPump;

const AXIS_LABEL_SIZE: f32 = 10.0;
const PALETTE_LABEL_SIZE: f32 = 12.0;
const STATUS_LABEL_SIZE: f32 = 22.0;

#[derive(Debug, Clone, Copy)]
pub struct SdlConfig {
    pub window_size: Size,
    pub vsync: bool,
    pub fullscreen: bool,
}

/// SDL2 window renderer for the editor: paints the tile grid, grid
/// lines, axis labels, the tool palette and the status line, and drains
/// the event pump into the toolkit-independent `InputEvent` contract.
pub struct SdlRenderer {
    canvas: Canvas<Window>,
    events: EventPump,
    labels: LabelCache,
    theme: Theme,
}

fn to_sdl(color: Rgba<u8>) -> Color {
    Color::RGBA(color[0], color[1], color[2], color[3])
}

impl SdlRenderer {
    pub fn new(
        config: &SdlConfig,
        theme: Theme,
        labels: Option<LabelRenderer>,
    ) -> Result<Self, String> {
        let context = sdl2::init()?;
        let video = context.video()?;

        let mut window = video
            .window(
                "Vacuum Map",
                config.window_size.width,
                config.window_size.height,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        if config.fullscreen {
            window.set_fullscreen(FullscreenType::True)?;
        }

        if window.fullscreen_state() != FullscreenType::Off {
            context.mouse().show_cursor(false);
        }

        let mut builder = window.into_canvas().target_texture();

        if config.vsync {
            builder = builder.present_vsync();
        }

        let canvas = builder.build().map_err(|e| e.to_string())?;
        let events = context.event_pump()?;

        Ok(Self {
            canvas,
            events,
            labels: LabelCache::new(labels),
            theme,
        })
    }

    /// Translates pending SDL events. Left clicks are routed through the
    /// palette first; only misses become pointer events for the grid.
    pub fn poll_events(&mut self, palette: &Palette) -> Vec<InputEvent> {
        let mut output = Vec::new();

        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. } => output.push(InputEvent::Quit),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => match palette.hit(x, y) {
                    Some(PaletteAction::Select(tool)) => {
                        output.push(InputEvent::ToolSelected(Some(tool)));
                    }
                    Some(PaletteAction::Command(command)) => {
                        output.push(InputEvent::Command(command));
                    }
                    None => output.push(InputEvent::PointerDown { x, y }),
                },
                Event::MouseMotion {
                    mousestate, x, y, ..
                } if mousestate.left() => {
                    output.push(InputEvent::PointerMoved { x, y });
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => output.push(InputEvent::PointerUp),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(mapped) = Self::map_key(key) {
                        output.push(mapped);
                    }
                }
                _ => {}
            }
        }

        output
    }

    fn map_key(key: Keycode) -> Option<InputEvent> {
        match key {
            Keycode::V => Some(InputEvent::ToolSelected(Some(Tool::Vacuum))),
            Keycode::O => Some(InputEvent::ToolSelected(Some(Tool::Obstacle))),
            Keycode::E => Some(InputEvent::ToolSelected(Some(Tool::Eraser))),
            Keycode::Escape => Some(InputEvent::ToolSelected(None)),
            Keycode::U => Some(InputEvent::Command(EditorCommand::Undo)),
            Keycode::S => Some(InputEvent::Command(EditorCommand::ExportJson)),
            Keycode::P => Some(InputEvent::Command(EditorCommand::ExportImage)),
            Keycode::L => Some(InputEvent::Command(EditorCommand::Import)),
            _ => None,
        }
    }

    pub fn draw_frame(
        &mut self,
        map: &TileMap,
        layout: &GridLayout,
        palette: &Palette,
        active: Option<Tool>,
        status: &str,
    ) -> Result<(), String> {
        self.canvas.set_blend_mode(BlendMode::Blend);
        self.canvas.set_draw_color(to_sdl(self.theme.background));
        self.canvas.clear();

        self.draw_cells(map, layout)?;
        self.draw_grid_lines(map, layout)?;
        self.draw_axis_labels(layout)?;
        self.draw_palette(palette, active)?;
        self.draw_status(status)?;

        self.canvas.present();

        Ok(())
    }

    fn draw_cells(&mut self, map: &TileMap, layout: &GridLayout) -> Result<(), String> {
        for y in 0..map.grid_size() {
            for x in 0..map.grid_size() {
                let (px, py, w, h) = layout.cell_rect((x, y));

                self.canvas
                    .set_draw_color(to_sdl(self.theme.cells[map.get((x, y))]));
                self.canvas.fill_rect(Rect::new(px, py, w, h))?;
            }
        }

        Ok(())
    }

    fn draw_grid_lines(&mut self, map: &TileMap, layout: &GridLayout) -> Result<(), String> {
        self.canvas.set_draw_color(to_sdl(self.theme.grid_line));

        for y in 0..map.grid_size() {
            for x in 0..map.grid_size() {
                let (px, py, w, h) = layout.cell_rect((x, y));

                self.canvas.draw_rect(Rect::new(px, py, w, h))?;
            }
        }

        Ok(())
    }

    /// Column indices above the grid, row indices to its left. Skipped
    /// entirely when no font was found.
    fn draw_axis_labels(&mut self, layout: &GridLayout) -> Result<(), String> {
        if !self.labels.available() {
            return Ok(());
        }

        let (ox, oy) = layout.origin();
        let cell = layout.cell_size() as i32;

        for index in 0..layout.grid_size() {
            let text = index.to_string();
            let center = index as i32 * cell + cell / 2;

            self.blit_label(
                &text,
                AXIS_LABEL_SIZE,
                self.theme.text,
                ox + center,
                oy - 13,
                true,
            )?;
            self.blit_label(
                &text,
                AXIS_LABEL_SIZE,
                self.theme.text,
                ox - 16,
                oy + center - 5,
                false,
            )?;
        }

        Ok(())
    }

    fn draw_palette(&mut self, palette: &Palette, active: Option<Tool>) -> Result<(), String> {
        for button in palette.buttons() {
            let rect = Rect::new(button.x, button.y, button.width, button.height);
            let selected =
                matches!(button.action, PaletteAction::Select(tool) if active == Some(tool));
            let fill = if selected {
                self.theme.panel_active
            } else {
                self.theme.panel
            };

            self.canvas.set_draw_color(to_sdl(fill));
            self.canvas.fill_rect(rect)?;
            self.canvas.set_draw_color(to_sdl(self.theme.grid_line));
            self.canvas.draw_rect(rect)?;

            self.blit_label(
                button.label,
                PALETTE_LABEL_SIZE,
                self.theme.text,
                button.x + 6,
                button.y + 5,
                false,
            )?;
        }

        Ok(())
    }

    fn draw_status(&mut self, status: &str) -> Result<(), String> {
        let (_, height) = self.canvas.output_size()?;

        self.blit_label(
            status,
            STATUS_LABEL_SIZE,
            self.theme.text,
            5,
            height as i32 - 24,
            false,
        )
    }

    fn blit_label(
        &mut self,
        text: &str,
        size: f32,
        color: Rgba<u8>,
        x: i32,
        y: i32,
        center_x: bool,
    ) -> Result<(), String> {
        let creator = self.canvas.texture_creator();

        if let Some(texture) = self.labels.get_or_insert(&creator, text, size, color)? {
            let query = texture.query();
            let dst_x = if center_x {
                x - (query.width / 2) as i32
            } else {
                x
            };

            self.canvas
                .copy(texture, None, Rect::new(dst_x, y, query.width, query.height))?;
        }

        Ok(())
    }
}
