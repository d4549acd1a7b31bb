use crate::cli::AppConfig;
use crate::editor::{EditorController, PendingFileOp, Tool};
use crate::events::InputEvent;
use crate::layout::GridLayout;
use crate::map::TileMap;
use crate::render::{SdlConfig, SdlRenderer};
use crate::snapshot;
use crate::text::LabelRenderer;
use crate::theme::Theme;
use crate::ui::Palette;

use log::{error, info, warn};
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const FRAME_BUDGET: Duration = Duration::from_millis(1000 / 30);

pub struct VacuumMapApp {
    config: AppConfig,
}

impl VacuumMapApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let layout = GridLayout::new(
            self.config.grid_size,
            self.config.cell_size,
            self.config.window,
        );
        let theme = Theme::default();
        let palette = Palette::new();

        // A broken startup map is reported and replaced with an empty
        // grid; only window setup failures end the run.
        let map = match &self.config.map {
            Some(path) => match snapshot::read_json(path, self.config.grid_size) {
                Ok(map) => {
                    info!("loaded {}", path.display());
                    map
                }
                Err(err) => {
                    error!("failed to load {}: {}", path.display(), err);
                    TileMap::new(self.config.grid_size)
                }
            },
            None => TileMap::new(self.config.grid_size),
        };

        let mut controller = EditorController::new(map, layout, theme.clone());

        let labels = match &self.config.font {
            Some(path) => Some(LabelRenderer::from_file(path)?),
            None => {
                let found = LabelRenderer::discover();

                if found.is_none() {
                    warn!("no usable font found, labels disabled");
                }

                found
            }
        };

        let sdl_config = SdlConfig {
            window_size: self.config.window,
            vsync: self.config.vsync,
            fullscreen: self.config.fullscreen,
        };
        let mut renderer = SdlRenderer::new(&sdl_config, theme, labels)?;

        let mut fps: u32 = 0;
        let mut last_frame = Instant::now();

        loop {
            for event in renderer.poll_events(&palette) {
                controller.handle_event(event);
            }

            if controller.should_quit() {
                break;
            }

            // The dialog blocks this tick; the controller sees the result
            // as an ordinary event on the same tick.
            if let Some(op) = controller.pending_dialog() {
                let path = Self::pick_path(op);
                controller.handle_event(InputEvent::PathPicked(path));
            }

            let status = format!(
                "FPS: {} | Grid Size: {} | Cell Size: {} | Tool: {} | Undo: {}",
                fps,
                self.config.grid_size,
                self.config.cell_size,
                controller.tool().map_or("None", Tool::name),
                controller.undo_depth(),
            );

            renderer.draw_frame(controller.map(), &layout, &palette, controller.tool(), &status)?;

            let elapsed = last_frame.elapsed();

            if elapsed < FRAME_BUDGET {
                std::thread::sleep(FRAME_BUDGET - elapsed);
            }

            let frame_time = last_frame.elapsed().as_secs_f32();

            if frame_time > 0.0 {
                fps = (1.0 / frame_time).round() as u32;
            }

            last_frame = Instant::now();
        }

        info!("session closed");

        Ok(())
    }

    fn pick_path(op: PendingFileOp) -> Option<PathBuf> {
        match op {
            PendingFileOp::ExportJson => FileDialog::new()
                .add_filter("JSON map", &["json"])
                .set_file_name("map.json")
                .save_file(),
            PendingFileOp::ExportImage => FileDialog::new()
                .add_filter("PNG image", &["png"])
                .set_file_name("map.png")
                .save_file(),
            PendingFileOp::Import => FileDialog::new()
                .add_filter("JSON map", &["json"])
                .pick_file(),
        }
    }
}
