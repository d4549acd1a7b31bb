pub mod label_cache;
pub mod sdl_renderer;

pub use sdl_renderer::{SdlConfig, SdlRenderer};
