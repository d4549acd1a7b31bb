use crate::text::LabelRenderer;

use image::{Rgba, RgbaImage};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{BlendMode, Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Rasterized labels uploaded once and reused across frames, keyed by
/// (text, size, color).
pub struct LabelCache {
    renderer: Option<LabelRenderer>,
    cache: HashMap<u64, Texture>,
}

impl LabelCache {
    pub fn new(renderer: Option<LabelRenderer>) -> Self {
        Self {
            renderer,
            cache: HashMap::new(),
        }
    }

    pub fn available(&self) -> bool {
        self.renderer.is_some()
    }

    /// Returns `Ok(None)` when no font is available; callers skip the
    /// label in that case.
    pub fn get_or_insert(
        &mut self,
        creator: &TextureCreator<WindowContext>,
        text: &str,
        size: f32,
        color: Rgba<u8>,
    ) -> Result<Option<&Texture>, String> {
        let Some(renderer) = &self.renderer else {
            return Ok(None);
        };

        let key = Self::key(text, size, color);

        if !self.cache.contains_key(&key) {
            let image = renderer.render(text, size, color);
            let texture = Self::upload(creator, &image)?;
            self.cache.insert(key, texture);
        }

        Ok(self.cache.get(&key))
    }

    fn key(text: &str, size: f32, color: Rgba<u8>) -> u64 {
        let mut hasher = DefaultHasher::new();

        text.hash(&mut hasher);
        size.to_bits().hash(&mut hasher);
        color.0.hash(&mut hasher);

        hasher.finish()
    }

    fn upload(
        creator: &TextureCreator<WindowContext>,
        image: &RgbaImage,
    ) -> Result<Texture, String> {
        let (width, height) = image.dimensions();

        let mut texture = creator
            .create_texture_streaming(PixelFormatEnum::RGBA32, width, height)
            .map_err(|e| e.to_string())?;

        texture.set_blend_mode(BlendMode::Blend);
        texture
            .with_lock(None, |buffer: &mut [u8], _: usize| {
                buffer.copy_from_slice(image.as_raw());
            })
            .map_err(|e| e.to_string())?;

        Ok(texture)
    }
}
