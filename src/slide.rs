use std::path::Path;

use raylib::prelude::*;

/// One slide record: the uploaded texture plus a caption derived from the
/// file name. Slides are loaded once at startup and immutable afterwards.
pub struct Slide {
    texture: Texture2D,
    pub title: String,
}

impl Slide {
    pub fn new(texture: Texture2D, source_path: &Path) -> Self {
        let title = source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .replace(['_', '-'], " ");
        Self { texture, title }
    }

    /// Draw the slide letterboxed into `area`, preserving aspect ratio.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        let scale = (area.width / tex_width)
            .min(area.height / tex_height)
            .min(1.0);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            area.x + (area.width - scaled_width) * 0.5,
            area.y + (area.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
}
