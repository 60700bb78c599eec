//! Item labels, shaped and drawn with glyphon.

use glyphon::{
    Attrs, Buffer as TextBuffer, Cache, Color as GlyphonColor, Family, FontSystem, Metrics,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds,
    TextRenderer as GlyphonRenderer, Viewport, Wrap,
};
use taskstrip_common::Color;

use crate::gpu::{PhysicalSize, RendererError};
use crate::scene::PanelScene;

pub struct LabelRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    atlas: TextAtlas,
    viewport: Viewport,
    renderer: GlyphonRenderer,
}

impl LabelRenderer {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let cache = Cache::new(device);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let viewport = Viewport::new(device, &cache);
        let renderer =
            GlyphonRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            atlas,
            viewport,
            renderer,
        }
    }

    /// Shape every label of `scene` and upload the glyphs.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &PanelScene,
        size: PhysicalSize,
    ) -> Result<(), RendererError> {
        self.viewport.update(
            queue,
            Resolution {
                width: size.width,
                height: size.height,
            },
        );
        self.atlas.trim();

        let metrics = Metrics::new(scene.font_px, scene.line_px);
        let attrs = Attrs::new().family(Family::SansSerif);
        let buffers: Vec<TextBuffer> = scene
            .labels()
            .map(|label| {
                let mut buffer = TextBuffer::new(&mut self.font_system, metrics);
                buffer.set_wrap(&mut self.font_system, Wrap::None);
                buffer.set_size(
                    &mut self.font_system,
                    Some(label.width()),
                    Some(scene.line_px),
                );
                buffer.set_text(&mut self.font_system, &label.text, attrs, Shaping::Advanced);
                buffer.shape_until_scroll(&mut self.font_system, false);
                buffer
            })
            .collect();

        let color = glyphon_color(scene.theme.text_color);
        let text_areas: Vec<TextArea> = scene
            .labels()
            .zip(&buffers)
            .map(|(label, buffer)| TextArea {
                buffer,
                left: label.left,
                top: label.top,
                scale: 1.0,
                bounds: TextBounds {
                    left: label.bounds.left,
                    top: label.bounds.top,
                    right: label.bounds.right,
                    bottom: label.bounds.bottom,
                },
                default_color: color,
                custom_glyphs: &[],
            })
            .collect();

        self.renderer
            .prepare(
                device,
                queue,
                &mut self.font_system,
                &mut self.atlas,
                &self.viewport,
                text_areas,
                &mut self.swash_cache,
            )
            .map_err(|e| RendererError::TextError(e.to_string()))
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) -> Result<(), RendererError> {
        self.renderer
            .render(&self.atlas, &self.viewport, pass)
            .map_err(|e| RendererError::TextError(e.to_string()))
    }
}

fn glyphon_color(color: Color) -> GlyphonColor {
    GlyphonColor::rgba(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_color_keeps_channels() {
        let color = glyphon_color(Color::from_rgba(0xcd, 0xd6, 0xf4, 0xff));
        assert_eq!(
            (color.r(), color.g(), color.b(), color.a()),
            (0xcd, 0xd6, 0xf4, 0xff)
        );
    }
}
