//! The panel window's renderer: clear to the strip color, draw item
//! backgrounds, then labels.

use std::sync::Arc;

use winit::window::Window;

use crate::gpu::{GpuContext, PhysicalSize, RendererError};
use crate::quad::{QuadInstance, QuadRenderer};
use crate::scene::PanelScene;
use crate::text::LabelRenderer;

pub struct PanelRenderer {
    gpu: GpuContext,
    quads: QuadRenderer,
    labels: LabelRenderer,
    frames: u64,
}

impl PanelRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let quads = QuadRenderer::new(&gpu.device, gpu.format());
        let labels = LabelRenderer::new(&gpu.device, &gpu.queue, gpu.format());
        Ok(Self {
            gpu,
            quads,
            labels,
            frames: 0,
        })
    }

    pub fn size(&self) -> PhysicalSize {
        self.gpu.size
    }

    pub fn scale_factor(&self) -> f64 {
        self.gpu.scale_factor
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.gpu.scale_factor = scale_factor;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Draw one frame of `scene` and present it.
    pub fn render(&mut self, scene: &PanelScene) -> Result<(), RendererError> {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface out of date, reconfiguring");
                self.gpu.reconfigure();
                self.gpu.surface.get_current_texture()?
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let srgb = self.gpu.format().is_srgb();
        let size = self.gpu.size;
        let quads: Vec<QuadInstance> = scene
            .quads()
            .into_iter()
            .map(|quad| QuadInstance {
                color: surface_color(quad.color, srgb),
                ..quad
            })
            .collect();
        self.quads
            .prepare(&self.gpu.queue, &quads, size.width as f32, size.height as f32);
        self.labels
            .prepare(&self.gpu.device, &self.gpu.queue, scene, size)?;

        let [r, g, b, a] = surface_color(scene.theme.background.to_f32_array(), srgb);
        let clear = wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: f64::from(a),
        };

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("taskstrip frame encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("taskstrip strip pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.quads.render(&mut pass);
            self.labels.render(&mut pass)?;
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.frames += 1;
        if self.frames == 1 {
            tracing::info!(
                width = size.width,
                height = size.height,
                format = ?self.gpu.format(),
                items = scene.slots().len(),
                "first frame presented"
            );
        }
        Ok(())
    }
}

/// Config colors are sRGB; an sRGB surface expects linear values.
fn surface_color(color: [f32; 4], srgb_surface: bool) -> [f32; 4] {
    if !srgb_surface {
        return color;
    }
    let [r, g, b, a] = color;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_surface_keeps_colors() {
        let color = [0.2, 0.4, 0.6, 0.5];
        assert_eq!(surface_color(color, false), color);
    }

    #[test]
    fn srgb_surface_linearises_but_keeps_alpha() {
        let [r, g, b, a] = surface_color([0.0, 0.5, 1.0, 0.5], true);
        assert_eq!(r, 0.0);
        assert!((g - 0.214).abs() < 1e-3);
        assert!((b - 1.0).abs() < 1e-6);
        assert_eq!(a, 0.5);
    }
}
