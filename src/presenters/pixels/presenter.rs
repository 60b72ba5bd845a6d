use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui::epaint::ClippedShape;
use egui::TexturesDelta;
use egui_wgpu::Renderer as EguiRenderer;
use log::debug;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::time::Duration;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_generation: u64,
    last_render_duration: Option<Duration>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_generation: 0,
            last_render_duration: None,
        })
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &FrameData) {
        let buffer = &frame.frame_buffer;

        if frame.generation <= self.last_presented_generation
            || buffer.width() != self.width
            || buffer.height() != self.height
        {
            debug!(
                "skipping frame {} ({}x{}) for {}x{} surface",
                frame.generation,
                buffer.width(),
                buffer.height(),
                self.width,
                self.height
            );
            return;
        }

        buffer.copy_into_rgba8(self.pixels.frame_mut());
        self.has_frame = true;
        self.last_presented_generation = frame.generation;
        self.last_render_duration = Some(frame.render_duration);
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        shapes: Vec<ClippedShape>,
        textures_delta: TexturesDelta,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives = egui_ctx.tessellate(shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of the fractal
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.has_frame = false;

        Ok(())
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}
