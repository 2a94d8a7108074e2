use crate::controllers::interactive::{FramePresenterPort, Overlay};
use crate::core::data::grid_size::GridSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinitState;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

/// Blits frames into a window through `pixels` and draws the overlay text
/// with egui on top.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    egui_ctx: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    overlay: Option<Overlay>,
}

impl FramePresenterPort for PixelsPresenter {
    fn present(
        &mut self,
        buffer: &PixelBuffer,
        overlay: &Overlay,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        buffer.copy_to_rgba(self.pixels.frame_mut())?;
        self.overlay = Some(*overlay);

        self.render()?;

        Ok(())
    }
}

impl PixelsPresenter {
    /// The framebuffer has the grid's size; `pixels` scales it to the surface.
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        grid: GridSize,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(grid.width(), grid.height(), surface_texture)?;

        let egui_ctx = EguiContext::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            window,
            pixels,
            egui_ctx,
            egui_state,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            overlay: None,
        })
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        let _ = self.egui_state.on_window_event(self.window, event);
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.surface_width = width;
        self.surface_height = height;
        self.pixels.resize_surface(width, height)
    }

    /// Draws the last presented frame again, e.g. after the window was exposed.
    pub fn render(&mut self) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let raw_input = self.egui_state.take_egui_input(self.window);
        let overlay = self.overlay;

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            if let Some(overlay) = overlay {
                egui::Area::new(egui::Id::new("overlay"))
                    .fixed_pos(egui::pos2(8.0, 8.0))
                    .show(ctx, |ui| {
                        for line in overlay.lines() {
                            ui.label(
                                egui::RichText::new(line)
                                    .monospace()
                                    .color(egui::Color32::WHITE),
                            );
                        }
                    });
            }
        });

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output);

        let egui_ctx = &self.egui_ctx;
        let egui_renderer = &mut self.egui_renderer;
        let size_in_pixels = [self.surface_width, self.surface_height];

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}
