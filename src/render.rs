use crate::core::{LoadedModel, ModelPresenter, MotionPolicy, WaveEffect, CLEAR_COLOR};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod model;
mod targets;
mod waves;

use model::{create_model_resources, upload_mesh, ModelResources, ModelUniforms};
use targets::RenderTargets;
use waves::{create_waves_resources, WavesResources, WavesUniforms};

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    waves: WavesResources,
    model: ModelResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    view_proj: Mat4,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, effect: &WaveEffect) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let waves = create_waves_resources(&device, format, &effect.mesh);
        let model = create_model_resources(&device, format);
        log::info!(
            "[gpu] ready {}x{} format={:?} wave_tris={}",
            width,
            height,
            format,
            effect.mesh.triangle_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            waves,
            model,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
            view_proj: Mat4::IDENTITY,
        })
    }

    pub fn set_view_projection(&mut self, view_proj: Mat4) {
        self.view_proj = view_proj;
    }

    pub fn has_model(&self) -> bool {
        !self.model.meshes.is_empty()
    }

    /// Upload every sub-mesh once; all of them share the model material.
    pub fn upload_model(&mut self, loaded: &LoadedModel) {
        if self.has_model() {
            return;
        }
        self.model.meshes = loaded
            .meshes
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| upload_mesh(&self.device, m))
            .collect();
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn render(
        &mut self,
        effect: &WaveEffect,
        motion: MotionPolicy,
        presenter: &ModelPresenter,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let draw_model = match (presenter.model(), presenter.model_matrix()) {
            (Some(loaded), Some(m)) if self.has_model() => {
                let u = ModelUniforms::pack(self.view_proj, m, loaded, presenter.uniforms.time);
                self.queue
                    .write_buffer(&self.model.uniform_buffer, 0, bytemuck::bytes_of(&u));
                true
            }
            _ => false,
        };
        let draw_waves = effect.is_visible(motion);
        if draw_waves {
            let u = WavesUniforms::pack(self.view_proj, effect);
            self.queue
                .write_buffer(&self.waves.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Opaque model first so the additive rings depth-test against it
            if draw_model {
                rpass.set_pipeline(&self.model.pipeline);
                rpass.set_bind_group(0, &self.model.bind_group, &[]);
                for mesh in &self.model.meshes {
                    rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                    rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
                }
            }

            if draw_waves {
                rpass.set_pipeline(&self.waves.pipeline);
                rpass.set_bind_group(0, &self.waves.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.waves.vertex_buffer.slice(..));
                rpass.set_index_buffer(self.waves.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(
                    0..self.waves.index_count,
                    0,
                    0..effect.layers.len() as u32,
                );
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
