use crate::core::scene::{Particle, SceneMotion, Viewport};
use crate::core::{BACKGROUND, FOG_FAR, FOG_NEAR, GOLD, PARTICLE_FLOAT_INTENSITY};
use glam::Vec2;
use web_sys as web;

mod helpers;
mod particles;
mod rings;

use particles::{create_particle_resources, ParticleResources, ParticleUniforms, QUAD_VERTICES};
use rings::{create_ring_resources, RingResources, RingUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    particles: ParticleResources,
    rings: RingResources,
    width: u32,
    height: u32,
    pixel_ratio: f32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        viewport: &Viewport,
        particles: &[Particle],
    ) -> anyhow::Result<Self> {
        let (width, height) = viewport.backing_size();

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
        // Colours are authored as sRGB values, so write them unconverted.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let particles = create_particle_resources(&device, format, particles);
        let rings = create_ring_resources(&device, format);
        log::info!(
            "scene ready: {} particles, {} rings, {}x{} {:?}",
            particles.count,
            rings.rings.len(),
            width,
            height,
            format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            particles,
            rings,
            width,
            height,
            pixel_ratio: viewport.pixel_ratio as f32,
            clear_color: wgpu::Color {
                r: BACKGROUND[0] as f64,
                g: BACKGROUND[1] as f64,
                b: BACKGROUND[2] as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        let (width, height) = viewport.backing_size();
        self.pixel_ratio = viewport.pixel_ratio as f32;
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-apply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, motion: &SceneMotion, pointer: Vec2) -> Result<(), wgpu::SurfaceError> {
        let proj = motion.camera.projection_matrix();
        let view_m = motion.camera.view_matrix();

        let globals = ParticleUniforms {
            proj: helpers::mat(proj),
            model_view: helpers::mat(view_m * motion.field_model()),
            resolution: [self.width as f32, self.height as f32],
            time: motion.time,
            pixel_ratio: self.pixel_ratio,
            pointer: pointer.to_array(),
            intensity: PARTICLE_FLOAT_INTENSITY,
            _pad: 0.0,
        };
        self.queue.write_buffer(
            &self.particles.uniform_buffer,
            0,
            bytemuck::bytes_of(&globals),
        );
        for ring in &self.rings.rings {
            let model_view = view_m * ring.layout.model(motion.time);
            let u = RingUniforms {
                mvp: helpers::mat(proj * model_view),
                model_view: helpers::mat(model_view),
                color: [GOLD[0], GOLD[1], GOLD[2], ring.layout.opacity],
                fog_color: [BACKGROUND[0], BACKGROUND[1], BACKGROUND[2], 1.0],
                fog_range: [FOG_NEAR, FOG_FAR, 0.0, 0.0],
            };
            self.queue
                .write_buffer(&ring.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
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
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Farthest ring first
            rpass.set_pipeline(&self.rings.pipeline);
            rpass.set_vertex_buffer(0, self.rings.vertices.slice(..));
            for ring in self.rings.rings.iter().rev() {
                rpass.set_bind_group(0, &ring.bind_group, &[]);
                rpass.draw(0..self.rings.vertex_count, 0..1);
            }

            rpass.set_pipeline(&self.particles.pipeline);
            rpass.set_bind_group(0, &self.particles.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.particles.instances.slice(..));
            rpass.draw(0..QUAD_VERTICES, 0..self.particles.count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
