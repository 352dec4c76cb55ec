use super::helpers;
use crate::core::scene::Particle;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleUniforms {
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) model_view: [[f32; 4]; 4],
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) pixel_ratio: f32,
    pub(crate) pointer: [f32; 2],
    pub(crate) intensity: f32,
    pub(crate) _pad: f32,
}

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instances: wgpu::Buffer,
    pub(crate) count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

// position, size, color; matches `Particle`
const PARTICLE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x3];

// Each particle is an instanced 6-vertex quad.
pub(crate) const QUAD_VERTICES: u32 = 6;

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    particles: &[Particle],
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let bgl = helpers::uniform_layout(device, "particles_bgl");
    let additive = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    };
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Particle>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &PARTICLE_ATTRS,
    };
    let pipeline = helpers::make_scene_pipeline(
        device,
        "particles_pipeline",
        &bgl,
        &shader,
        "vs_particle",
        "fs_particle",
        &[instance_layout],
        format,
        additive,
    );
    let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_instances"),
        contents: bytemuck::cast_slice(particles),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let uniform_buffer = helpers::uniform_buffer(
        device,
        "particles_uniforms",
        std::mem::size_of::<ParticleUniforms>(),
    );
    let bind_group = helpers::uniform_bind_group(device, "particles_bg", &bgl, &uniform_buffer);

    ParticleResources {
        pipeline,
        instances,
        count: particles.len() as u32,
        uniform_buffer,
        bind_group,
    }
}
