use super::helpers;
use crate::core::scene::{ring_layouts, ring_vertices, RingLayout};
use crate::core::{RING_INNER_RADIUS, RING_OUTER_RADIUS, RING_SEGMENTS};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct RingUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) model_view: [[f32; 4]; 4],
    /// rgb + opacity
    pub(crate) color: [f32; 4],
    pub(crate) fog_color: [f32; 4],
    /// x = near, y = far
    pub(crate) fog_range: [f32; 4],
}

pub(crate) struct RingInstance {
    pub(crate) layout: RingLayout,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) struct RingResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) rings: Vec<RingInstance>,
}

const RING_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

pub(crate) fn create_ring_resources(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
) -> RingResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("rings_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::RINGS_WGSL.into()),
    });
    let bgl = helpers::uniform_layout(device, "rings_bgl");
    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &RING_ATTRS,
    };
    let pipeline = helpers::make_scene_pipeline(
        device,
        "rings_pipeline",
        &bgl,
        &shader,
        "vs_ring",
        "fs_ring",
        &[vertex_layout],
        format,
        wgpu::BlendState::ALPHA_BLENDING,
    );

    let verts = ring_vertices(RING_INNER_RADIUS, RING_OUTER_RADIUS, RING_SEGMENTS);
    let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("ring_vertices"),
        contents: bytemuck::cast_slice(&verts),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let rings = ring_layouts()
        .into_iter()
        .enumerate()
        .map(|(i, layout)| {
            let label = format!("ring_uniforms_{i}");
            let uniform_buffer =
                helpers::uniform_buffer(device, &label, std::mem::size_of::<RingUniforms>());
            let bind_group = helpers::uniform_bind_group(device, &label, &bgl, &uniform_buffer);
            RingInstance {
                layout,
                uniform_buffer,
                bind_group,
            }
        })
        .collect();

    RingResources {
        pipeline,
        vertices,
        vertex_count: verts.len() as u32,
        rings,
    }
}
