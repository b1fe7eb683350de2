use bytemuck::{Pod, Zeroable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wgpu::util::DeviceExt;

use kiln_engine::render::{RenderCtx, RenderTarget};

use super::common::{primitive_triangles, scene_pass};

const PARTICLE_COUNT: usize = 32;
const STAR_SCALE: f32 = 0.035;

/// Instanced particle field: a diagonal line of small four-pointed stars
/// whose x positions are re-jittered and re-uploaded every frame.
pub struct ParticleRenderer {
    pipeline: wgpu::RenderPipeline,
    star_vbo: wgpu::Buffer,
    star_vertex_count: u32,
    instance_vbo: wgpu::Buffer,
    rng: StdRng,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ParticleInstance {
    offset: [f32; 2],
}

/// Four-pointed star outline, alternating long and short points.
const STAR_RING: [[f32; 2]; 8] = [
    [1.0, 0.0],
    [0.25, -0.25],
    [0.0, -1.0],
    [-0.25, -0.25],
    [-1.0, 0.0],
    [-0.25, 0.25],
    [0.0, 1.0],
    [0.25, 0.25],
];

/// Expands the star outline into a triangle list around the center.
fn star_vertices() -> Vec<[f32; 2]> {
    let mut verts = Vec::with_capacity(STAR_RING.len() * 3);
    for i in 0..STAR_RING.len() {
        let a = STAR_RING[i];
        let b = STAR_RING[(i + 1) % STAR_RING.len()];
        verts.push([0.0, 0.0]);
        verts.push([a[0] * STAR_SCALE, a[1] * STAR_SCALE]);
        verts.push([b[0] * STAR_SCALE, b[1] * STAR_SCALE]);
    }
    verts
}

impl ParticleRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/particles.wgsl").into()),
        });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("particles pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("particles pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout(), instance_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: primitive_triangles(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        let verts = star_vertices();
        let star_vbo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("particles star vbo"),
                contents: bytemuck::cast_slice(&verts),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let instance_vbo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particles instance vbo"),
            size: (PARTICLE_COUNT * std::mem::size_of::<ParticleInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            star_vbo,
            star_vertex_count: verts.len() as u32,
            instance_vbo,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let mut instances = [ParticleInstance { offset: [0.0, 0.0] }; PARTICLE_COUNT];
        for (i, inst) in instances.iter_mut().enumerate() {
            let t = i as f32 / PARTICLE_COUNT as f32;
            inst.offset = [
                -1.0 + t * 2.0 + self.rng.random_range(0.0..0.05),
                t * 2.0 - 1.0,
            ];
        }
        ctx.queue
            .write_buffer(&self.instance_vbo, 0, bytemuck::cast_slice(&instances));

        let mut rpass = scene_pass(target, "particles pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.star_vbo.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vbo.slice(..));
        rpass.draw(0..self.star_vertex_count, 0..PARTICLE_COUNT as u32);
    }
}

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
    wgpu::VertexBufferLayout {
        array_stride: (std::mem::size_of::<f32>() * 2) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x2];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &ATTRS,
    }
}
