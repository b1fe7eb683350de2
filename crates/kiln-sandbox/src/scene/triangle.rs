use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use kiln_engine::render::{RenderCtx, RenderTarget};

use super::common::{primitive_triangles, scene_pass};

/// The bouncing triangle, drawn twice: one copy oscillating on a sine
/// path, one copy glued to the cursor with a phase-shifted color cycle.
pub struct TriangleRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    anim_ubo: wgpu::Buffer,
    vertex_vbo: wgpu::Buffer,
    instance_vbo: wgpu::Buffer,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TriVertex {
    pos: [f32; 2],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TriInstance {
    offset: [f32; 2],
    phase: f32,
    _pad: f32,
}

const TRI_VERTICES: [TriVertex; 3] = [
    TriVertex { pos: [-0.5, 0.25] },
    TriVertex { pos: [0.5, 0.25] },
    TriVertex { pos: [0.0, 1.0] },
];

impl TriangleRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("triangle bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(16),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("triangle pipeline layout"),
                bind_group_layouts: &[&bgl],
                immediate_size: 0,
            });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("triangle pipeline"),
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

        let anim_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("triangle anim ubo"),
            size: 16,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("triangle bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: anim_ubo.as_entire_binding(),
            }],
        });

        let vertex_vbo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("triangle vbo"),
                contents: bytemuck::cast_slice(&TRI_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let instance_vbo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("triangle instance vbo"),
            size: (2 * std::mem::size_of::<TriInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            bind_group,
            anim_ubo,
            vertex_vbo,
            instance_vbo,
        }
    }

    pub fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        time: f32,
        cursor: [f32; 2],
    ) {
        let anim = [time, 0.0, 0.0, 0.0f32];
        ctx.queue
            .write_buffer(&self.anim_ubo, 0, bytemuck::cast_slice(&anim));

        let instances = [
            TriInstance {
                offset: [-0.6, 0.4 * (1.5 * time).sin()],
                phase: 0.0,
                _pad: 0.0,
            },
            TriInstance {
                offset: cursor,
                phase: 1.5,
                _pad: 0.0,
            },
        ];
        ctx.queue
            .write_buffer(&self.instance_vbo, 0, bytemuck::cast_slice(&instances));

        let mut rpass = scene_pass(target, "triangle pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_vbo.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vbo.slice(..));
        rpass.draw(0..3, 0..2);
    }
}

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<TriVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        1 => Float32x2, // offset
        2 => Float32    // phase
    ];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<TriInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &ATTRS,
    }
}
