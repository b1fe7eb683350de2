use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use kiln_engine::render::{RenderCtx, RenderTarget};
use kiln_life::{Camera, Life};

use super::common::{primitive_triangles, scene_pass, QuadVertex, QUAD_INDICES, QUAD_VERTICES};

/// The cell-field projection: one instanced unit quad per grid cell.
///
/// The instance buffer carries a single alive/dead word per cell; the
/// vertex shader derives the cell's (row, col) from the instance index and
/// places it at `offset + (col, row) * quad_len` in normalized device
/// coordinates. The buffer is sized for `side²` instances once and
/// re-filled from the active grid buffer every frame.
pub struct CellRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    field_ubo: wgpu::Buffer,
    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
    instance_vbo: wgpu::Buffer,
    /// Scratch reused for the per-frame instance upload.
    states: Vec<u32>,
    cell_count: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FieldUniform {
    offset: [f32; 2],
    quad_len: f32,
    side: u32,
}

impl CellRenderer {
    pub fn new(ctx: &RenderCtx<'_>, side: usize) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cells shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cells.wgsl").into()),
        });

        let bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("cells bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<FieldUniform>() as u64
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("cells pipeline layout"),
                bind_group_layouts: &[&bgl],
                immediate_size: 0,
            });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("cells pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[QuadVertex::layout(), cell_instance_layout()],
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

        let field_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cells field ubo"),
            size: std::mem::size_of::<FieldUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cells bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: field_ubo.as_entire_binding(),
            }],
        });

        let quad_vbo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cells quad vbo"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let quad_ibo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cells quad ibo"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        let cell_count = (side * side) as u32;
        let instance_vbo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cells instance vbo"),
            size: u64::from(cell_count) * std::mem::size_of::<u32>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            bind_group,
            field_ubo,
            quad_vbo,
            quad_ibo,
            instance_vbo,
            states: Vec::with_capacity(cell_count as usize),
            cell_count,
        }
    }

    pub fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        life: &Life,
        camera: &Camera,
    ) {
        let uniform = FieldUniform {
            offset: camera.offset,
            quad_len: camera.quad_len,
            side: life.side() as u32,
        };
        ctx.queue
            .write_buffer(&self.field_ubo, 0, bytemuck::bytes_of(&uniform));

        self.states.clear();
        self.states.extend(life.cells().map(u32::from));
        ctx.queue
            .write_buffer(&self.instance_vbo, 0, bytemuck::cast_slice(&self.states));

        let mut rpass = scene_pass(target, "cells pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vbo.slice(..));
        rpass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..self.cell_count);
    }
}

fn cell_instance_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Uint32];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<u32>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &ATTRS,
    }
}
