use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use kiln_engine::render::{RenderCtx, RenderTarget};
use kiln_engine::text::{FontId, FontSystem};

use super::common::{premul_alpha_blend, primitive_triangles, scene_pass, QuadVertex, QUAD_INDICES, QUAD_VERTICES};

const ATLAS_SIZE: u32 = 512;
const GLYPH_PADDING: u32 = 1;
const FONT_PX: f32 = 18.0;
const MAX_GLYPHS: usize = 256;

/// One rasterized glyph in the atlas, plus its layout metrics.
struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    size: [f32; 2],
    /// Offset from the pen position: x bearing, and bottom edge relative
    /// to the baseline (positive up, fontdue convention).
    bearing: [f32; 2],
    advance: f32,
}

/// HUD text: one status line in logical pixels, top-left anchored.
///
/// Glyphs are rasterized at a fixed pixel size on first use and
/// shelf-packed into a single-channel atlas for the renderer's lifetime.
pub struct HudRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    atlas_texture: wgpu::Texture,
    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
    instance_vbo: wgpu::Buffer,

    cache: HashMap<char, CachedGlyph>,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    atlas_full: bool,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct HudUniform {
    viewport: [f32; 2],
    _pad: [f32; 2],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2  // uv_max
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

impl HudRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("hud shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/hud.wgsl").into()),
        });

        let atlas_texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("hud glyph atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let atlas_view = atlas_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("hud sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("hud bgl"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<HudUniform>() as u64,
                            ),
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("hud pipeline layout"),
                bind_group_layouts: &[&bgl],
                immediate_size: 0,
            });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("hud pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[QuadVertex::layout(), GlyphInstance::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(premul_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: primitive_triangles(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("hud viewport ubo"),
            size: std::mem::size_of::<HudUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("hud bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: viewport_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let quad_vbo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("hud quad vbo"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let quad_ibo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("hud quad ibo"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        let instance_vbo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("hud instance vbo"),
            size: (MAX_GLYPHS * std::mem::size_of::<GlyphInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            bind_group,
            viewport_ubo,
            atlas_texture,
            quad_vbo,
            quad_ibo,
            instance_vbo,
            cache: HashMap::new(),
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            atlas_full: false,
        }
    }

    /// Draws one line of `text` with its top-left corner at `origin`
    /// (logical pixels).
    pub fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        fonts: &FontSystem,
        font: FontId,
        text: &str,
        origin: [f32; 2],
    ) {
        let Some(font) = fonts.get(font) else {
            return;
        };

        let mut instances: Vec<GlyphInstance> = Vec::with_capacity(text.len().min(MAX_GLYPHS));
        let mut pen_x = origin[0];
        let baseline = origin[1] + FONT_PX;

        for ch in text.chars() {
            if !self.cache.contains_key(&ch) {
                self.rasterize(ctx, font, ch);
            }
            let Some(glyph) = self.cache.get(&ch) else {
                continue;
            };

            if glyph.size[0] > 0.0 && glyph.size[1] > 0.0 && instances.len() < MAX_GLYPHS {
                let x = pen_x + glyph.bearing[0];
                let y = baseline - glyph.bearing[1] - glyph.size[1];
                instances.push(GlyphInstance {
                    dst_min: [x, y],
                    dst_max: [x + glyph.size[0], y + glyph.size[1]],
                    uv_min: glyph.uv_min,
                    uv_max: glyph.uv_max,
                });
            }
            pen_x += glyph.advance;
        }

        if instances.is_empty() {
            return;
        }

        let uniform = HudUniform {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0, 0.0],
        };
        ctx.queue
            .write_buffer(&self.viewport_ubo, 0, bytemuck::bytes_of(&uniform));
        ctx.queue
            .write_buffer(&self.instance_vbo, 0, bytemuck::cast_slice(&instances));

        let mut rpass = scene_pass(target, "hud pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vbo.slice(..));
        rpass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..instances.len() as u32);
    }

    /// Rasterizes `ch` into the atlas and caches its placement.
    ///
    /// Whitespace and other empty glyphs get a metrics-only entry so the
    /// pen still advances over them.
    fn rasterize(&mut self, ctx: &RenderCtx<'_>, font: &fontdue::Font, ch: char) {
        let (metrics, bitmap) = font.rasterize(ch, FONT_PX);

        let mut glyph = CachedGlyph {
            uv_min: [0.0, 0.0],
            uv_max: [0.0, 0.0],
            size: [0.0, 0.0],
            bearing: [metrics.xmin as f32, metrics.ymin as f32],
            advance: metrics.advance_width,
        };

        let (w, h) = (metrics.width as u32, metrics.height as u32);
        if w > 0 && h > 0 {
            let Some((gx, gy)) = self.place(w, h) else {
                self.cache.insert(ch, glyph);
                return;
            };

            ctx.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &self.atlas_texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                    aspect: wgpu::TextureAspect::All,
                },
                &bitmap,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(w),
                    rows_per_image: Some(h),
                },
                wgpu::Extent3d {
                    width: w,
                    height: h,
                    depth_or_array_layers: 1,
                },
            );

            let atlas = ATLAS_SIZE as f32;
            glyph.uv_min = [gx as f32 / atlas, gy as f32 / atlas];
            glyph.uv_max = [(gx + w) as f32 / atlas, (gy + h) as f32 / atlas];
            glyph.size = [w as f32, h as f32];
        }

        self.cache.insert(ch, glyph);
    }

    /// Shelf-packs a `w × h` region, advancing to a new row when the
    /// current one is exhausted.
    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.atlas_full {
            return None;
        }

        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }
        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE {
            log::warn!("hud glyph atlas full; further new glyphs will be dropped");
            self.atlas_full = true;
            return None;
        }

        let pos = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(pos)
    }
}
