use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Mat3;
use crate::scene::VertexRange;

use super::mesh::FlatVertex;
use super::{RenderCtx, RenderTarget};

/// Uniform slot stride: the largest `min_uniform_buffer_offset_alignment`
/// across common adapters, so dynamic offsets are portable.
const TRANSFORM_STRIDE: u64 = 256;

/// Flat-shaded renderer: one static vertex buffer, one draw call per
/// `(transform, vertex range)` pair.
///
/// Each pair's matrix lands in its own 256-byte slot of a dynamic-offset
/// uniform buffer; the pass then binds slot `i` and draws range `i`, so draw
/// order equals pair order (back-to-front is the caller's responsibility).
#[derive(Default)]
pub struct FlatRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    transform_ubo: Option<wgpu::Buffer>,
    transform_capacity: usize,

    vbo: Option<wgpu::Buffer>,
    vertex_count: u32,

    warned_no_geometry: bool,
}

impl FlatRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot upload of the shared vertex buffer.
    ///
    /// Geometry is immutable for the process lifetime; calls after the first
    /// are ignored.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, vertices: &[FlatVertex]) {
        if self.vbo.is_some() {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("rotor flat vbo"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.vertex_count = vertices.len() as u32;
    }

    /// Renders `draws` into `target`, one draw call per entry, in entry order.
    ///
    /// Ranges must lie within the uploaded buffer; out-of-range draws are
    /// skipped with a debug message rather than tripping wgpu validation.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draws: &[(Mat3, VertexRange)],
    ) {
        if draws.is_empty() {
            return;
        }
        if self.vbo.is_none() {
            if !self.warned_no_geometry {
                log::debug!("FlatRenderer: render called before upload; skipping");
                self.warned_no_geometry = true;
            }
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_transform_capacity(ctx, draws.len());

        // Stage every matrix into its 256-byte slot and upload in one write.
        let mut staged = vec![0u8; draws.len() * TRANSFORM_STRIDE as usize];
        for (i, (mat, _)) in draws.iter().enumerate() {
            let u = TransformUniform { mat: mat.to_gpu() };
            let start = i * TRANSFORM_STRIDE as usize;
            staged[start..start + std::mem::size_of::<TransformUniform>()]
                .copy_from_slice(bytemuck::bytes_of(&u));
        }

        let Some(ubo) = self.transform_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, &staged);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rotor flat pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));

        for (i, (_, range)) in draws.iter().enumerate() {
            if range.end() > self.vertex_count {
                log::debug!(
                    "FlatRenderer: range {}..{} exceeds {} uploaded vertices; skipped",
                    range.offset,
                    range.end(),
                    self.vertex_count
                );
                continue;
            }
            let slot = (i as u64 * TRANSFORM_STRIDE) as u32;
            rpass.set_bind_group(0, bind_group, &[slot]);
            rpass.draw(range.offset..range.end(), 0..1);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/flat.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("rotor flat shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("rotor flat bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: true,
                            min_binding_size: Some(transform_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("rotor flat pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    // Newer wgpu uses immediate constants; keep disabled.
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("rotor flat pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[FlatVertex::layout()],
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

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bind group references the old layout; rebuild lazily.
        self.bind_group = None;
    }

    fn ensure_transform_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required > self.transform_capacity || self.transform_ubo.is_none() {
            let new_cap = required.next_power_of_two().max(8);

            self.transform_ubo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("rotor flat transform ubo"),
                size: new_cap as u64 * TRANSFORM_STRIDE,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.transform_capacity = new_cap;
            self.bind_group = None;
        }

        if self.bind_group.is_none() {
            let (Some(bgl), Some(ubo)) =
                (self.bind_group_layout.as_ref(), self.transform_ubo.as_ref())
            else {
                return;
            };

            self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("rotor flat bind group"),
                layout: bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: ubo,
                        offset: 0,
                        size: Some(transform_binding_size()),
                    }),
                }],
            }));
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TransformUniform {
    /// `mat3x3<f32>`: three vec4-padded columns (see `Mat3::to_gpu`).
    mat: [f32; 12],
}

/// Returns the `wgpu` minimum binding size for one transform slot.
///
/// `TransformUniform` is 48 bytes, so the size is always non-zero.
/// Centralising this avoids `.unwrap()` at each binding site.
fn transform_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<TransformUniform>() as u64)
        .expect("TransformUniform has non-zero size by construction")
}

fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}
