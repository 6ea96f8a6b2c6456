use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::VertexRange;

/// Vertex format of the flat renderer: clip-space position + premultiplied
/// linear RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct FlatVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl FlatVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FlatVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Accumulates rectangle geometry into one shared vertex buffer.
///
/// Built once at startup. The returned ranges index into the vertex slice in
/// append order and stay valid for the lifetime of the uploaded buffer
/// (`FlatRenderer::upload` never reorders vertices).
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<FlatVertex>,
}

impl MeshBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an axis-aligned rectangle as two triangles (6 vertices) and
    /// returns its range in the shared buffer.
    pub fn push_rect(&mut self, center: Vec2, size: Vec2, color: Color) -> VertexRange {
        let half = size / 2.0;
        let x1 = center.x - half.x;
        let y1 = center.y - half.y;
        let x2 = center.x + half.x;
        let y2 = center.y + half.y;

        let offset = self.vertices.len() as u32;
        let color = color.to_array();
        let corners = [
            [x1, y1], [x2, y1], [x1, y2], // lower-left triangle
            [x1, y2], [x2, y1], [x2, y2], // upper-right triangle
        ];
        for pos in corners {
            self.vertices.push(FlatVertex { pos, color });
        }

        VertexRange::new(offset, 6)
    }

    /// Consumes the builder, yielding the finished vertex buffer contents.
    #[inline]
    pub fn into_vertices(self) -> Vec<FlatVertex> {
        self.vertices
    }
}
