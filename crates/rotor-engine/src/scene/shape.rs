use crate::coords::Vec2;
use crate::paint::Color;

/// Contiguous span of vertices in the shared vertex buffer.
///
/// Ranges are handed out by `render::MeshBuilder` and stay valid for the
/// lifetime of the uploaded buffer (the buffer is never reordered).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexRange {
    pub offset: u32,
    pub count: u32,
}

impl VertexRange {
    #[inline]
    pub const fn new(offset: u32, count: u32) -> Self {
        Self { offset, count }
    }

    /// One past the last vertex index covered by this range.
    #[inline]
    pub const fn end(self) -> u32 {
        self.offset + self.count
    }
}

/// Static shape description: geometry metadata plus its draw range.
///
/// Built once at startup and never mutated; only the per-frame world
/// transforms change.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shape {
    /// Rest-pose center in clip space (baked into the vertex data).
    pub center: Vec2,
    /// Width and height in clip-space units.
    pub size: Vec2,
    pub color: Color,
    pub range: VertexRange,
}
