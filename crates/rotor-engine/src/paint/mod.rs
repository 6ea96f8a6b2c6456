//! Paint model shared between the scene and the renderer.
//!
//! Scope is solid fills only: color representation (linear premultiplied
//! alpha). Geometry types remain in `coords`.

mod color;

pub use color::Color;
