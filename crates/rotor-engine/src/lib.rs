//! Rotor engine crate.
//!
//! This crate owns the platform + GPU runtime pieces plus the scene/transform
//! core driven by the demo binary.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod render;
pub mod scene;
