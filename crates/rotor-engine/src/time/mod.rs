//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window (or per render loop); the clock's
//!   construction instant is the animation epoch
//! - call `tick()` once per presented frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
