use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the clock was created (the animation epoch). Monotonic
    /// and unclamped: animated transforms are pure functions of this value.
    ///
    /// Kept at full `f64` precision so phase does not drift after hours of
    /// uptime; consumers narrow to `f32` only after trig.
    pub elapsed: f64,

    /// Time elapsed since the previous frame tick, in seconds. Clamped.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The epoch is captured at construction and owned by whoever owns the clock;
/// there is no global start-time state. Delta time is clamped to avoid
/// pathological values when the application is paused by the debugger,
/// minimized, or stalls; elapsed time is never clamped, so an animation
/// resumes at its true phase after a stall.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum prevents simulation explosions after long stalls
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min: Duration::from_micros(100), // 0.0001s
            dt_max: Duration::from_millis(250), // 0.25s
        }
    }

    /// Resets the delta-time baseline without moving the epoch.
    ///
    /// Useful after surface reconfigure events or when resuming from
    /// suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);

        // Clamp delta time to keep downstream systems stable.
        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            elapsed: now.saturating_duration_since(self.start).as_secs_f64(),
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic_across_ticks() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        std::thread::sleep(Duration::from_millis(2));
        let b = clock.tick();
        assert!(b.elapsed >= a.elapsed);
        assert!(b.elapsed > 0.0);
    }

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_is_clamped_to_bounds() {
        let mut clock = FrameClock::new();
        let ft = clock.tick(); // immediate tick hits the lower clamp
        assert!(ft.dt >= 0.0001 - f32::EPSILON);
        assert!(ft.dt <= 0.25 + f32::EPSILON);
    }

    #[test]
    fn reset_keeps_the_epoch() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(2));
        clock.reset();
        let ft = clock.tick();
        // Elapsed still measures from construction, not from reset.
        assert!(ft.elapsed >= 0.002);
    }
}
