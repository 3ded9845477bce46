//! Deterministic frame pump for tests.
//!
//! ```
//! use kinetic_core::Runtime;
//! use kinetic_testing::FrameDriver;
//!
//! let runtime = Runtime::new();
//! let mut driver = FrameDriver::new(runtime.handle());
//! driver.advance_by_millis(100);
//! assert!(driver.is_idle());
//! ```

use kinetic_core::{RuntimeHandle, NANOS_PER_MILLI};

/// Drives a runtime's frame clock at a fixed interval without a window.
pub struct FrameDriver {
    runtime: RuntimeHandle,
    frame_time_nanos: u64,
    frame_interval_nanos: u64,
    frames: u64,
}

impl FrameDriver {
    /// ~60 FPS.
    pub const DEFAULT_FRAME_INTERVAL_NANOS: u64 = 16_666_667;

    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            runtime,
            frame_time_nanos: 0,
            frame_interval_nanos: Self::DEFAULT_FRAME_INTERVAL_NANOS,
            frames: 0,
        }
    }

    pub fn with_frame_interval(mut self, frame_interval_nanos: u64) -> Self {
        self.frame_interval_nanos = frame_interval_nanos.max(1);
        self
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// True when no frame callbacks are pending.
    pub fn is_idle(&self) -> bool {
        !self.runtime.has_frame_callbacks()
    }

    /// Advance one frame interval and drain pending callbacks.
    pub fn advance_frame(&mut self) -> u64 {
        self.frame_time_nanos += self.frame_interval_nanos;
        self.frames += 1;
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
        self.frame_time_nanos
    }

    pub fn advance_frames(&mut self, count: u64) {
        for _ in 0..count {
            self.advance_frame();
        }
    }

    /// Advance whole frames until at least `millis` have passed.
    pub fn advance_by_millis(&mut self, millis: u64) {
        let deadline = self
            .frame_time_nanos
            .saturating_add(millis.saturating_mul(NANOS_PER_MILLI));
        while self.frame_time_nanos < deadline {
            self.advance_frame();
        }
    }

    /// Pump frames until idle or `max_frames` ran. Returns frames pumped.
    pub fn run_until_idle(&mut self, max_frames: u64) -> u64 {
        let mut pumped = 0;
        while !self.is_idle() && pumped < max_frames {
            self.advance_frame();
            pumped += 1;
        }
        pumped
    }

    /// Advance `frames` frames, recording `probe` after each one.
    pub fn sample<T>(&mut self, frames: usize, mut probe: impl FnMut() -> T) -> Vec<T> {
        (0..frames)
            .map(|_| {
                self.advance_frame();
                probe()
            })
            .collect()
    }
}
