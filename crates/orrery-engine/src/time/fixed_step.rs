/// Nominal logical step per frame (≈ one 60 Hz refresh, in seconds).
pub const DEFAULT_STEP: f32 = 0.016;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Accumulated logical time after this tick.
    pub time: f32,

    /// Step applied by this tick.
    pub step: f32,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Source of per-frame time values.
///
/// The runtime asks for exactly one tick per presented frame. Implementations
/// decide how time advances; the scene only ever sees the resulting value.
pub trait TickSource {
    fn tick(&mut self) -> FrameTime;
}

/// Fixed-step accumulator.
///
/// Each tick adds the same `step` regardless of how long the previous frame
/// took, so perceived animation speed is tied to frame count, not to
/// refresh-rate or scheduling jitter.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    time: f32,
    step: f32,
    frame_index: u64,
}

impl FixedStepClock {
    /// Creates a clock starting at `time = 0`.
    ///
    /// Non-finite or non-positive steps fall back to [`DEFAULT_STEP`] so time
    /// stays strictly increasing.
    pub fn new(step: f32) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            log::warn!("invalid clock step {step}; using {DEFAULT_STEP}");
            DEFAULT_STEP
        };

        Self {
            time: 0.0,
            step,
            frame_index: 0,
        }
    }

    /// Current accumulated time without advancing.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl TickSource for FixedStepClock {
    fn tick(&mut self) -> FrameTime {
        self.time += self.step;

        let ft = FrameTime {
            time: self.time,
            step: self.step,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_advances_by_one_step() {
        let mut clock = FixedStepClock::default();
        let ft = clock.tick();
        assert_eq!(ft.time, DEFAULT_STEP);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn time_is_strictly_increasing() {
        let mut clock = FixedStepClock::new(0.5);
        let mut last = clock.time();
        for i in 0..10u64 {
            let ft = clock.tick();
            assert!(ft.time > last);
            assert_eq!(ft.frame_index, i);
            last = ft.time;
        }
        assert_eq!(last, 5.0);
    }

    #[test]
    fn invalid_step_falls_back_to_default() {
        assert_eq!(FixedStepClock::new(0.0).step(), DEFAULT_STEP);
        assert_eq!(FixedStepClock::new(f32::NAN).step(), DEFAULT_STEP);
    }
}
