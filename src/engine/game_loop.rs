/// Fixed timestep driver
///
/// Gameplay runs at a constant tick rate no matter how fast frames arrive.
/// Frame durations are fed in from the outside so the accumulator can be
/// driven by the window event loop or by tests alike.
use std::time::{Duration, Instant};

/// Target physics/update rate
const TICKS_PER_SECOND: u64 = 60;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND);

/// Maximum number of physics steps per frame to prevent spiral of death
const MAX_PHYSICS_STEPS: u32 = 5;

/// Accumulates frame time and hands out fixed ticks
#[derive(Debug)]
pub struct GameLoop {
    /// Time not yet consumed by a fixed tick
    accumulator: Duration,

    /// Timestamp of the last call to `begin_frame`
    last_frame_time: Instant,

    /// Whether ticking is suspended
    paused: bool,

    /// Total ticks handed out
    tick_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            tick_count: 0,
        }
    }

    /// Begin a new frame using the wall clock, returns the number of fixed ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Feed an explicit frame duration, returns the number of fixed ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        // Drop whatever the cap left behind instead of replaying it next frame
        if ticks == MAX_PHYSICS_STEPS {
            self.accumulator = self.accumulator.min(FIXED_TIMESTEP_DURATION);
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Seconds per fixed tick, the same span the accumulator consumes
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP_DURATION.as_secs_f32()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
