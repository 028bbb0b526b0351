// One-shot countdown timer

/// Counts down from `wait_time` once started and reports the moment it elapses.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    wait_time: f32,
    time_left: f32,
    running: bool,
}

impl Timer {
    pub fn new(wait_time: f32) -> Self {
        Self {
            wait_time: wait_time.max(0.0),
            time_left: 0.0,
            running: false,
        }
    }

    /// Start the countdown, or restart it from the full duration if already running
    pub fn start(&mut self) {
        self.time_left = self.wait_time;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.time_left = 0.0;
    }

    /// Advance the countdown. Returns true on the update where it elapses, and only then.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }

        self.time_left -= dt;
        if self.time_left <= 0.0 {
            self.stop();
            return true;
        }
        false
    }

    /// Change the countdown length; takes effect on the next `start`
    pub fn set_wait_time(&mut self, wait_time: f32) {
        self.wait_time = wait_time.max(0.0);
    }

    pub fn wait_time(&self) -> f32 {
        self.wait_time
    }

    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
