use std::time::{Duration, Instant};

/// Holds the loop to a fixed frame rate.
///
/// Each `wait` sleeps for whatever is left of the current frame interval,
/// so time spent updating and drawing counts toward the frame.
pub struct FramePacer {
    frame_interval: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        FramePacer {
            frame_interval: Duration::from_secs(1) / target_fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Time left in the current frame as of `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame_interval
            .saturating_sub(now.saturating_duration_since(self.frame_start))
    }

    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}
