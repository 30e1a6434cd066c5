use std::time::{Duration, Instant};

/// Fixed-rate frame pacing plus a once-per-second FPS counter.
pub struct FrameClock {
    interval: Duration,
    next_frame: Instant,
    frames: u32,
    window_start: Instant,
    fps: u32,
}

impl FrameClock {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        FrameClock {
            interval: Duration::from_secs(1) / target_fps.max(1),
            next_frame: now,
            frames: 0,
            window_start: now,
            fps: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Returns true when a frame is due and schedules the next one. Overrun
    /// frames are not made up; the schedule restarts from `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
        true
    }

    /// Counts a presented frame. Returns the new FPS figure once per second.
    pub fn frame_presented(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = now;
            return Some(self.fps);
        }
        None
    }
}
