use std::time::{Duration, Instant};

/// Decides when the next frame is due, standing in for a display's
/// "call me before the next repaint" primitive.
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(frame_rate: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / frame_rate.max(1),
            next_frame: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long to wait (for events) before the next frame is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_frame.saturating_duration_since(now)
    }

    /// Books the frame starting at `now`. A late frame pushes the schedule
    /// forward instead of queuing catch-up frames.
    pub fn begin_frame(&mut self, now: Instant) {
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
    }
}

/// Frames rendered during the last full second.
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0,
        }
    }

    pub fn tick(&mut self, now: Instant) -> u32 {
        self.frames += 1;
        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = now;
        }
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_due_immediately() {
        let now = Instant::now();
        let pacer = FramePacer::new(60, now);
        assert_eq!(pacer.remaining(now), Duration::ZERO);
    }

    #[test]
    fn test_frames_are_spaced_by_interval() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);
        assert_eq!(pacer.interval(), Duration::from_millis(20));

        pacer.begin_frame(start);
        assert_eq!(pacer.remaining(start), Duration::from_millis(20));
        assert_eq!(
            pacer.remaining(start + Duration::from_millis(5)),
            Duration::from_millis(15)
        );
    }

    #[test]
    fn test_late_frame_rebases_schedule() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);
        pacer.begin_frame(start);

        let late = start + Duration::from_millis(200);
        pacer.begin_frame(late);
        assert_eq!(pacer.remaining(late), Duration::from_millis(20));
    }

    #[test]
    fn test_fps_counter_reports_per_second() {
        let start = Instant::now();
        let mut fps = FpsCounter::new(start);
        for i in 1..30 {
            assert_eq!(fps.tick(start + Duration::from_millis(i * 30)), 0);
        }
        assert_eq!(fps.tick(start + Duration::from_millis(1_000)), 30);
    }
}
