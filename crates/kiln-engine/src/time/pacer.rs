use std::time::{Duration, Instant};

/// Sleeps out the remainder of a fixed frame interval.
///
/// The sleep is the target interval minus the time the frame actually
/// took; a frame that ran long gets no sleep at all and the next interval
/// starts immediately, so a slow frame never builds up debt.
#[derive(Debug)]
pub struct FramePacer {
    target: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        assert!(target_fps > 0, "target frame rate must be positive");
        Self {
            target: Duration::from_secs(1) / target_fps,
            frame_start: Instant::now(),
        }
    }

    /// Blocks until the current frame interval is over, then starts the
    /// next one.
    pub fn pace(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.target
            .checked_sub(now.saturating_duration_since(self.frame_start))
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_frame_has_budget_left() {
        let pacer = FramePacer::new(60);
        let remaining = pacer.remaining(pacer.frame_start);
        assert_eq!(remaining, Duration::from_secs(1) / 60);
    }

    #[test]
    fn late_frame_does_not_sleep() {
        let pacer = FramePacer::new(60);
        let long_after = pacer.frame_start + Duration::from_millis(100);
        assert_eq!(pacer.remaining(long_after), Duration::ZERO);
    }

    #[test]
    fn partial_frame_sleeps_the_difference() {
        let pacer = FramePacer::new(100); // 10ms interval
        let mid_frame = pacer.frame_start + Duration::from_millis(4);
        assert_eq!(pacer.remaining(mid_frame), Duration::from_millis(6));
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn zero_fps_panics() {
        FramePacer::new(0);
    }
}
