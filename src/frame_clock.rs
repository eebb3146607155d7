//! Wall-clock pacing for the frame loop.

use std::time::{Duration, Instant};

/// Measures frame time in whole milliseconds. Only the milliseconds handed
/// out are taken off the clock, so sub-millisecond leftovers roll into the
/// next frame and the game clock keeps pace with the wall clock.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// When the current frame's input window closes.
    pub fn deadline(&self, budget: Duration) -> Instant {
        self.last + budget
    }

    /// Elapsed whole milliseconds up to `now`.
    pub fn tick(&mut self, now: Instant) -> u64 {
        let dt_ms = now.saturating_duration_since(self.last).as_millis() as u64;
        self.last += Duration::from_millis(dt_ms);
        dt_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_milliseconds_are_reported() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        assert_eq!(clock.tick(start + Duration::from_micros(16_400)), 16);
    }

    #[test]
    fn test_sub_millisecond_remainder_carries_over() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        assert_eq!(clock.tick(start + Duration::from_micros(16_600)), 16);
        // 0.6 ms left over from the first frame.
        assert_eq!(clock.tick(start + Duration::from_micros(33_200)), 17);
    }

    #[test]
    fn test_no_time_lost_over_many_frames() {
        // 300 frames of 16.7 ms: 16 ms poll window plus draw work.
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let frame = Duration::from_micros(16_700);

        let mut now = start;
        let mut fed_ms = 0;
        for _ in 0..300 {
            now += frame;
            fed_ms += clock.tick(now);
        }

        let wall_ms = now.duration_since(start).as_millis() as u64;
        assert_eq!(wall_ms, 5_010);
        assert_eq!(fed_ms, wall_ms);
    }

    #[test]
    fn test_deadline_follows_consumed_time() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let budget = Duration::from_millis(16);
        assert_eq!(clock.deadline(budget), start + budget);

        clock.tick(start + Duration::from_micros(20_500));
        assert_eq!(clock.deadline(budget), start + Duration::from_millis(36));
    }

    #[test]
    fn test_clock_going_backwards_reports_zero() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start + Duration::from_millis(5));
        assert_eq!(clock.tick(start), 0);
    }
}
