use std::time::{Duration, Instant};

/// Pending tick: fires once `due` has passed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickHandle {
    due: Instant,
}

/// Drives `GameSession::tick` from a polling loop.
///
/// Holds at most one armed handle, so at most one tick is ever in flight.
/// The driver re-arms after every tick with the session's current interval
/// and cancels on pause, game over and restart.
#[derive(Debug, Default)]
pub struct TickScheduler {
    handle: Option<TickHandle>,
}

impl TickScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the next tick `interval` after `now`, replacing any armed one.
    pub fn schedule(&mut self, now: Instant, interval: Duration) {
        self.handle = Some(TickHandle {
            due: now + interval,
        });
    }

    /// Drops the armed tick, if any.
    pub fn cancel(&mut self) {
        self.handle = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Consumes the armed tick if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.handle {
            Some(handle) if now >= handle.due => {
                self.handle = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the armed tick, or `None` when nothing is armed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.handle
            .map(|handle| handle.due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickScheduler;

    #[test]
    fn fires_once_per_schedule() {
        let mut scheduler = TickScheduler::new();
        let start = Instant::now();
        scheduler.schedule(start, Duration::from_millis(150));

        assert!(!scheduler.take_due(start + Duration::from_millis(149)));
        assert!(scheduler.take_due(start + Duration::from_millis(150)));
        assert!(!scheduler.take_due(start + Duration::from_millis(500)));
        assert!(!scheduler.is_armed());
    }

    #[test]
    fn cancel_drops_the_pending_tick() {
        let mut scheduler = TickScheduler::new();
        let start = Instant::now();
        scheduler.schedule(start, Duration::from_millis(10));

        scheduler.cancel();

        assert!(!scheduler.take_due(start + Duration::from_secs(1)));
        assert_eq!(scheduler.time_until_due(start), None);
    }

    #[test]
    fn rescheduling_uses_the_new_interval() {
        let mut scheduler = TickScheduler::new();
        let start = Instant::now();
        scheduler.schedule(start, Duration::from_millis(150));
        scheduler.schedule(start, Duration::from_millis(145));

        assert_eq!(
            scheduler.time_until_due(start),
            Some(Duration::from_millis(145))
        );
        assert!(scheduler.take_due(start + Duration::from_millis(145)));
    }
}
