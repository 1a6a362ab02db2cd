use std::time::{Duration, Instant};

/// Delay between the last search keystroke and the query taking effect.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

// ---------------------------------------------------------------------------
// Cancelable single-shot timer carrying a pending value
// ---------------------------------------------------------------------------

/// Holds at most one pending value. Arming again replaces the value and
/// restarts the delay; `poll` hands the value out once the delay has passed.
///
/// Time is passed in by the caller so the frame loop and tests share one path.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn arm(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending value fires, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, due)) if now >= *due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_after_delay() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(SEARCH_DEBOUNCE);
        d.arm("rust", t0);
        assert_eq!(d.poll(t0 + ms(299)), None);
        assert_eq!(d.remaining(t0 + ms(100)), Some(ms(200)));
        assert_eq!(d.poll(t0 + ms(300)), Some("rust"));
        assert_eq!(d.poll(t0 + ms(900)), None);
        assert!(!d.is_armed());
    }

    #[test]
    fn rearming_restarts_and_replaces() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(SEARCH_DEBOUNCE);
        d.arm("r", t0);
        d.arm("ru", t0 + ms(200));
        assert_eq!(d.poll(t0 + ms(350)), None);
        assert_eq!(d.poll(t0 + ms(500)), Some("ru"));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(SEARCH_DEBOUNCE);
        d.arm(1, t0);
        d.cancel();
        assert_eq!(d.poll(t0 + ms(1000)), None);
        assert_eq!(d.remaining(t0), None);
    }
}
