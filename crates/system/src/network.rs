use std::collections::HashMap;
use std::time::Instant;

/// Cumulative byte counters of one interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

/// Transfer rate in bytes per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NetRate {
    pub tx: f64,
    pub rx: f64,
}

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    counters: NetCounters,
    taken_at: Instant,
}

/// Derives per-interface rates from cumulative counters.
///
/// Exactly one snapshot is kept per interface: the most recent one.
#[derive(Debug, Default)]
pub struct RateTracker {
    last: HashMap<String, Snapshot>,
}

impl RateTracker {
    /// Record `counters` for `interface` and return the rate since the previous call.
    ///
    /// The first call for an interface, a non-positive time delta and a counter
    /// that went backwards (interface reset) all yield 0.  The stored snapshot
    /// is overwritten in every case.
    pub fn update(&mut self, interface: &str, counters: NetCounters, now: Instant) -> NetRate {
        let current = Snapshot { counters, taken_at: now };
        let Some(previous) = self.last.insert(interface.to_string(), current) else {
            return NetRate::default();
        };

        let elapsed = match now.checked_duration_since(previous.taken_at) {
            Some(d) if !d.is_zero() => d.as_secs_f64(),
            _ => return NetRate::default(),
        };

        let sent = counters.bytes_sent.saturating_sub(previous.counters.bytes_sent);
        let recv = counters.bytes_recv.saturating_sub(previous.counters.bytes_recv);

        NetRate {
            tx: sent as f64 / elapsed,
            rx: recv as f64 / elapsed,
        }
    }

    /// Number of interfaces with a stored snapshot.
    pub fn tracked(&self) -> usize {
        self.last.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn counters(sent: u64, recv: u64) -> NetCounters {
        NetCounters { bytes_sent: sent, bytes_recv: recv }
    }

    #[test]
    fn first_call_is_zero() {
        let mut tracker = RateTracker::default();
        let rate = tracker.update("eth0", counters(500, 900), Instant::now());
        assert_eq!(rate, NetRate::default());
        assert_eq!(tracker.tracked(), 1);
    }

    #[test]
    fn rate_is_delta_over_elapsed() {
        let mut tracker = RateTracker::default();
        let t0 = Instant::now();
        tracker.update("eth0", counters(1_000, 2_000), t0);
        let rate = tracker.update("eth0", counters(1_750, 5_000), t0 + Duration::from_millis(500));
        assert!((rate.tx - 1_500.0).abs() < 1e-6);
        assert!((rate.rx - 6_000.0).abs() < 1e-6);
    }

    #[test]
    fn zero_elapsed_is_zero_but_snapshot_moves() {
        let mut tracker = RateTracker::default();
        let t0 = Instant::now();
        tracker.update("eth0", counters(0, 0), t0);
        assert_eq!(tracker.update("eth0", counters(4_096, 4_096), t0), NetRate::default());

        // The zero-delta reading became the new reference.
        let rate = tracker.update("eth0", counters(5_120, 4_096), t0 + Duration::from_secs(1));
        assert!((rate.tx - 1_024.0).abs() < 1e-6);
        assert_eq!(rate.rx, 0.0);
    }

    #[test]
    fn counter_reset_is_zero() {
        let mut tracker = RateTracker::default();
        let t0 = Instant::now();
        tracker.update("eth0", counters(9_000, 9_000), t0);
        let rate = tracker.update("eth0", counters(10, 10), t0 + Duration::from_secs(1));
        assert_eq!(rate, NetRate::default());
    }

    #[test]
    fn interfaces_are_independent() {
        let mut tracker = RateTracker::default();
        let t0 = Instant::now();
        tracker.update("eth0", counters(0, 0), t0);
        let wlan = tracker.update("wlan0", counters(1_000, 1_000), t0 + Duration::from_secs(1));
        assert_eq!(wlan, NetRate::default());
        assert_eq!(tracker.tracked(), 2);
    }
}
