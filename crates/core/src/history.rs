use std::collections::VecDeque;

/// Metrics that keep a rolling history for histogram rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cpu,
    Memory,
}

/// Rolling window of percent samples, oldest first.
///
/// The capacity equals the histogram bar width: one column per sample.
#[derive(Debug, Clone)]
pub struct History {
    samples:  VecDeque<f32>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples:  VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest once the window overflows.
    pub fn record(&mut self, value: f32) {
        self.samples.push_back(value);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Current window in insertion order (oldest first).
    pub fn snapshot(&self) -> Vec<f32> {
        self.samples.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_empty() {
        let history = History::new(4);
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 4);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut history = History::new(3);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            history.record(v);
        }
        assert_eq!(history.snapshot(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = History::new(0);
        history.record(50.0);
        assert!(history.is_empty());
    }

    proptest! {
        #[test]
        fn keeps_last_capacity_values(
            capacity in 1usize..64,
            extra in 0usize..64,
        ) {
            let mut history = History::new(capacity);
            let values: Vec<f32> = (0..capacity + extra).map(|i| i as f32).collect();
            for v in &values {
                history.record(*v);
            }
            prop_assert_eq!(history.len(), capacity);
            prop_assert_eq!(history.snapshot(), values[extra..].to_vec());
        }
    }
}
