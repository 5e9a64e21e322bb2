//! Event feed - the rolling avalanche-size history behind the histogram.

use std::collections::VecDeque;

const PREALLOCATED_ENTRIES: usize = 1024;

pub struct EventFeed {
    values: VecDeque<u32>,
    max_length: usize,
    max_seen: u32,
    max_seen_floor: u32,
}

impl EventFeed {
    pub fn new(max_length: usize, max_seen_floor: u32) -> Self {
        Self {
            values: VecDeque::with_capacity(max_length.min(PREALLOCATED_ENTRIES)),
            max_length,
            max_seen: max_seen_floor,
            max_seen_floor,
        }
    }

    /// Append one drop's event count, evicting the oldest past `max_length`.
    pub fn record(&mut self, events: u32) {
        self.values.push_back(events);
        while self.values.len() > self.max_length {
            self.values.pop_front();
        }
        self.max_seen = self.max_seen.max(events);
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.max_seen = self.max_seen_floor;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Largest count seen since the last clear, never below the floor.
    pub fn max_seen(&self) -> u32 {
        self.max_seen
    }

    pub fn latest(&self) -> Option<u32> {
        self.values.back().copied()
    }

    /// Oldest first.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.values().collect()
    }

    /// Bar heights for a histogram `height` units tall, scaled by `max_seen`.
    pub fn scaled(&self, height: f32) -> Vec<f32> {
        let max = self.max_seen.max(1) as f32;
        self.values().map(|v| v as f32 * height / max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_at_floor() {
        let feed = EventFeed::new(260, 25);
        assert!(feed.is_empty());
        assert_eq!(feed.max_seen(), 25);
        assert_eq!(feed.latest(), None);
    }

    #[test]
    fn keeps_only_the_most_recent_entries() {
        let mut feed = EventFeed::new(260, 25);
        for i in 0..300u32 {
            feed.record(i % 7);
        }
        assert_eq!(feed.len(), 260);
        let expected: Vec<u32> = (40..300u32).map(|i| i % 7).collect();
        assert_eq!(feed.to_vec(), expected);
    }

    #[test]
    fn max_seen_tracks_peaks_above_floor() {
        let mut feed = EventFeed::new(4, 25);
        feed.record(3);
        assert_eq!(feed.max_seen(), 25);
        feed.record(40);
        feed.record(1);
        assert_eq!(feed.max_seen(), 40);

        // Evicting the peak does not lower the running maximum.
        for _ in 0..4 {
            feed.record(0);
        }
        assert_eq!(feed.max_seen(), 40);
    }

    #[test]
    fn huge_bound_does_not_preallocate() {
        let mut feed = EventFeed::new(usize::MAX, 25);
        feed.record(3);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.max_length(), usize::MAX);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut feed = EventFeed::new(8, 25);
        feed.record(99);
        feed.clear();
        assert!(feed.is_empty());
        assert_eq!(feed.max_seen(), 25);
        feed.clear();
        assert!(feed.is_empty());
        assert_eq!(feed.max_seen(), 25);
    }

    #[test]
    fn scaled_uses_max_seen() {
        let mut feed = EventFeed::new(8, 25);
        feed.record(0);
        feed.record(5);
        feed.record(50);
        assert_eq!(feed.scaled(100.0), vec![0.0, 10.0, 100.0]);
    }
}
