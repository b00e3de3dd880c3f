use std::collections::VecDeque;

use serde::Serialize;

use crate::domain::TimeFrame;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub timestamp_ms: i64,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }
}

/// Rolling window of points sampled for one time-frame.
/// Oldest point at the front, newest at the back.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    time_frame: TimeFrame,
    points: VecDeque<SeriesPoint>,
}

impl Series {
    pub fn new(time_frame: TimeFrame) -> Self {
        Self {
            time_frame,
            points: VecDeque::with_capacity(time_frame.point_count()),
        }
    }

    pub fn time_frame(&self) -> TimeFrame {
        self.time_frame
    }

    /// Maximum number of points this series keeps.
    pub fn capacity(&self) -> usize {
        self.time_frame.point_count()
    }

    /// Append at the back, dropping from the front past the window.
    /// Returns the number of evicted points.
    pub fn push(&mut self, point: SeriesPoint) -> usize {
        self.points.push_back(point);
        let mut evicted = 0;
        while self.points.len() > self.capacity() {
            self.points.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.front()
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.back()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.last().map(|p| p.value)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    /// (min, max) of the values, for axis scaling.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.value, p.value)),
            Some((lo, hi)) => Some((lo.min(p.value), hi.max(p.value))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_evicts_oldest_past_window() {
        let mut s = Series::new(TimeFrame::S10);
        for i in 0..10 {
            assert_eq!(s.push(SeriesPoint::new(i, i as f64)), 0);
        }
        assert_eq!(s.len(), 10);

        assert_eq!(s.push(SeriesPoint::new(10, 10.0)), 1);
        assert_eq!(s.len(), 10);
        assert_eq!(s.first().map(|p| p.timestamp_ms), Some(1));
        assert_eq!(s.last_value(), Some(10.0));
    }

    #[test]
    fn never_exceeds_point_count() {
        let mut s = Series::new(TimeFrame::S30);
        for i in 0..500 {
            s.push(SeriesPoint::new(i, 0.0));
            assert!(s.len() <= 30);
        }
    }

    #[test]
    fn empty_series_has_no_range() {
        let s = Series::new(TimeFrame::M1);
        assert!(s.is_empty());
        assert_eq!(s.value_range(), None);
        assert_eq!(s.last_value(), None);
    }

    #[test]
    fn value_range_tracks_extremes() {
        let mut s = Series::new(TimeFrame::M1);
        for (i, v) in [3.0, -1.0, 7.5, 2.0].into_iter().enumerate() {
            s.push(SeriesPoint::new(i as i64, v));
        }
        assert_eq!(s.value_range(), Some((-1.0, 7.5)));
    }
}
