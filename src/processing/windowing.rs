// src/processing/windowing.rs
//! Fixed-length, half-overlapping analysis windows over a complete series

use crate::config::SegmentationConfig;

/// One analysis window: `[start, start + size)` of the series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub index: usize,
    pub start: usize,
    pub size: usize,
    /// `start + size / 2`
    pub center: usize,
}

impl Window {
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    /// Borrow this window's samples from the series it was planned over
    pub fn slice<'a>(&self, series: &'a [f64]) -> &'a [f64] {
        &series[self.start..self.end()]
    }
}

/// Window layout for a series of known length.
///
/// Windows are one second long (`sample_rate` samples) and start every
/// `sample_rate / 2` samples; a trailing partial window is never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Windower {
    series_len: usize,
    window_size: usize,
    step: usize,
}

impl Windower {
    /// Plan windows over `series_len` samples. `sample_rate` must be non-zero.
    pub fn new(series_len: usize, sample_rate: u32) -> Self {
        Self::for_config(series_len, &SegmentationConfig::with_sample_rate(sample_rate))
    }

    /// Plan windows using the size and hop derived by `config`
    pub fn for_config(series_len: usize, config: &SegmentationConfig) -> Self {
        Self {
            series_len,
            window_size: config.window_size(),
            step: config.window_step(),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of complete windows
    pub fn len(&self) -> usize {
        if self.window_size == 0 || self.series_len < self.window_size {
            0
        } else {
            (self.series_len - self.window_size) / self.step + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Window at position `index`, if it fits in the series
    pub fn get(&self, index: usize) -> Option<Window> {
        (index < self.len()).then(|| {
            let start = index * self.step;
            Window {
                index,
                start,
                size: self.window_size,
                center: start + self.window_size / 2,
            }
        })
    }

    /// Iterate windows in order; restartable
    pub fn iter(&self) -> impl Iterator<Item = Window> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Sample index at the center of every window
    pub fn centers(&self) -> Vec<usize> {
        self.iter().map(|w| w.center).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_layout_at_default_rate() {
        let windower = Windower::new(776, 194);
        assert_eq!(windower.window_size(), 194);
        assert_eq!(windower.step(), 97);
        assert_eq!(windower.len(), 7);

        let starts: Vec<usize> = windower.iter().map(|w| w.start).collect();
        assert_eq!(starts, vec![0, 97, 194, 291, 388, 485, 582]);
        assert_eq!(windower.centers()[3], 388);
        assert!(windower.iter().all(|w| w.end() <= 776));
    }

    #[test]
    fn test_too_short_series_has_no_windows() {
        let windower = Windower::new(193, 194);
        assert!(windower.is_empty());
        assert_eq!(windower.iter().count(), 0);

        assert_eq!(Windower::new(194, 194).len(), 1);
        assert_eq!(Windower::new(0, 194).len(), 0);
    }

    #[test]
    fn test_odd_rate_floors_center_and_step() {
        let windower = Windower::new(20, 5);
        assert_eq!(windower.step(), 2);
        let first = windower.get(0).unwrap();
        assert_eq!(first.center, 2);
        assert_eq!(windower.len(), 8);
        assert!(windower.get(8).is_none());
    }

    #[test]
    fn test_unit_rate_never_stalls() {
        let windower = Windower::new(3, 1);
        assert_eq!(windower.step(), 1);
        assert_eq!(windower.len(), 3);
    }

    #[test]
    fn test_layout_follows_config() {
        let config = SegmentationConfig::with_sample_rate(100);
        let windower = Windower::for_config(1000, &config);
        assert_eq!(windower, Windower::new(1000, 100));
        assert_eq!(windower.window_size(), config.window_size());
        assert_eq!(windower.step(), config.window_step());
        assert_eq!(windower.len(), 19);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let series: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let windower = Windower::new(series.len(), 4);

        let first: Vec<Window> = windower.iter().collect();
        let second: Vec<Window> = windower.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first[1].slice(&series), &[2.0, 3.0, 4.0, 5.0]);
    }
}
