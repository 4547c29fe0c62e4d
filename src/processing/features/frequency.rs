//! Dominant stride frequency of a magnitude window

use crate::config::constants::spectral::{GAIT_BAND_HIGH_HZ, GAIT_BAND_LOW_HZ, HANN_WINDOW_ALPHA};
use crate::processing::features::time_domain::mean;
use crate::processing::windowing::Windower;
use rayon::prelude::*;
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::f64::consts::PI;
use std::sync::Arc;

/// Finds the strongest spectral bin inside the gait band.
///
/// Bins sit at `k * sample_rate / window_size` for `k = 0..=window_size / 2`.
/// The search band is closed on both ends and ties go to the lower frequency.
pub struct DominantFrequencyAnalyzer {
    sample_rate: f64,
    window_size: usize,
    band: (f64, f64),
    window_function: Vec<f64>,
    fft: Arc<dyn Fft<f64>>,
}

impl DominantFrequencyAnalyzer {
    pub fn new(sample_rate: u32, window_size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(window_size);

        Self {
            sample_rate: sample_rate as f64,
            window_size,
            band: (GAIT_BAND_LOW_HZ, GAIT_BAND_HIGH_HZ),
            window_function: Self::create_hann_window(window_size),
            fft,
        }
    }

    /// Replace the default [0.5, 5.0] Hz search band
    pub fn with_band(mut self, low_hz: f64, high_hz: f64) -> Self {
        self.band = (low_hz, high_hz);
        self
    }

    pub fn band(&self) -> (f64, f64) {
        self.band
    }

    /// Frequency of bin `k`, in Hz
    pub fn bin_frequency(&self, k: usize) -> f64 {
        k as f64 * self.sample_rate / self.window_size as f64
    }

    /// One-sided magnitude spectrum of the de-meaned, Hann-tapered window
    pub fn magnitude_spectrum(&self, window: &[f64]) -> Vec<f64> {
        debug_assert_eq!(window.len(), self.window_size);

        let dc = mean(window);
        let mut buffer: Vec<Complex<f64>> = window
            .iter()
            .zip(self.window_function.iter())
            .map(|(&x, &w)| Complex::new((x - dc) * w, 0.0))
            .collect();
        buffer.resize(self.window_size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer[..self.window_size / 2 + 1]
            .iter()
            .map(|c| c.norm())
            .collect()
    }

    /// Dominant in-band frequency; 0.0 when no bin falls in the band or the band is flat zero
    pub fn dominant_frequency(&self, window: &[f64]) -> f64 {
        if self.window_size == 0 {
            return 0.0;
        }

        let spectrum = self.magnitude_spectrum(window);
        self.strongest_bin(&spectrum)
            .map(|k| self.bin_frequency(k))
            .unwrap_or(0.0)
    }

    /// Index of the largest in-band bin, scanning upward so the first maximum wins.
    /// `None` when no bin is in band or every in-band bin is zero.
    fn strongest_bin(&self, spectrum: &[f64]) -> Option<usize> {
        let (low, high) = self.band;

        let mut best: Option<(usize, f64)> = None;
        for (k, &magnitude) in spectrum.iter().enumerate() {
            let freq = self.bin_frequency(k);
            if freq < low || freq > high {
                continue;
            }
            match best {
                Some((_, best_magnitude)) if magnitude <= best_magnitude => {}
                _ => best = Some((k, magnitude)),
            }
        }

        best.filter(|&(_, magnitude)| magnitude > 0.0).map(|(k, _)| k)
    }

    /// Dominant frequency for each window; windows flagged not moving get 0.0 without an FFT
    pub fn analyze(&self, series: &[f64], windower: &Windower, is_moving: &[bool]) -> Vec<f64> {
        (0..windower.len())
            .into_par_iter()
            .map(|i| match windower.get(i) {
                Some(window) if is_moving.get(i).copied().unwrap_or(false) => {
                    self.dominant_frequency(window.slice(series))
                }
                _ => 0.0,
            })
            .collect()
    }

    /// Symmetric Hann taper, `0.5 - 0.5 cos(2 pi n / (M - 1))`
    fn create_hann_window(size: usize) -> Vec<f64> {
        if size == 1 {
            return vec![1.0];
        }
        (0..size)
            .map(|i| HANN_WINDOW_ALPHA - HANN_WINDOW_ALPHA * (2.0 * PI * i as f64 / (size - 1) as f64).cos())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, amplitude: f64, sample_rate: u32, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| 1.0 + amplitude * (2.0 * PI * freq * i as f64 / sample_rate as f64).sin())
            .collect()
    }

    #[test]
    fn test_hann_window_shape() {
        let hann = DominantFrequencyAnalyzer::create_hann_window(5);
        assert_eq!(hann.len(), 5);
        assert!(hann[0].abs() < 1e-12);
        assert!((hann[2] - 1.0).abs() < 1e-12);
        assert!(hann[4].abs() < 1e-12);
        assert_eq!(DominantFrequencyAnalyzer::create_hann_window(1), vec![1.0]);
    }

    #[test]
    fn test_bin_layout() {
        let analyzer = DominantFrequencyAnalyzer::new(194, 194);
        assert_eq!(analyzer.bin_frequency(0), 0.0);
        assert_eq!(analyzer.bin_frequency(3), 3.0);

        let spectrum = analyzer.magnitude_spectrum(&vec![1.0; 194]);
        assert_eq!(spectrum.len(), 98);
        assert!(spectrum.iter().all(|&m| m.abs() < 1e-9));
    }

    #[test]
    fn test_detects_stride_frequency() {
        let analyzer = DominantFrequencyAnalyzer::new(194, 194);
        assert_eq!(analyzer.dominant_frequency(&sine(1.0, 0.5, 194, 194)), 1.0);
        assert_eq!(analyzer.dominant_frequency(&sine(2.0, 0.5, 194, 194)), 2.0);
        assert_eq!(analyzer.dominant_frequency(&sine(4.0, 0.5, 194, 194)), 4.0);
    }

    #[test]
    fn test_out_of_band_energy_ignored() {
        let analyzer = DominantFrequencyAnalyzer::new(194, 194);
        let mut window = sine(20.0, 2.0, 194, 194);
        for (i, v) in window.iter_mut().enumerate() {
            *v += 0.1 * (2.0 * PI * 3.0 * i as f64 / 194.0).sin();
        }
        assert_eq!(analyzer.dominant_frequency(&window), 3.0);
    }

    #[test]
    fn test_no_bin_in_band() {
        // 4 samples at 4 Hz: bins at 0, 1, 2 Hz; a 3-4 Hz band contains none
        let analyzer = DominantFrequencyAnalyzer::new(4, 4).with_band(3.0, 4.0);
        assert_eq!(analyzer.dominant_frequency(&[0.0, 1.0, 0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_flat_window_has_no_peak() {
        let analyzer = DominantFrequencyAnalyzer::new(194, 194);
        assert_eq!(analyzer.dominant_frequency(&vec![1.0; 194]), 0.0);
    }

    #[test]
    fn test_tie_goes_to_lowest_frequency() {
        let analyzer = DominantFrequencyAnalyzer::new(10, 10);
        // bins: 0, 1, 2, 3, 4, 5 Hz; band [0.5, 5.0] covers bins 1..=5
        assert_eq!(analyzer.strongest_bin(&[9.0, 1.0, 4.0, 4.0, 2.0, 4.0]), Some(2));
        assert_eq!(analyzer.strongest_bin(&[9.0, 0.0, 0.0, 0.0, 0.0, 0.0]), None);
        assert_eq!(analyzer.strongest_bin(&[0.0, 0.0, 0.0, 0.0, 0.0, 7.0]), Some(5));
    }

    #[test]
    fn test_analyze_skips_still_windows() {
        let series = sine(2.0, 0.5, 194, 388);
        let windower = Windower::new(series.len(), 194);
        let analyzer = DominantFrequencyAnalyzer::new(194, 194);

        let freqs = analyzer.analyze(&series, &windower, &[true, false, true]);
        assert_eq!(freqs, vec![2.0, 0.0, 2.0]);
    }
}
