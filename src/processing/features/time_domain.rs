//! Time domain statistics for magnitude windows

use crate::processing::windowing::Windower;
use rayon::prelude::*;

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by n); 0.0 for an empty slice
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    values.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Raw (untapered) variance of every window in the plan, in window order
pub fn window_variances(series: &[f64], windower: &Windower) -> Vec<f64> {
    (0..windower.len())
        .into_par_iter()
        .filter_map(|i| windower.get(i))
        .map(|w| population_variance(w.slice(series)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(population_variance(&values), 4.0);
        assert_eq!(population_std_dev(&values), 2.0);
    }

    #[test]
    fn test_empty_and_constant() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(population_variance(&[]), 0.0);
        assert_eq!(population_variance(&[1.0; 194]), 0.0);
    }

    #[test]
    fn test_window_variances_follow_window_order() {
        let mut series = vec![1.0; 8];
        series.extend([0.0, 2.0, 0.0, 2.0, 0.0, 2.0, 0.0, 2.0]);
        let windower = Windower::new(series.len(), 8);

        let variances = window_variances(&series, &windower);
        assert_eq!(variances.len(), 3);
        assert_eq!(variances[0], 0.0);
        assert!(variances[1] > 0.0);
        assert_eq!(variances[2], 1.0);
    }
}
