use tracing::debug;

/// Number of equal-width bins for a sample of `n` values (Sturges' rule,
/// `floor(1 + 3.3 * log10(n))`), never less than one.
pub fn bin_count_for(n: usize) -> usize {
    let k = (1.0 + 3.3 * (n as f64).log10()) as usize;
    k.max(1)
}

/// Right edges of `k` equal-width bins covering `[begin, end]`.
pub fn bin_boundaries(begin: f64, end: f64, k: usize) -> Vec<f64> {
    (0..k)
        .map(|i| (end - begin) * (i + 1) as f64 / k as f64 + begin)
        .collect()
}

/// Counts how many values of an ascending `sorted` sample fall into each bin.
///
/// A value equal to an edge belongs to the bin that edge closes. Values past
/// the last edge are counted in the last bin, so the counts always add up to
/// `sorted.len()` as long as there is at least one boundary.
pub fn bin_counts(sorted: &[f64], boundaries: &[f64]) -> Vec<usize> {
    let k = boundaries.len();
    let mut counts = vec![0; k];
    if k == 0 {
        return counts;
    }

    let mut j = 0;
    for &value in sorted {
        while j < k && value > boundaries[j] {
            j += 1;
        }
        counts[j.min(k - 1)] += 1;
    }
    debug!(?counts, "binned sample");
    counts
}

/// Pearson's statistic `sum((observed - expected)^2 / expected)` against the
/// same `expected` count for every bin.
pub fn chi_square_statistic(counts: &[usize], expected: f64) -> f64 {
    counts
        .iter()
        .map(|&observed| (observed as f64 - expected).powi(2) / expected)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bin_count_for() {
        assert_eq!(bin_count_for(100), 7);
        assert_eq!(bin_count_for(10), 4);
        assert_eq!(bin_count_for(1000), 10);
        assert_eq!(bin_count_for(1), 1);
        assert_eq!(bin_count_for(0), 1);
    }

    #[test]
    fn test_bin_boundaries_for_seven_bins() {
        let boundaries = bin_boundaries(0.0, 1.0, 7);
        assert_eq!(boundaries.len(), 7);
        for (i, edge) in boundaries.iter().enumerate() {
            assert!((edge - (i + 1) as f64 / 7.0).abs() < 1e-15);
        }
        assert_eq!(*boundaries.last().unwrap(), 1.0);
        assert!(boundaries.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_bin_boundaries_shifted_interval() {
        let boundaries = bin_boundaries(2.0, 4.0, 4);
        assert_eq!(boundaries, vec![2.5, 3.0, 3.5, 4.0]);
    }

    #[test]
    fn test_bin_counts_edges_go_to_lower_bin() {
        let boundaries = bin_boundaries(0.0, 1.0, 4);
        let sample = [0.0, 0.25, 0.26, 0.5, 0.75, 1.0];
        assert_eq!(bin_counts(&sample, &boundaries), vec![2, 2, 1, 1]);
    }

    #[test]
    fn test_bin_counts_overflow_lands_in_last_bin() {
        let boundaries = bin_boundaries(0.0, 1.0, 3);
        let sample = [0.1, 0.9, 1.0, 1.0 + 1e-12, 2.0];
        assert_eq!(bin_counts(&sample, &boundaries), vec![1, 0, 4]);
    }

    #[test]
    fn test_bin_counts_without_boundaries() {
        assert!(bin_counts(&[0.5], &[]).is_empty());
    }

    #[test]
    fn test_bin_counts_conserve_sample_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for n in [1, 2, 7, 100, 1000] {
            let mut sample: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
            sample.push(0.0);
            sample.push(1.0);
            sample.sort_by(f64::total_cmp);
            let boundaries = bin_boundaries(0.0, 1.0, bin_count_for(sample.len()));
            let counts = bin_counts(&sample, &boundaries);
            assert_eq!(counts.iter().sum::<usize>(), sample.len());
        }
    }

    #[test]
    fn test_statistic_zero_for_exact_expectation() {
        assert_eq!(chi_square_statistic(&[10; 7], 10.0), 0.0);
    }

    #[test]
    fn test_statistic_single_bin() {
        // 70 values in one of seven bins: 6 * 10 + 60^2 / 10
        let mut counts = vec![0; 7];
        counts[3] = 70;
        assert!((chi_square_statistic(&counts, 10.0) - 420.0).abs() < 1e-9);
    }
}
