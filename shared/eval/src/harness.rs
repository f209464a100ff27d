use chisq_core::{
    bin_boundaries, bin_count_for, bin_counts, chi_square_quantile, chi_square_statistic,
    Lcg32, QuantileError,
};
use std::fmt::Display;
use tracing::{debug, info};

use crate::config::EvalConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Fits,
    DoesNotFit,
}

/// Outcome of a chi-square goodness-of-fit test against the uniform
/// distribution on `[begin, end]`.
#[derive(Debug, Clone)]
pub struct GoodnessOfFit {
    /// Sample in ascending order.
    pub sample: Vec<f64>,
    pub degrees_of_freedom: usize,
    /// Expected share of the sample in each bin.
    pub probability: f64,
    pub boundaries: Vec<f64>,
    pub counts: Vec<usize>,
    pub alpha: f64,
    pub statistical_chi: f64,
    /// Zero when the quantile parameters were rejected, see `quantile_error`.
    pub critical_chi: f64,
    pub quantile_error: Option<QuantileError>,
    pub verdict: Verdict,
}

impl GoodnessOfFit {
    /// Draws `config.sample_size` values from `rng` and evaluates them.
    pub fn run(rng: &mut Lcg32, config: &EvalConfig) -> Self {
        info!(
            sample_size = config.sample_size,
            seed = rng.state(),
            "drawing sample"
        );
        Self::from_sample(rng.sample(config.sample_size), config)
    }

    /// Evaluates an arbitrary sample. Only `alpha`, `begin` and `end` are read
    /// from `config`; the sample size is the length of `sample`.
    pub fn from_sample(mut sample: Vec<f64>, config: &EvalConfig) -> Self {
        sample.sort_by(f64::total_cmp);

        let n = sample.len();
        let k = bin_count_for(n);
        let degrees_of_freedom = k - 1;
        let probability = 1.0 / k as f64;
        debug!(n, k, degrees_of_freedom, "chose bin count");

        let boundaries = bin_boundaries(config.begin, config.end, k);
        debug!(?boundaries, "bin boundaries");
        let counts = bin_counts(&sample, &boundaries);

        let expected = n as f64 * probability;
        let statistical_chi = chi_square_statistic(&counts, expected);

        let (critical_chi, quantile_error) =
            match chi_square_quantile(config.alpha, degrees_of_freedom as u32) {
                Ok(value) => (value, None),
                // the comparison below still runs against zero
                Err(e) => (0.0, Some(e)),
            };

        let verdict = if statistical_chi < critical_chi {
            Verdict::Fits
        } else {
            Verdict::DoesNotFit
        };
        debug!(statistical_chi, critical_chi, ?verdict, "evaluated sample");

        GoodnessOfFit {
            sample,
            degrees_of_freedom,
            probability,
            boundaries,
            counts,
            alpha: config.alpha,
            statistical_chi,
            critical_chi,
            quantile_error,
            verdict,
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Fits => write!(f, "fits"),
            Verdict::DoesNotFit => write!(f, "does not fit"),
        }
    }
}
