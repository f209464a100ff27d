/// Constants of a uniformity experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalConfig {
    pub sample_size: usize,
    /// Confidence level of the critical value.
    pub alpha: f64,
    pub begin: f64,
    pub end: f64,
    pub seed: i32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            sample_size: 100,
            alpha: 0.9,
            begin: 0.0,
            end: 1.0,
            seed: 0,
        }
    }
}
