mod binning;
mod chi_square;
mod lcg;

pub use binning::{bin_boundaries, bin_count_for, bin_counts, chi_square_statistic};
pub use chi_square::{chi_square_quantile, chi_square_quantile_or_zero, QuantileError};
pub use lcg::{Lcg32, Y_VALUE_LIMIT};
