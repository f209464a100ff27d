use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum QuantileError {
    #[error("Wrong alpha or degree value!")]
    InvalidParameter { alpha: f64, degree: u32 },
}

/// Approximates the `alpha` quantile of the chi-square distribution with
/// `degree` degrees of freedom.
///
/// A normal approximant `d` is derived from `alpha` and then corrected by a
/// Cornish-Fisher style series in `d` and `degree`. Requires `0 < alpha < 1`
/// and `degree > 0`.
pub fn chi_square_quantile(alpha: f64, degree: u32) -> Result<f64, QuantileError> {
    // written so that NaN alpha is rejected too
    if !(alpha > 0.0 && alpha < 1.0) || degree == 0 {
        warn!(alpha, degree, "rejected chi-square quantile parameters");
        return Err(QuantileError::InvalidParameter { alpha, degree });
    }

    let d = normal_approximant(alpha);
    let degree = degree as f64;
    let root = (2.0 * degree).sqrt();

    let mut result = degree;
    result += d * root;
    result += (2.0 / 3.0) * (d.powi(2) - 1.0);
    result += d * (d.powi(2) - 7.0) / (9.0 * root);
    result += (6.0 * d.powi(4) + 14.0 * d.powi(2) - 32.0) / (405.0 * degree);
    result += d * (9.0 * d.powi(4) + 256.0 * d.powi(2) - 433.0) / (4860.0 * degree * root);
    Ok(result)
}

/// Same as [`chi_square_quantile`], but reports invalid parameters on stderr
/// and yields `0.0` instead of an error.
pub fn chi_square_quantile_or_zero(alpha: f64, degree: u32) -> f64 {
    chi_square_quantile(alpha, degree).unwrap_or_else(|e| {
        eprintln!("{e}");
        0.0
    })
}

fn normal_approximant(alpha: f64) -> f64 {
    if alpha < 0.5 {
        -2.0637 * ((1.0 / alpha).ln() - 0.16).powf(0.4274) + 1.5774
    } else {
        2.0637 * ((1.0 / (1.0 - alpha)).ln() - 0.16).powf(0.4274) - 1.5774
    }
}
