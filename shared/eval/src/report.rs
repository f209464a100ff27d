use std::fmt;
use std::io::{self, Write};

use crate::harness::{GoodnessOfFit, Verdict};

const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a float with six significant digits in `%g` style: fixed notation
/// for moderate exponents, scientific otherwise, trailing zeros dropped.
#[derive(Debug, Clone, Copy)]
pub struct Sig6(pub f64);

impl fmt::Display for Sig6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return write!(f, "nan");
        }
        if value.is_infinite() {
            return write!(f, "{}", if value > 0.0 { "inf" } else { "-inf" });
        }
        if value == 0.0 {
            return write!(f, "{}", if value.is_sign_negative() { "-0" } else { "0" });
        }

        // the exponent has to be taken after rounding to the target precision
        let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
            write!(f, "{}", trim_fraction(&format!("{value:.decimals$}")))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Writes the console report of `fit` to `out`. The quantile diagnostic, if
/// any, goes to `diagnostics`.
pub fn write_report<W: Write, E: Write>(
    out: &mut W,
    diagnostics: &mut E,
    fit: &GoodnessOfFit,
) -> io::Result<()> {
    writeln!(
        out,
        "Number of degrees of freedom = {}\n",
        fit.degrees_of_freedom
    )?;

    for (rank, value) in fit.sample.iter().enumerate() {
        writeln!(out, "{}: {}", rank + 1, Sig6(*value))?;
    }
    writeln!(out)?;

    if let Some(e) = &fit.quantile_error {
        writeln!(diagnostics, "{e}")?;
    }

    writeln!(out, "Statistical hi^2 = {}", Sig6(fit.statistical_chi))?;
    writeln!(
        out,
        "Critical hi^2 ({}, {}) = {}",
        Sig6(fit.alpha),
        fit.degrees_of_freedom,
        Sig6(fit.critical_chi)
    )?;

    match fit.verdict {
        Verdict::Fits => writeln!(
            out,
            "There is {} probability that the generator obeys a uniform distribution law.",
            Sig6(fit.alpha)
        ),
        Verdict::DoesNotFit => writeln!(
            out,
            "The generator does not obey a uniform distribution law."
        ),
    }
}
