// Comparison of measured times against a quadratic prediction.

use std::fmt;
use std::time::Duration;

use loop_kernel::Variant;

use crate::runner::Experiment;

/// Unit in which times are reported and charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Seconds,
}

impl TimeUnit {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::IndexProducts => TimeUnit::Nanoseconds,
            Variant::DerivedArrays => TimeUnit::Seconds,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Seconds => "s",
        }
    }

    pub fn convert(self, elapsed: Duration) -> f64 {
        match self {
            TimeUnit::Nanoseconds => elapsed.as_nanos() as f64,
            TimeUnit::Seconds => elapsed.as_secs_f64(),
        }
    }

    /// Decimal places used when printing a time in this unit.
    fn precision(self) -> usize {
        match self {
            TimeUnit::Nanoseconds => 0,
            TimeUnit::Seconds => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub n: u32,
    pub measured: f64,
    /// `n^2`, in abstract units.
    pub raw_theoretical: u64,
    /// `c * n^2`, in the report's time unit.
    pub theoretical: f64,
    /// `measured / theoretical`, or 0 when the prediction is 0.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub unit: TimeUnit,
    /// `c` in `time = c * n^2`.
    pub scaling_constant: f64,
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Fits `c` to the first sample alone, `c = times[0] / ns[0]^2`, and
    /// predicts every other sample from it. This is a single-point fit, not
    /// a least-squares fit, so the first ratio is 1 by construction.
    ///
    /// __Arguments:__
    ///
    /// + `ns` - problem sizes, in measurement order
    ///
    /// + `times` - measured time for each size, already in `unit`
    ///
    pub fn new(ns: &[u32], times: &[f64], unit: TimeUnit) -> Self {
        debug_assert_eq!(ns.len(), times.len());

        let scaling_constant = match (ns.first(), times.first()) {
            (Some(&n), Some(&time)) if n > 0 => time / raw_theoretical(n) as f64,
            _ => 0.0,
        };

        let rows = ns
            .iter()
            .zip(times)
            .map(|(&n, &measured)| {
                let raw_theoretical = raw_theoretical(n);
                let theoretical = scaling_constant * raw_theoretical as f64;
                let ratio = if theoretical > 0.0 {
                    measured / theoretical
                } else {
                    0.0
                };

                ComparisonRow {
                    n,
                    measured,
                    raw_theoretical,
                    theoretical,
                    ratio,
                }
            })
            .collect();

        Self {
            unit,
            scaling_constant,
            rows,
        }
    }

    pub fn from_experiment(experiment: &Experiment, unit: TimeUnit) -> Self {
        Self::new(&experiment.ns, &experiment.times_in(unit), unit)
    }

    pub fn theoretical_times(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.theoretical).collect()
    }
}

fn raw_theoretical(n: u32) -> u64 {
    u64::from(n).pow(2)
}

/// Two-decimal scientific notation with a signed, two-digit exponent
/// (`4.70e+00`, `1.03e-08`).
fn scientific(value: f64) -> String {
    let formatted = format!("{value:.2e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => formatted,
        },
        // inf and NaN have no exponent
        None => formatted,
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit.suffix();
        let precision = self.unit.precision();

        writeln!(
            f,
            "Scaling constant (c) for O(n^2): {}",
            scientific(self.scaling_constant)
        )?;
        writeln!(f)?;
        writeln!(f, "Comparison of Experimental vs Theoretical:")?;
        writeln!(
            f,
            "{:>8} {:>18} {:>18} {:>18} {:>10}",
            "n",
            format!("Experimental ({unit})"),
            "Theoretical n^2 (units)",
            format!("Adjusted Theoretical ({unit})"),
            "Ratio"
        )?;
        writeln!(f, "{}", "-".repeat(90))?;

        for row in &self.rows {
            writeln!(
                f,
                "{:>8} {:>18.precision$} {:>18} {:>18.precision$} {:>10.2}",
                row.n, row.measured, row.raw_theoretical, row.theoretical, row.ratio
            )?;
        }

        Ok(())
    }
}
