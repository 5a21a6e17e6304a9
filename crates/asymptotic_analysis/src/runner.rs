// Times one kernel call per problem size.

use std::hint::black_box;
use std::time::{Duration, Instant};

use num_bigint::BigUint;

use crate::report::TimeUnit;

/// One measurement, borrowed from (or about to be added to) an [`Experiment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<'a> {
    pub n: u32,
    pub elapsed: Duration,
    pub sum: &'a BigUint,
}

/// Results of a run as three parallel sequences, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Experiment {
    pub ns: Vec<u32>,
    pub times: Vec<Duration>,
    pub sums: Vec<BigUint>,
}

impl Experiment {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ns: Vec::with_capacity(capacity),
            times: Vec::with_capacity(capacity),
            sums: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, n: u32, elapsed: Duration, sum: BigUint) {
        self.ns.push(n);
        self.times.push(elapsed);
        self.sums.push(sum);
    }

    pub fn len(&self) -> usize {
        self.ns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ns.is_empty()
    }

    /// Elapsed times converted to `unit`.
    pub fn times_in(&self, unit: TimeUnit) -> Vec<f64> {
        self.times.iter().map(|&t| unit.convert(t)).collect()
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample<'_>> {
        self.ns
            .iter()
            .zip(&self.times)
            .zip(&self.sums)
            .map(|((&n, &elapsed), sum)| Sample { n, elapsed, sum })
    }
}

/// Runs `kernel` once for each size in `n_values`, timing each call with a
/// monotonic clock.
///
/// `on_sample` is called after every measurement, before the next clock
/// starts; the CLI uses it to print progress.
///
/// __Note:__
///
/// Nothing allocated by a previous kernel call outlives that call, apart from
/// the sum moved into the result lists, so each clock starts with no
/// outstanding temporaries to free.
///
pub fn run_experiment<K, F>(n_values: &[u32], mut kernel: K, mut on_sample: F) -> Experiment
where
    K: FnMut(u32) -> BigUint,
    F: FnMut(Sample<'_>),
{
    let mut experiment = Experiment::with_capacity(n_values.len());

    for &n in n_values {
        // No collector pass to force here: the previous call's temporaries
        // were already freed when it returned.
        let start = Instant::now();
        let sum = black_box(kernel(black_box(n)));
        let elapsed = start.elapsed();

        on_sample(Sample {
            n,
            elapsed,
            sum: &sum,
        });
        experiment.push(n, elapsed, sum);
    }

    experiment
}

/// Formats the line printed after each measurement.
pub fn progress_line(sample: &Sample<'_>, unit: TimeUnit) -> String {
    match unit {
        TimeUnit::Nanoseconds => format!(
            "n={:>5}  time={:>12}ns  Sum={}",
            sample.n,
            sample.elapsed.as_nanos(),
            sample.sum
        ),
        TimeUnit::Seconds => format!(
            "n={:>5}  time={:>12.6}s  Sum={}",
            sample.n,
            sample.elapsed.as_secs_f64(),
            sample.sum
        ),
    }
}
