#[cfg(test)]
mod tests;

// Home of the triple-loop kernels whose running time is under study.

use clap::ValueEnum;
use ndarray::Array1;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;

/// Which kernel to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Sum of `i * j * k` over the loop nest.
    IndexProducts,
    /// Sum of `a[i] * b[j] * c[k]` over precomputed arrays.
    DerivedArrays,
}

impl Variant {
    pub fn compute_sum(self, n: u32) -> BigUint {
        match self {
            Variant::IndexProducts => compute_sum(n),
            Variant::DerivedArrays => compute_sum_derived(n),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::IndexProducts => "index products",
            Variant::DerivedArrays => "derived arrays",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sums `i * j * k` for `i` in `[1, n)`, `j` in `[i, n)` and `k` in
/// `[j * j, n)`.
///
/// Although the loops nest three deep, the `j * j` lower bound leaves the
/// k range empty for every `j >= sqrt(n)`, so the work is quadratic in `n`.
///
/// __Overflow:__
///
/// The total is a `BigUint`. Each k-loop accumulates into a `u128` first:
/// a non-empty k range needs `i <= j < 2^16`, and `k < 2^32`, so a
/// partial sum of at most `2^32` terms stays below `2^96`.
///
pub fn compute_sum(n: u32) -> BigUint {
    let n = u64::from(n);
    let mut total = BigUint::zero();

    for i in 1..n {
        for j in i..n {
            // no short-circuit here; the range is simply empty once j * j >= n
            let mut partial: u128 = 0;
            for k in j * j..n {
                partial += u128::from(i * j) * u128::from(k);
            }

            if partial > 0 {
                total += BigUint::from(partial);
            }
        }
    }

    total
}

/// Read-only arrays feeding the derived-arrays kernel: `a[i] = 2^i`,
/// `b[i] = 2 * i` and `c[i] = n * i`, each of length `n`.
#[derive(Debug)]
pub struct DerivedArrays {
    pub a: Array1<BigUint>,
    pub b: Array1<u128>,
    pub c: Array1<u128>,
}

impl DerivedArrays {
    pub fn new(n: u32) -> Self {
        let len = n as usize;
        let n = u128::from(n);

        let a = Array1::<BigUint>::from_iter((0..len).map(|i| BigUint::one() << i));
        let b = Array1::<u128>::from_iter((0..n).map(|i| 2 * i));
        let c = Array1::<u128>::from_iter((0..n).map(|i| n * i));

        Self { a, b, c }
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

/// Sums `a[i] * b[j] * c[k]` over the same ranges as [`compute_sum`],
/// skipping the k-loop outright when `j * j >= n`.
///
/// The skip only avoids ranges that are already empty, so it never changes
/// the result. The arrays are rebuilt on every call and dropped on return.
///
/// __Overflow:__
///
/// `b[j] * c[k]` is accumulated in a `u128` (`b[j] < 2^17` when the range
/// is non-empty, `c[k] < 2^64`, at most `2^32` terms), and the partial sum is
/// then multiplied by the arbitrary-precision `a[i]`.
///
pub fn compute_sum_derived(n: u32) -> BigUint {
    let arrays = DerivedArrays::new(n);
    let len = arrays.len();
    let mut total = BigUint::zero();

    for i in 1..len {
        for j in i..len {
            if j * j >= len {
                continue;
            }

            let b_j = arrays.b[j];
            let mut partial: u128 = 0;
            for k in j * j..len {
                partial += b_j * arrays.c[k];
            }

            total += &arrays.a[i] * BigUint::from(partial);
        }
    }

    total
}

// closed forms for the shape of the loop nest

/// Values of `j` whose k range `[j * j, n)` is non-empty.
fn contributing_j(n: u32) -> impl Iterator<Item = u64> {
    let n = u64::from(n);
    (1..n).take_while(move |j| j * j < n)
}

/// Number of `(i, j)` pairs with `1 <= i <= j < n` and `j * j < n`, that is,
/// the pairs for which the innermost loop runs at least once.
pub fn active_pairs(n: u32) -> u64 {
    contributing_j(n).sum()
}

/// Number of times the innermost loop body executes for size `n`.
pub fn iteration_count(n: u32) -> u128 {
    let n_wide = u64::from(n);
    contributing_j(n)
        .map(|j| u128::from(j) * u128::from(n_wide - j * j))
        .sum()
}
