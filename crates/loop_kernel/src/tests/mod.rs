// unit tests

use super::*;

/// Sizes small enough for the per-term reference loops.
const SMALL_SIZES: [u32; 10] = [1, 2, 3, 4, 5, 10, 17, 20, 26, 50];

#[test]
fn size_one_sums_to_zero() {
    assert_eq!(compute_sum(1), BigUint::zero());
    assert_eq!(compute_sum_derived(1), BigUint::zero());
    assert_eq!(Variant::IndexProducts.compute_sum(1), BigUint::zero());
    assert_eq!(Variant::DerivedArrays.compute_sum(1), BigUint::zero());
}

#[test]
fn size_zero_is_an_empty_range() {
    assert_eq!(compute_sum(0), BigUint::zero());
    assert_eq!(compute_sum_derived(0), BigUint::zero());
    assert_eq!(active_pairs(0), 0);
    assert_eq!(iteration_count(0), 0);
}

#[test]
fn index_products_at_twenty() {
    assert_eq!(compute_sum(20), BigUint::from(6866u32));
}

#[test]
fn derived_arrays_at_twenty() {
    assert_eq!(compute_sum_derived(20), BigUint::from(698_240u32));
}

#[test]
fn small_sizes_by_hand() {
    // n = 2: only (1, 1, 1) contributes
    assert_eq!(compute_sum(2), BigUint::from(1u32));
    assert_eq!(compute_sum_derived(2), BigUint::from(8u32));

    // n = 3: (1, 1, 1) and (1, 1, 2)
    assert_eq!(compute_sum(3), BigUint::from(3u32));
    assert_eq!(compute_sum_derived(3), BigUint::from(36u32));
}

#[test]
fn index_products_matches_reference() {
    for n in SMALL_SIZES {
        assert_eq!(compute_sum(n), reference_index_products(n), "n = {n}");
    }
}

#[test]
fn derived_arrays_matches_unguarded_reference() {
    for n in SMALL_SIZES {
        assert_eq!(
            compute_sum_derived(n),
            reference_derived_arrays(n),
            "n = {n}"
        );
    }
}

/// Large enough that the derived-arrays total needs more than 128 bits
/// (`a[i]` reaches `2^130` on contributing rows).
const WIDE_SIZE: u32 = 17_000;

#[test]
fn index_products_at_wide_size() {
    assert_eq!(
        compute_sum(WIDE_SIZE),
        closed_form_index_products(WIDE_SIZE)
    );
}

#[test]
fn derived_arrays_exceeds_u128() {
    let sum = compute_sum_derived(WIDE_SIZE);
    assert_eq!(sum, closed_form_derived_arrays(WIDE_SIZE));
    assert!(sum.bits() > 128, "bits = {}", sum.bits());
}

#[test]
fn closed_forms_agree_with_reference_loops() {
    for n in SMALL_SIZES {
        let index_products = closed_form_index_products(n);
        assert_eq!(index_products, reference_index_products(n), "n = {n}");

        let derived_arrays = closed_form_derived_arrays(n);
        assert_eq!(derived_arrays, reference_derived_arrays(n), "n = {n}");
    }
}

#[test]
fn variant_dispatch() {
    assert_eq!(Variant::IndexProducts.compute_sum(26), compute_sum(26));
    assert_eq!(Variant::DerivedArrays.compute_sum(26), compute_sum_derived(26));
}

#[test]
fn derived_arrays_contents() {
    let arrays = DerivedArrays::new(5);
    assert_eq!(arrays.len(), 5);

    let a: Vec<BigUint> = [1u32, 2, 4, 8, 16].into_iter().map(BigUint::from).collect();
    assert_eq!(arrays.a.to_vec(), a);
    assert_eq!(arrays.b.to_vec(), vec![0, 2, 4, 6, 8]);
    assert_eq!(arrays.c.to_vec(), vec![0, 5, 10, 15, 20]);

    assert!(DerivedArrays::new(0).is_empty());
}

#[test]
fn derived_arrays_hold_wide_powers() {
    let arrays = DerivedArrays::new(200);
    assert_eq!(arrays.a[199].bits(), 200);
}

#[test]
fn active_pairs_counts_non_empty_k_ranges() {
    for n in 1..=200 {
        let (pairs, _) = walk_loop_nest(n);
        assert_eq!(active_pairs(n), pairs, "n = {n}");
        assert_eq!(pairs, brute_force_pair_count(n), "n = {n}");
    }
}

#[test]
fn iteration_count_matches_walk() {
    for n in 1..=200 {
        let (_, iterations) = walk_loop_nest(n);
        assert_eq!(iteration_count(n), iterations, "n = {n}");
    }
}

#[test]
fn iteration_count_at_twenty() {
    // j = 1..=4 contribute 19 + 32 + 33 + 16
    assert_eq!(iteration_count(20), 100);
    assert_eq!(active_pairs(20), 10);
}

#[test]
fn iteration_count_is_quadratic() {
    // sum of j * (n - j^2) over j < sqrt(n) approaches n^2 / 4
    let n = 30_000u32;
    let ratio = iteration_count(n) as f64 / f64::from(n).powi(2);
    assert!((ratio - 0.25).abs() < 0.01, "ratio = {ratio}");
}

#[test]
fn variant_display() {
    assert_eq!(Variant::IndexProducts.to_string(), "index products");
    assert_eq!(Variant::DerivedArrays.to_string(), "derived arrays");
}

// test helper functions

/// Direct triple loop with one arbitrary-precision addition per term.
fn reference_index_products(n: u32) -> BigUint {
    let n = u64::from(n);
    let mut total = BigUint::zero();
    for i in 1..n {
        for j in i..n {
            for k in j * j..n {
                total += BigUint::from(i) * BigUint::from(j) * BigUint::from(k);
            }
        }
    }
    total
}

/// Same loop nest over freshly built arrays, without the `j * j >= n` skip.
fn reference_derived_arrays(n: u32) -> BigUint {
    let len = n as usize;
    let a: Vec<BigUint> = (0..len).map(|i| BigUint::from(2u32).pow(i as u32)).collect();
    let b: Vec<BigUint> = (0..len).map(|i| BigUint::from(2 * i)).collect();
    let c: Vec<BigUint> = (0..len).map(|i| BigUint::from(len * i)).collect();

    let mut total = BigUint::zero();
    for i in 1..len {
        for j in i..len {
            for k in j * j..len {
                total += &a[i] * &b[j] * &c[k];
            }
        }
    }
    total
}

/// `k` summed over `[j * j, n)`.
fn k_range_sum(j: u64, n: u64) -> BigUint {
    let lo = j * j;
    BigUint::from((lo + n - 1) * (n - lo)) / 2u32
}

/// Sum over contributing `j` of `(1 + .. + j) * j * sum(k)`.
fn closed_form_index_products(n: u32) -> BigUint {
    let n = u64::from(n);
    let mut total = BigUint::zero();
    for j in (1..n).take_while(|j| j * j < n) {
        total += BigUint::from(j * (j + 1) / 2 * j) * k_range_sum(j, n);
    }
    total
}

/// Sum over contributing `j` of `(2^1 + .. + 2^j) * 2j * n * sum(k)`.
fn closed_form_derived_arrays(n: u32) -> BigUint {
    let n = u64::from(n);
    let mut total = BigUint::zero();
    for j in (1..n).take_while(|j| j * j < n) {
        let powers = (BigUint::one() << (j + 1)) - 2u32;
        total += powers * BigUint::from(2 * j * n) * k_range_sum(j, n);
    }
    total
}

/// Walks the loop nest, returning (pairs with a non-empty k range, k-loop executions).
fn walk_loop_nest(n: u32) -> (u64, u128) {
    let n = u64::from(n);
    let mut pairs = 0;
    let mut iterations = 0;
    for i in 1..n {
        for j in i..n {
            let range = j * j..n;
            if !range.is_empty() {
                pairs += 1;
            }
            iterations += range.count() as u128;
        }
    }
    (pairs, iterations)
}

fn brute_force_pair_count(n: u32) -> u64 {
    let n = u64::from(n);
    let mut count = 0;
    for i in 1..n {
        for j in i..n {
            if j * j < n {
                count += 1;
            }
        }
    }
    count
}
