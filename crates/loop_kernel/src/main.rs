// This file is a place to check the kernels by hand.

use loop_kernel::{Variant, active_pairs, iteration_count};

/// Size to use when none is given.
const N: u32 = 20;

use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    #[arg(long)]
    n: Option<u32>,
    /// Only run this kernel; both run by default.
    #[arg(long, value_enum)]
    variant: Option<Variant>,
}

/// Prints the sum computed by each kernel for one size, along with the
/// shape of the loop nest at that size.
fn main() {
    let args = Args::parse();
    let n = args.n.unwrap_or(N);

    let variants = match args.variant {
        Some(variant) => vec![variant],
        None => vec![Variant::IndexProducts, Variant::DerivedArrays],
    };

    println!("n:                {n}");
    println!("Active (i, j):    {}", active_pairs(n));
    println!("Inner iterations: {}", iteration_count(n));

    for variant in variants {
        println!("Sum ({variant}): {}", variant.compute_sum(n));
    }
}
