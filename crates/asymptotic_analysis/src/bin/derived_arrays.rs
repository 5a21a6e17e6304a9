//! Times the derived-arrays kernel (sum of `a[i] * b[j] * c[k]`) at the
//! default sizes and charts the timings on linear and log-log axes.

use asymptotic_analysis::{Variant, cli};

fn main() -> Result<(), String> {
    env_logger::init();
    cli::run(Variant::DerivedArrays).map_err(|e| e.to_string())
}
