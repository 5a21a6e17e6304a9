//! Times the index-products kernel (sum of `i * j * k`) at the default
//! sizes and charts the timings against a quadratic fit on log-log axes.

use asymptotic_analysis::{Variant, cli};

fn main() -> Result<(), String> {
    env_logger::init();
    cli::run(Variant::IndexProducts).map_err(|e| e.to_string())
}
