// top-level library module

pub mod cli;
pub mod config;
pub mod error;
pub mod plot;
pub mod report;
pub mod runner;

pub use config::{DEFAULT_N_VALUES, ExperimentConfig};
pub use error::AnalysisError;
pub use loop_kernel::Variant;
pub use plot::{ChartLayout, ReportSink, SvgChart};
pub use report::{Comparison, TimeUnit};
pub use runner::{Experiment, run_experiment};

use loop_kernel::iteration_count;

/// Results of one full analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub experiment: Experiment,
    pub comparison: Comparison,
}

/// Times the configured kernel at every size, printing a progress line per
/// size followed by the comparison table, then hands the results to `sink`.
pub fn analyze<S: ReportSink>(
    config: &ExperimentConfig,
    sink: &mut S,
) -> Result<Analysis, AnalysisError> {
    config.validate()?;

    let variant = config.variant;
    let unit = config.time_unit();

    log::info!(
        "measuring the {variant} kernel at {} sizes",
        config.n_values.len()
    );
    for &n in &config.n_values {
        log::debug!("n={n}: {} inner iterations", iteration_count(n));
    }

    let experiment = run_experiment(
        &config.n_values,
        |n| variant.compute_sum(n),
        |sample| println!("{}", runner::progress_line(&sample, unit)),
    );

    let comparison = Comparison::from_experiment(&experiment, unit);
    println!();
    print!("{comparison}");

    sink.publish(&experiment, &comparison)?;

    Ok(Analysis {
        experiment,
        comparison,
    })
}
