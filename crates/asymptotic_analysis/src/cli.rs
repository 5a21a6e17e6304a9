// Command line shared by the per-variant binaries.

use std::path::PathBuf;

use clap::Parser;
use loop_kernel::Variant;

use crate::config::ExperimentConfig;
use crate::error::AnalysisError;
use crate::plot::{ChartLayout, SvgChart};

/// Times a triple-loop kernel at increasing sizes and compares the timings
/// against a quadratic fit.
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct RunArgs {
    /// Comma-separated problem sizes, measured in the given order.
    #[arg(long, value_delimiter = ',')]
    pub n_values: Option<Vec<u32>>,

    /// Where to write the SVG chart.
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Skip the chart.
    #[arg(long, action, conflicts_with = "chart")]
    pub no_chart: bool,
}

impl RunArgs {
    pub fn into_config(self, variant: Variant) -> ExperimentConfig {
        let mut config = ExperimentConfig::new(variant);

        if let Some(n_values) = self.n_values {
            config.n_values = n_values;
        }
        if self.no_chart {
            config.chart = None;
        } else if let Some(path) = self.chart {
            config.chart = Some(path);
        }

        config
    }
}

/// Entry point for the binaries: parses the command line and runs the
/// analysis for `variant`.
pub fn run(variant: Variant) -> Result<(), AnalysisError> {
    let config = RunArgs::parse().into_config(variant);

    let layout = ChartLayout::for_variant(variant);
    let mut sink = config
        .chart
        .clone()
        .map(|path| SvgChart::new(path, layout));

    crate::analyze(&config, &mut sink)?;
    Ok(())
}
