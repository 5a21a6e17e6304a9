// Experiment settings, passed explicitly into the analysis.

use std::path::PathBuf;

use loop_kernel::Variant;

use crate::error::AnalysisError;
use crate::report::TimeUnit;

/// Sizes that finish quickly but still show the growth curve.
pub const DEFAULT_N_VALUES: [u32; 11] = [
    20, 300, 650, 1000, 2500, 4900, 8000, 12500, 17500, 23900, 30000,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Problem sizes, measured in this order.
    pub n_values: Vec<u32>,
    pub variant: Variant,
    /// Where to write the chart; `None` skips charting.
    pub chart: Option<PathBuf>,
}

impl ExperimentConfig {
    /// Default sizes and chart destination for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            n_values: DEFAULT_N_VALUES.to_vec(),
            variant,
            chart: Some(Self::default_chart_path(variant)),
        }
    }

    pub fn default_chart_path(variant: Variant) -> PathBuf {
        match variant {
            Variant::IndexProducts => PathBuf::from("index_products.svg"),
            Variant::DerivedArrays => PathBuf::from("derived_arrays.svg"),
        }
    }

    pub fn time_unit(&self) -> TimeUnit {
        TimeUnit::for_variant(self.variant)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.n_values.is_empty() {
            return Err(AnalysisError::EmptySizes);
        }
        if self.n_values.contains(&0) {
            return Err(AnalysisError::ZeroSize);
        }
        Ok(())
    }
}
