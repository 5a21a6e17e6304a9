// Charts of measured (and predicted) time against problem size.

use std::error::Error;
use std::ops::Range;
use std::path::{Path, PathBuf};

use loop_kernel::Variant;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::AnalysisError;
use crate::report::Comparison;
use crate::runner::Experiment;

/// Receives the finished results of an analysis.
pub trait ReportSink {
    fn publish(
        &mut self,
        experiment: &Experiment,
        comparison: &Comparison,
    ) -> Result<(), AnalysisError>;
}

/// `None` discards the results.
impl<S: ReportSink> ReportSink for Option<S> {
    fn publish(
        &mut self,
        experiment: &Experiment,
        comparison: &Comparison,
    ) -> Result<(), AnalysisError> {
        match self {
            Some(sink) => sink.publish(experiment, comparison),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLayout {
    /// One log-log chart with the measured and the predicted series.
    MeasuredAndTheoretical,
    /// Measured series only, on linear and log-log charts side by side.
    LinearAndLogLog,
}

impl ChartLayout {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::IndexProducts => ChartLayout::MeasuredAndTheoretical,
            Variant::DerivedArrays => ChartLayout::LinearAndLogLog,
        }
    }

    fn dimensions(self) -> (u32, u32) {
        match self {
            ChartLayout::MeasuredAndTheoretical => (800, 600),
            ChartLayout::LinearAndLogLog => (1200, 500),
        }
    }
}

/// Renders the results to an SVG file.
#[derive(Debug, Clone)]
pub struct SvgChart {
    path: PathBuf,
    layout: ChartLayout,
}

impl SvgChart {
    pub fn new(path: impl Into<PathBuf>, layout: ChartLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for SvgChart {
    fn publish(
        &mut self,
        experiment: &Experiment,
        comparison: &Comparison,
    ) -> Result<(), AnalysisError> {
        let root = SVGBackend::new(&self.path, self.layout.dimensions()).into_drawing_area();

        let rendered = match self.layout {
            ChartLayout::MeasuredAndTheoretical => {
                draw_measured_and_theoretical(&root, experiment, comparison)
            }
            ChartLayout::LinearAndLogLog => draw_linear_and_log_log(&root, experiment, comparison),
        };

        rendered.map_err(|e| AnalysisError::Chart {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        log::info!("chart written to {}", self.path.display());
        Ok(())
    }
}

type DrawResult = Result<(), Box<dyn Error>>;

fn draw_measured_and_theoretical(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    experiment: &Experiment,
    comparison: &Comparison,
) -> DrawResult {
    root.fill(&WHITE)?;

    let unit = comparison.unit.suffix();
    let measured = points(&experiment.ns, &experiment.times_in(comparison.unit));
    let theoretical = points(&experiment.ns, &comparison.theoretical_times());

    let x_range = log_axis(measured.iter().map(|p| p.0));
    let y_range = log_axis(measured.iter().chain(&theoretical).map(|p| p.1));
    let measured = clamp_to_axis(measured, y_range.start);
    let theoretical = clamp_to_axis(theoretical, y_range.start);

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Experimental vs Theoretical O(n^2) Analysis",
            ("sans-serif", 20),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

    chart
        .configure_mesh()
        .x_desc("n (log scale)")
        .y_desc(format!("time ({unit}, log scale)"))
        .draw()?;

    chart
        .draw_series(LineSeries::new(measured.clone(), RED.stroke_width(2)))?
        .label("Experimental")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart.draw_series(
        measured
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, RED.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(theoretical.clone(), BLUE.stroke_width(2)))?
        .label("Theoretical O(n^2)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart.draw_series(
        theoretical
            .iter()
            .map(|&(x, y)| TriangleMarker::new((x, y), 5, BLUE.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_linear_and_log_log(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    experiment: &Experiment,
    comparison: &Comparison,
) -> DrawResult {
    root.fill(&WHITE)?;

    let unit = comparison.unit.suffix();
    let measured = points(&experiment.ns, &experiment.times_in(comparison.unit));

    let panels = root.split_evenly((1, 2));

    // left: linear axes
    {
        let x_max = measured.iter().map(|p| p.0).fold(0.0_f64, f64::max);
        let y_max = measured.iter().map(|p| p.1).fold(0.0_f64, f64::max);

        let mut chart = ChartBuilder::on(&panels[0])
            .caption("Measured time (linear)", ("sans-serif", 20))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..padded(x_max), 0.0..padded(y_max))?;

        chart
            .configure_mesh()
            .x_desc("n")
            .y_desc(format!("time ({unit})"))
            .draw()?;

        chart.draw_series(LineSeries::new(measured.clone(), RED.stroke_width(2)))?;
        chart.draw_series(
            measured
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, RED.filled())),
        )?;
    }

    // right: log-log axes
    {
        let x_range = log_axis(measured.iter().map(|p| p.0));
        let y_range = log_axis(measured.iter().map(|p| p.1));
        let measured = clamp_to_axis(measured, y_range.start);

        let mut chart = ChartBuilder::on(&panels[1])
            .caption("Measured time (log-log)", ("sans-serif", 20))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

        chart
            .configure_mesh()
            .x_desc("n (log scale)")
            .y_desc(format!("time ({unit}, log scale)"))
            .draw()?;

        chart.draw_series(LineSeries::new(measured.clone(), RED.stroke_width(2)))?;
        chart.draw_series(
            measured
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, RED.filled())),
        )?;
    }

    root.present()?;
    Ok(())
}

fn points(ns: &[u32], values: &[f64]) -> Vec<(f64, f64)> {
    ns.iter()
        .zip(values)
        .map(|(&n, &value)| (f64::from(n), value))
        .collect()
}

/// Range covering the positive `values` with a factor of two to spare on
/// each side. Falls back to `1..10` when nothing is positive.
fn log_axis(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|&v| v > 0.0)
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if hi > 0.0 {
        (lo / 2.0)..(hi * 2.0)
    } else {
        1.0..10.0
    }
}

/// Raises values below the bottom of a log axis onto it, so a zero
/// measurement still shows up.
fn clamp_to_axis(points: Vec<(f64, f64)>, floor: f64) -> Vec<(f64, f64)> {
    points
        .into_iter()
        .map(|(x, y)| (x, y.max(floor)))
        .collect()
}

fn padded(max: f64) -> f64 {
    if max > 0.0 { max * 1.1 } else { 1.0 }
}
