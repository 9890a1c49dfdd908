use std::{
    ops::Range,
    path::Path,
};

use getset::CopyGetters;
use plotters::{
    coord::Shift,
    prelude::*,
};
use tracing::info;
use typed_builder::TypedBuilder;

use crate::{
    aligned_table::{
        AlignedTable,
        Frame,
    },
    snapshot::SnapshotStat,
    types::{
        ConfigError,
        Error,
        LatticeSize,
        Result,
    },
};

/// Canvas and stroke settings of the rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder, CopyGetters)]
pub struct RenderOptions {
    /// Canvas width in pixels.
    #[builder(default = 2000)]
    #[getset(get_copy = "pub")]
    width: u32,

    /// Canvas height in pixels.
    #[builder(default = 1000)]
    #[getset(get_copy = "pub")]
    height: u32,

    /// Stroke width of the convergence curves.
    #[builder(default = 2)]
    #[getset(get_copy = "pub")]
    line_width: u32,

    /// Font size of the panel captions.
    #[builder(default = 30)]
    #[getset(get_copy = "pub")]
    caption_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RenderOptions {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidChartDimensions.into());
        }
        Ok(())
    }
}

fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

/// Render the convergence curves of `table` into a png at `path`.
///
/// The canvas is split into a "Mean" and a "Standard deviation" panel, both with a
/// logarithmic trial axis and one line per lattice size. Absent cells are skipped.
pub fn render_convergence<P: AsRef<Path>>(
    path: P,
    table: &AlignedTable,
    options: &RenderOptions,
) -> Result<()> {
    options.validate()?;
    let path = path.as_ref();

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;
    let panels = root.split_evenly((1, 2));
    draw_panel(&panels[0], "Mean", table.sizes(), table.mean(), options)?;
    draw_panel(
        &panels[1],
        "Standard deviation",
        table.sizes(),
        table.std(),
        options,
    )?;
    root.present().map_err(render_error)?;

    info!(
        "rendered convergence of {} lattice sizes to {}",
        table.sizes().len(),
        path.display()
    );
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    sizes: &[LatticeSize],
    frame: &Frame,
    options: &RenderOptions,
) -> Result<()> {
    let lines = Vec::from_iter((0..frame.num_columns()).map(|col| line_points(frame, col)));
    let x_max = frame.num_rows().max(2) as f64;
    let y_range = value_range(lines.iter().flatten().map(|(_, y)| *y));

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", options.caption_size))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((1.0..x_max).log_scale(), y_range)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("trials")
        .y_desc(caption)
        .draw()
        .map_err(render_error)?;

    for (i, (size, points)) in sizes.iter().zip(lines).enumerate() {
        chart
            .draw_series(LineSeries::new(
                points,
                Palette99::pick(i).stroke_width(options.line_width),
            ))
            .map_err(render_error)?
            .label(size.to_string())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], Palette99::pick(i).stroke_width(2))
            });
    }

    if !sizes.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_error)?;
    }
    Ok(())
}

/// Render one bar per lattice size at its mean threshold into a png at `path`,
/// with an error bar of one standard deviation where it is defined.
pub fn render_snapshot<P: AsRef<Path>>(
    path: P,
    stats: &[SnapshotStat],
    options: &RenderOptions,
) -> Result<()> {
    options.validate()?;
    let path = path.as_ref();

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let segments = stats.len().max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption("Threshold by lattice size", ("sans-serif", options.caption_size))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0..segments).into_segmented(), snapshot_range(stats))
        .map_err(render_error)?;

    let label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => stats
            .get(*i)
            .map(|s| s.size().to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(segments)
        .x_label_formatter(&label)
        .x_desc("lattice size")
        .y_desc("threshold")
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(stats.iter().enumerate().map(|(i, s)| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), s.mean())],
                Palette99::pick(i).mix(0.6).filled(),
            );
            bar.set_margin(0, 0, 10, 10);
            bar
        }))
        .map_err(render_error)?;

    chart
        .draw_series(stats.iter().enumerate().filter_map(|(i, s)| {
            let std = s.std().value()?;
            Some(ErrorBar::new_vertical(
                SegmentValue::CenterOf(i),
                s.mean() - std,
                s.mean(),
                s.mean() + std,
                BLACK.filled(),
                20,
            ))
        }))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    info!(
        "rendered snapshot of {} lattice sizes to {}",
        stats.len(),
        path.display()
    );
    Ok(())
}

/// The `(rank, value)` points of the present cells of column `col`.
fn line_points(frame: &Frame, col: usize) -> Vec<(f64, f64)> {
    frame
        .column(col)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| cell.value().map(|v| ((i + 1) as f64, v)))
        .collect()
}

/// The padded value range covering all `values`, `0..1` if there are none.
fn value_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return 0.0..1.0;
    }
    let pad = if max > min { (max - min) * 0.05 } else { 0.05 };
    (min - pad)..(max + pad)
}

/// The y range of the snapshot chart, always including zero.
fn snapshot_range(stats: &[SnapshotStat]) -> Range<f64> {
    let spread = |s: &SnapshotStat| s.std().value().unwrap_or(0.0);
    let lo = stats
        .iter()
        .map(|s| s.mean() - spread(s))
        .fold(0.0, f64::min);
    let hi = stats
        .iter()
        .map(|s| s.mean() + spread(s))
        .fold(0.0, f64::max);
    if hi <= lo {
        return 0.0..1.0;
    }
    lo..(hi * 1.1)
}
