//! Drawing of the sampled surface and markers to the plot

use plotters::chart::SeriesLabelPosition;
use plotters::coord;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::element::{Circle, Rectangle};
use plotters::prelude::{ChartBuilder, DrawingBackend};
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use plotters::style::{colors, Color, ShapeStyle};

use super::options::ContourOptions;
use super::{Backend, Marker};
use crate::grid::SurfaceGrid;

/// The font to use for text in the plot
const FONT: &str = "sans-serif";

/// Draws the surface as filled contour bands and overlays the markers, with a legend listing the
/// marker labels
pub fn draw_contour<'a>(
    grid: &SurfaceGrid,
    options: &ContourOptions,
    markers: &[Marker],
    area: &DrawingArea<Backend, coord::Shift>,
) -> Result<(), DrawingAreaErrorKind<<Backend<'a> as DrawingBackend>::ErrorType>> {
    let (x_min, x_max, y_min, y_max) = grid.domain();
    let (z_min, z_max) = grid.value_range();
    let z_span = z_max - z_min;
    let levels = options.levels.max(1);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60);
    if !options.title.is_empty() {
        builder.caption(&options.title, (FONT, 28));
    }
    let mut context = builder.build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    context
        .configure_mesh()
        .disable_mesh()
        .x_labels(8)
        .y_labels(8)
        .x_desc(options.x_label.as_str())
        .y_desc(options.y_label.as_str())
        .x_label_style((FONT, 22))
        .y_label_style((FONT, 22))
        .axis_desc_style((FONT, 22))
        .draw()?;

    // One filled cell per grid square, colored by the quantized contour band of the value at its
    // lower-left node
    let (nrows, ncols) = grid.shape();
    let cells = (0..nrows.saturating_sub(1)).flat_map(|i| {
        (0..ncols.saturating_sub(1)).map(move |j| {
            let corner_a = (grid.x()[(i, j)], grid.y()[(i, j)]);
            let corner_b = (grid.x()[(i + 1, j + 1)], grid.y()[(i + 1, j + 1)]);
            let color = band_color(grid.z()[(i, j)], z_min, z_span, levels);
            Rectangle::new([corner_a, corner_b], color.filled())
        })
    });
    context.draw_series(cells)?;

    for marker in markers {
        let style = ShapeStyle::from(&colors::RED).filled();
        context
            .draw_series(std::iter::once(Circle::new((marker.x, marker.y), 5, style)))?
            .label(marker.label.as_str())
            .legend(move |(x, y)| Circle::new((x, y), 5, style));
    }

    if !markers.is_empty() {
        context
            .configure_series_labels()
            .label_font((FONT, 20))
            .border_style(&colors::BLACK)
            .background_style(&colors::WHITE.mix(0.8))
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    Ok(())
}

/// Returns the viridis color of the contour band containing `z`
fn band_color(z: f64, z_min: f64, z_span: f64, levels: usize) -> plotters::style::RGBColor {
    let t = if z_span > 0.0 {
        ((z - z_min) / z_span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let band = ((t * levels as f64).floor() as usize).min(levels - 1);

    // Color each band by its midpoint
    ViridisRGB.get_color((band as f32 + 0.5) / levels as f32)
}
