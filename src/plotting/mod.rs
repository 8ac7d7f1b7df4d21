//! Contour rendering of sampled surfaces. See [`ContourPlot`] for usage and what is drawn.

mod draw;
mod options;

pub use options::ContourOptions;

use plotters::coord;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea};
use plotters::prelude::{BitMapBackend, DrawingBackend};
use plotters::style::colors;

use std::error::Error;
use std::fmt::{self, Debug};
use std::fs::DirBuilder;
use std::io;
use std::path::Path;

use crate::grid::SurfaceGrid;

/// The drawing backend to use for rendering the plot.
pub type Backend<'a> = BitMapBackend<'a>;
/// The error type returned by drawing functions.
pub type DrawingError<'a> = DrawingAreaErrorKind<<Backend<'a> as DrawingBackend>::ErrorType>;

/// A point to highlight on a contour plot, listed in the legend by its label
#[derive(Clone, Debug)]
pub(crate) struct Marker {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// A contour plot of a [`SurfaceGrid`]. The sampled values are quantized into
/// [`levels`][ContourOptions::levels] bands and each grid cell is filled with the viridis
/// colormap color of its band, with optional markers overlaid (e.g. a computed optimum).
/// Configuration is done using [`ContourOptions`] and the image is written with
/// [`save_to_file`][Self::save_to_file].
///
/// # Examples
///
/// ```no_run
/// use ipnewt::grid::{self, SurfaceGrid};
/// use ipnewt::plotting::{ContourOptions, ContourPlot};
///
/// let x = grid::linspace(-0.5, 1.5, 100);
/// let y = grid::linspace(-0.5, 1.5, 100);
/// let surface =
///     SurfaceGrid::sample(|x, y| (1.0 - x).powi(2) + (y - x.powi(2)).powi(2), &x, &y);
///
/// ContourPlot::new(surface, ContourOptions::new().title("Rosenbrock"))
///     .marker(1.0, 1.0, "Optimal Solution")
///     .save_to_file("rosenbrock.png", true)
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ContourPlot {
    grid: SurfaceGrid,
    options: ContourOptions,
    markers: Vec<Marker>,
}

impl ContourPlot {
    /// Initializes a `ContourPlot` of the provided surface.
    pub fn new(grid: SurfaceGrid, options: ContourOptions) -> Self {
        Self {
            grid,
            options,
            markers: Vec::new(),
        }
    }

    /// Adds a labeled marker at `(x, y)` in surface coordinates.
    pub fn marker(mut self, x: f64, y: f64, label: &str) -> Self {
        self.markers.push(Marker {
            x,
            y,
            label: label.to_owned(),
        });
        self
    }

    /// Returns the surface being plotted.
    pub fn grid(&self) -> &SurfaceGrid {
        &self.grid
    }

    /// Renders the plot to a bitmap image file. Recursively creates the necessary directories if
    /// `create_dirs` is `true`.
    pub fn save_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        create_dirs: bool,
    ) -> Result<(), PlotError> {
        let path = path.as_ref();
        if create_dirs {
            if let Some(parent) = path.parent() {
                DirBuilder::new().recursive(true).create(parent)?;
            }
        }

        let plot = self.build_plot(&path)?;
        plot.present().map_err(Into::into)
    }

    /// Builds the plot and returns it (does not save to a file)
    fn build_plot<'a, P: AsRef<Path> + 'a>(
        &self,
        path: &'a P,
    ) -> Result<DrawingArea<Backend<'a>, coord::Shift>, DrawingError> {
        let root_area =
            Backend::new(path, (self.options.width, self.options.height)).into_drawing_area();

        root_area.fill(&colors::WHITE)?;

        draw::draw_contour(&self.grid, &self.options, &self.markers, &root_area)?;

        Ok(root_area)
    }
}

/// An error produced while creating or saving a plot.
#[derive(Debug)]
pub enum PlotError<'a> {
    DrawingError(DrawingError<'a>),
    IoError(io::Error),
}

impl<'a> fmt::Display for PlotError<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PlotError::DrawingError(ref e) => write!(fmt, "DrawingError({})", e),
            PlotError::IoError(ref e) => write!(fmt, "IoError({})", e),
        }
    }
}

impl<'a> Error for PlotError<'a> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            PlotError::DrawingError(ref e) => Some(e),
            PlotError::IoError(ref e) => Some(e),
        }
    }
}

impl<'a> From<DrawingError<'a>> for PlotError<'a> {
    fn from(error: DrawingError<'a>) -> Self {
        PlotError::DrawingError(error)
    }
}

impl<'a> From<io::Error> for PlotError<'a> {
    fn from(error: io::Error) -> Self {
        PlotError::IoError(error)
    }
}
