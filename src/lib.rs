//! [Rust][] interface to the [gnuplot][] plotting engine.
//!
//! Usage
//! -----
//!
//! A [`Figure`] accumulates plot configuration and data series, renders
//! them to a gnuplot script plus a data file, and hands both to the
//! `gnuplot` binary, interactively with [`Figure::show`] or to an
//! image file with [`Figure::save`].
//!
//! ```
//! use gnufig::Figure;
//!
//! let mut fig = Figure::new();
//! fig.xlabel("x");
//! fig.ylabel("sin(x)");
//! let x: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
//! let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();
//! fig.draw_curve(&x, &y).label("sine");
//! let script = fig.repr();
//! assert!(script.contains("plot "));
//! ```
//!
//! [Rust]: https://www.rust-lang.org/
//! [gnuplot]: http://www.gnuplot.info/

use std::{
    fmt::{Display, Formatter},
    fs,
    sync::atomic::{AtomicUsize, Ordering},
};

use lazy_static::lazy_static;

mod gnuplot;
mod palettes;
mod specs;

pub use palettes::DEFAULT_PALETTE;
pub use specs::{
    AxisLabelSpec, BorderSpec, FillStyleSpec, GridSpec, HistogramStyleSpec, LegendSpec, PlotSpec,
    Spec, TicsSpec, TicsSpecMajor, TicsSpecMinor,
};

/// Plot width used when the caller leaves the size at 0.
pub const DEFAULT_FIGURE_WIDTH: usize = 640;
/// Plot height used when the caller leaves the size at 0.
pub const DEFAULT_FIGURE_HEIGHT: usize = 480;

/// Relative box width configured on every new figure.
const DEFAULT_BOXWIDTH_RELATIVE: f64 = 0.9;

/// Possible errors of gnufig operations.
#[derive(Debug)]
pub enum Error {
    /// The `gnuplot` binary was not found on the PATH.
    NoGnuplot,
    /// Failure writing the script or data file, or launching gnuplot.
    Io(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::NoGnuplot => write!(
                f,
                "The gnuplot program has not been found.\n\
                 Please install it.  See http://www.gnuplot.info/"
            ),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Process-wide registry handing out figure ids.  The id makes the
/// temporary file names of concurrently living figures distinct.
struct FigureRegistry {
    counter: AtomicUsize,
}

impl FigureRegistry {
    fn new() -> Self {
        Self { counter: AtomicUsize::new(0) }
    }

    fn next_id(&self) -> usize {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}

lazy_static! {
    static ref REGISTRY: FigureRegistry = FigureRegistry::new();
}

/// The top level container accumulating the configuration and data of
/// one plot.
pub struct Figure {
    /// Id from the process-wide registry, embedded in the temporary
    /// file names.
    id: usize,
    autoclean: bool,
    palette: String,
    width: usize,
    height: usize,
    script_filename: String,
    data_filename: String,
    /// Concatenated dataset blocks of every vector `draw` call.
    data: String,
    num_datasets: usize,
    x_range: String,
    y_range: String,
    border: BorderSpec,
    grid: GridSpec,
    style_fill: FillStyleSpec,
    style_histogram: HistogramStyleSpec,
    tics: TicsSpec,
    xtics_major_bottom: TicsSpecMajor,
    xtics_major_top: TicsSpecMajor,
    xtics_minor_bottom: TicsSpecMinor,
    xtics_minor_top: TicsSpecMinor,
    ytics_major_left: TicsSpecMajor,
    ytics_major_right: TicsSpecMajor,
    ytics_minor_left: TicsSpecMinor,
    ytics_minor_right: TicsSpecMinor,
    ztics_major: TicsSpecMajor,
    ztics_minor: TicsSpecMinor,
    rtics_major: TicsSpecMajor,
    rtics_minor: TicsSpecMinor,
    legend: LegendSpec,
    samples: String,
    x_label: AxisLabelSpec,
    y_label: AxisLabelSpec,
    z_label: AxisLabelSpec,
    r_label: AxisLabelSpec,
    box_width: String,
    plot_specs: Vec<PlotSpec>,
    custom_cmds: Vec<String>,
}

impl Figure {
    /// Return a new `Figure` with the default configuration: major and
    /// minor tics on the bottom and left axes only, solid fill without
    /// border, and a relative box width of 0.9.
    pub fn new() -> Figure {
        let id = REGISTRY.next_id();
        let mut fig = Figure {
            id,
            autoclean: true,
            palette: String::new(),
            width: 0,
            height: 0,
            script_filename: format!("show{}.plt", id),
            data_filename: format!("plot{}.dat", id),
            data: String::new(),
            num_datasets: 0,
            x_range: String::new(),
            y_range: String::new(),
            border: BorderSpec::new(),
            grid: GridSpec::new(),
            style_fill: FillStyleSpec::new(),
            style_histogram: HistogramStyleSpec::new(),
            tics: TicsSpec::new(),
            xtics_major_bottom: TicsSpecMajor::new("x"),
            xtics_major_top: TicsSpecMajor::new("x2"),
            xtics_minor_bottom: TicsSpecMinor::new("x"),
            xtics_minor_top: TicsSpecMinor::new("x2"),
            ytics_major_left: TicsSpecMajor::new("y"),
            ytics_major_right: TicsSpecMajor::new("y2"),
            ytics_minor_left: TicsSpecMinor::new("y"),
            ytics_minor_right: TicsSpecMinor::new("y2"),
            ztics_major: TicsSpecMajor::new("z"),
            ztics_minor: TicsSpecMinor::new("z"),
            rtics_major: TicsSpecMajor::new("r"),
            rtics_minor: TicsSpecMinor::new("r"),
            legend: LegendSpec::new(),
            samples: String::new(),
            x_label: AxisLabelSpec::new("x"),
            y_label: AxisLabelSpec::new("y"),
            z_label: AxisLabelSpec::new("z"),
            r_label: AxisLabelSpec::new("r"),
            box_width: String::new(),
            plot_specs: Vec::new(),
            custom_cmds: Vec::new(),
        };

        // Show only major and minor xtics and ytics on the
        // conventional sides.
        fig.xtics_major_bottom.show();
        fig.xtics_minor_bottom.show();
        fig.ytics_major_left.show();
        fig.ytics_minor_left.show();
        fig.xtics_major_top.hide();
        fig.xtics_minor_top.hide();
        fig.ytics_major_right.hide();
        fig.ytics_minor_right.hide();
        fig.ztics_major.hide();
        fig.ztics_minor.hide();
        fig.rtics_major.hide();
        fig.rtics_minor.hide();

        fig.style_fill.solid();
        fig.style_fill.border_hide();

        fig.box_width_relative(DEFAULT_BOXWIDTH_RELATIVE);

        // Needed for draw_histogram: `with histograms` on the plot
        // line does not behave well (e.g. spurious key entries in
        // columnstacked mode), so the data style is set globally.
        fig.gnuplot("set style data histogram");

        fig
    }

    /// Identity of this figure, embedded in its temporary file names.
    pub fn id(&self) -> usize {
        self.id
    }

    //==================================================================
    // CONFIGURATION
    //==================================================================

    /// Set the palette of colors for the plot.  Any name of the
    /// built-in tables ("dark2", "parula", "jet", "pastel1",
    /// "viridis"); unknown names fall back to the default.
    pub fn palette(&mut self, name: &str) {
        self.palette = name.to_string();
    }

    /// Set the size of the plot in points (1 inch = 72 points).
    pub fn size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Set the label of the x-axis and return its specs for further
    /// customization.
    pub fn xlabel(&mut self, label: &str) -> &mut AxisLabelSpec {
        self.x_label.text(label);
        &mut self.x_label
    }

    /// Set the label of the y-axis and return its specs for further
    /// customization.
    pub fn ylabel(&mut self, label: &str) -> &mut AxisLabelSpec {
        self.y_label.text(label);
        &mut self.y_label
    }

    /// Set the x-range of the plot.  The bounds are not validated;
    /// gnuplot is the arbiter of their meaning.
    pub fn xrange(&mut self, min: f64, max: f64) {
        self.x_range = format!("[{}:{}]", gnuplot::num(min), gnuplot::num(max));
    }

    /// Set the y-range of the plot.
    pub fn yrange(&mut self, min: f64, max: f64) {
        self.y_range = format!("[{}:{}]", gnuplot::num(min), gnuplot::num(max));
    }

    /// Default width of boxes, in units of the x axis.  Mutually
    /// exclusive with [`Figure::box_width_relative`]; the last call
    /// wins.
    pub fn box_width_absolute(&mut self, val: f64) {
        self.box_width = format!("{} absolute", gnuplot::num(val));
    }

    /// Default width of boxes relative to putting them side by side.
    pub fn box_width_relative(&mut self, val: f64) {
        self.box_width = format!("{} relative", gnuplot::num(val));
    }

    /// Set the number of sample points for analytical plots.
    pub fn samples(&mut self, value: usize) {
        self.samples = value.to_string();
    }

    /// The border of the plot.
    pub fn border(&mut self) -> &mut BorderSpec {
        &mut self.border
    }

    /// The grid of the plot.
    pub fn grid(&mut self) -> &mut GridSpec {
        &mut self.grid
    }

    /// The fill style of paintable plot elements.
    pub fn style_fill(&mut self) -> &mut FillStyleSpec {
        &mut self.style_fill
    }

    /// The histogram style of the figure.
    pub fn style_histogram(&mut self) -> &mut HistogramStyleSpec {
        &mut self.style_histogram
    }

    /// The legend of the plot.
    pub fn legend(&mut self) -> &mut LegendSpec {
        &mut self.legend
    }

    //==================================================================
    // TICS
    //==================================================================

    /// Options applied to the tics of all axes at once.
    pub fn tics(&mut self) -> &mut TicsSpec {
        &mut self.tics
    }

    /// Major xtics on the bottom axis (the conventional ones).
    pub fn xtics(&mut self) -> &mut TicsSpecMajor {
        self.xtics_major_bottom()
    }

    /// Major ytics on the left axis (the conventional ones).
    pub fn ytics(&mut self) -> &mut TicsSpecMajor {
        self.ytics_major_left()
    }

    /// Major ztics.
    pub fn ztics(&mut self) -> &mut TicsSpecMajor {
        self.ztics_major()
    }

    /// Major rtics.
    pub fn rtics(&mut self) -> &mut TicsSpecMajor {
        self.rtics_major()
    }

    pub fn xtics_major_bottom(&mut self) -> &mut TicsSpecMajor {
        &mut self.xtics_major_bottom
    }

    pub fn xtics_major_top(&mut self) -> &mut TicsSpecMajor {
        &mut self.xtics_major_top
    }

    pub fn xtics_minor_bottom(&mut self) -> &mut TicsSpecMinor {
        &mut self.xtics_minor_bottom
    }

    pub fn xtics_minor_top(&mut self) -> &mut TicsSpecMinor {
        &mut self.xtics_minor_top
    }

    pub fn ytics_major_left(&mut self) -> &mut TicsSpecMajor {
        &mut self.ytics_major_left
    }

    pub fn ytics_major_right(&mut self) -> &mut TicsSpecMajor {
        &mut self.ytics_major_right
    }

    pub fn ytics_minor_left(&mut self) -> &mut TicsSpecMinor {
        &mut self.ytics_minor_left
    }

    pub fn ytics_minor_right(&mut self) -> &mut TicsSpecMinor {
        &mut self.ytics_minor_right
    }

    pub fn ztics_major(&mut self) -> &mut TicsSpecMajor {
        &mut self.ztics_major
    }

    pub fn ztics_minor(&mut self) -> &mut TicsSpecMinor {
        &mut self.ztics_minor
    }

    pub fn rtics_major(&mut self) -> &mut TicsSpecMajor {
        &mut self.rtics_major
    }

    pub fn rtics_minor(&mut self) -> &mut TicsSpecMinor {
        &mut self.rtics_minor
    }

    //==================================================================
    // DRAWING
    //==================================================================

    /// Draw the given gnuplot expression with the given style, e.g.
    /// `fig.draw("sin(x)*cos(x)", "linespoints")`.  Returns the plot
    /// element so the caller can override its styling.
    pub fn draw(&mut self, what: &str, with: &str) -> &mut PlotSpec {
        let mut spec = PlotSpec::new(what, with);
        // Default line style 1, 2, 3, ... as new elements are drawn.
        spec.line_style(self.plot_specs.len() + 1);
        self.plot_specs.push(spec);
        let last = self.plot_specs.len() - 1;
        &mut self.plot_specs[last]
    }

    /// Draw the given columns with the given style, e.g.
    /// `fig.draw_vectors("lines", &[&x, &y])`.  The columns are written
    /// as the next indexed dataset of the figure's data file.  Lengths
    /// are not validated; ragged input yields ragged rows for gnuplot
    /// to judge.
    pub fn draw_vectors(&mut self, with: &str, columns: &[&[f64]]) -> &mut PlotSpec {
        gnuplot::write_dataset(&mut self.data, self.num_datasets, columns);
        let what = format!("'{}' index {}", self.data_filename, self.num_datasets);
        self.num_datasets += 1;
        self.draw(&what, with)
    }

    /// Draw a curve through the given points.
    pub fn draw_curve(&mut self, x: impl AsRef<[f64]>, y: impl AsRef<[f64]>) -> &mut PlotSpec {
        self.draw_vectors("lines", &[x.as_ref(), y.as_ref()])
    }

    /// Draw a curve with point markers through the given points.
    pub fn draw_curve_with_points(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("linespoints", &[x.as_ref(), y.as_ref()])
    }

    /// Draw a curve with error bars along *x* of half-width `xdelta`.
    pub fn draw_curve_with_error_bars_x(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        xdelta: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("xerrorlines", &[x.as_ref(), y.as_ref(), xdelta.as_ref()])
    }

    /// Draw a curve with error bars along *x* spanning `xlow..xhigh`.
    pub fn draw_curve_with_error_bars_x_minmax(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        xlow: impl AsRef<[f64]>,
        xhigh: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors(
            "xerrorlines",
            &[x.as_ref(), y.as_ref(), xlow.as_ref(), xhigh.as_ref()],
        )
    }

    /// Draw a curve with error bars along *y* of half-height `ydelta`.
    pub fn draw_curve_with_error_bars_y(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        ydelta: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("yerrorlines", &[x.as_ref(), y.as_ref(), ydelta.as_ref()])
    }

    /// Draw a curve with error bars along *y* spanning `ylow..yhigh`.
    pub fn draw_curve_with_error_bars_y_minmax(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        ylow: impl AsRef<[f64]>,
        yhigh: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors(
            "yerrorlines",
            &[x.as_ref(), y.as_ref(), ylow.as_ref(), yhigh.as_ref()],
        )
    }

    /// Draw a curve with error bars along *x* and *y*.
    pub fn draw_curve_with_error_bars_xy(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        xdelta: impl AsRef<[f64]>,
        ydelta: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors(
            "xyerrorlines",
            &[x.as_ref(), y.as_ref(), xdelta.as_ref(), ydelta.as_ref()],
        )
    }

    /// Draw a curve with error bars along *x* and *y* given as bounds.
    pub fn draw_curve_with_error_bars_xy_minmax(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        xlow: impl AsRef<[f64]>,
        xhigh: impl AsRef<[f64]>,
        ylow: impl AsRef<[f64]>,
        yhigh: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors(
            "xyerrorlines",
            &[
                x.as_ref(),
                y.as_ref(),
                xlow.as_ref(),
                xhigh.as_ref(),
                ylow.as_ref(),
                yhigh.as_ref(),
            ],
        )
    }

    /// Draw boxes at the given points.
    pub fn draw_boxes(&mut self, x: impl AsRef<[f64]>, y: impl AsRef<[f64]>) -> &mut PlotSpec {
        self.draw_vectors("boxes", &[x.as_ref(), y.as_ref()])
    }

    /// Draw boxes with an explicit width per box.
    pub fn draw_boxes_with_widths(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        xwidth: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("boxes", &[x.as_ref(), y.as_ref(), xwidth.as_ref()])
    }

    /// Draw boxes with error bars along *y* of half-height `ydelta`.
    pub fn draw_boxes_with_error_bars_y(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        ydelta: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("boxerrorbars", &[x.as_ref(), y.as_ref(), ydelta.as_ref()])
    }

    /// Draw boxes with error bars along *y* spanning `ylow..yhigh`.
    pub fn draw_boxes_with_error_bars_y_minmax(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        ylow: impl AsRef<[f64]>,
        yhigh: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors(
            "boxerrorbars",
            &[x.as_ref(), y.as_ref(), ylow.as_ref(), yhigh.as_ref()],
        )
    }

    /// Draw error bars along *x* of half-width `xdelta`.
    pub fn draw_error_bars_x(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        xdelta: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("xerrorbars", &[x.as_ref(), y.as_ref(), xdelta.as_ref()])
    }

    /// Draw error bars along *x* spanning `xlow..xhigh`.
    pub fn draw_error_bars_x_minmax(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        xlow: impl AsRef<[f64]>,
        xhigh: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors(
            "xerrorbars",
            &[x.as_ref(), y.as_ref(), xlow.as_ref(), xhigh.as_ref()],
        )
    }

    /// Draw error bars along *y* of half-height `ydelta`.
    pub fn draw_error_bars_y(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        ydelta: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("yerrorbars", &[x.as_ref(), y.as_ref(), ydelta.as_ref()])
    }

    /// Draw error bars along *y* spanning `ylow..yhigh`.
    pub fn draw_error_bars_y_minmax(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        ylow: impl AsRef<[f64]>,
        yhigh: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors(
            "yerrorbars",
            &[x.as_ref(), y.as_ref(), ylow.as_ref(), yhigh.as_ref()],
        )
    }

    /// Draw error bars along *x* and *y*.
    pub fn draw_error_bars_xy(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        xdelta: impl AsRef<[f64]>,
        ydelta: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors(
            "xyerrorbars",
            &[x.as_ref(), y.as_ref(), xdelta.as_ref(), ydelta.as_ref()],
        )
    }

    /// Draw error bars along *x* and *y* given as bounds.
    pub fn draw_error_bars_xy_minmax(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
        xlow: impl AsRef<[f64]>,
        xhigh: impl AsRef<[f64]>,
        ylow: impl AsRef<[f64]>,
        yhigh: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors(
            "xyerrorbars",
            &[
                x.as_ref(),
                y.as_ref(),
                xlow.as_ref(),
                xhigh.as_ref(),
                ylow.as_ref(),
                yhigh.as_ref(),
            ],
        )
    }

    /// Draw steps through the given points.  Identical to
    /// [`Figure::draw_steps_change_first_x`].
    pub fn draw_steps(&mut self, x: impl AsRef<[f64]>, y: impl AsRef<[f64]>) -> &mut PlotSpec {
        self.draw_steps_change_first_x(x, y)
    }

    /// Draw steps changing along *x* first.
    pub fn draw_steps_change_first_x(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("steps", &[x.as_ref(), y.as_ref()])
    }

    /// Draw steps changing along *y* first.
    pub fn draw_steps_change_first_y(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("fsteps", &[x.as_ref(), y.as_ref()])
    }

    /// Draw steps centered on the x values, histogram style.
    pub fn draw_steps_histogram(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("histeps", &[x.as_ref(), y.as_ref()])
    }

    /// Draw steps with the area below them filled.
    pub fn draw_steps_filled(
        &mut self,
        x: impl AsRef<[f64]>,
        y: impl AsRef<[f64]>,
    ) -> &mut PlotSpec {
        self.draw_vectors("fillsteps", &[x.as_ref(), y.as_ref()])
    }

    /// Draw dots at the given points.
    pub fn draw_dots(&mut self, x: impl AsRef<[f64]>, y: impl AsRef<[f64]>) -> &mut PlotSpec {
        self.draw_vectors("dots", &[x.as_ref(), y.as_ref()])
    }

    /// Draw point markers at the given points.
    pub fn draw_points(&mut self, x: impl AsRef<[f64]>, y: impl AsRef<[f64]>) -> &mut PlotSpec {
        self.draw_vectors("points", &[x.as_ref(), y.as_ref()])
    }

    /// Draw vertical impulses at the given points.
    pub fn draw_impulses(&mut self, x: impl AsRef<[f64]>, y: impl AsRef<[f64]>) -> &mut PlotSpec {
        self.draw_vectors("impulses", &[x.as_ref(), y.as_ref()])
    }

    /// Draw a histogram of the given values.  The style keyword is
    /// left empty: the figure-level `set style data histogram` command
    /// emitted by every figure is what makes this render correctly.
    pub fn draw_histogram(&mut self, y: impl AsRef<[f64]>) -> &mut PlotSpec {
        self.draw_vectors("", &[y.as_ref()])
    }

    //==================================================================
    // OUTPUT
    //==================================================================

    /// Queue a raw gnuplot command to be executed before the plotting
    /// calls, in the order given.
    pub fn gnuplot(&mut self, command: &str) {
        self.custom_cmds.push(command.to_string());
    }

    /// Convert the figure into its gnuplot script text.  Idempotent:
    /// rendering advances no counters and can be repeated freely.
    pub fn repr(&self) -> String {
        let mut script = String::new();

        gnuplot::banner(&mut script, "SETUP COMMANDS");
        script.push_str(&gnuplot::command_value_str("set xrange", &self.x_range));
        script.push_str(&gnuplot::command_value_str("set yrange", &self.y_range));
        let setup: [&dyn Spec; 22] = [
            &self.x_label,
            &self.y_label,
            &self.z_label,
            &self.r_label,
            &self.border,
            &self.grid,
            &self.style_fill,
            &self.style_histogram,
            &self.tics,
            &self.xtics_major_bottom,
            &self.xtics_major_top,
            &self.xtics_minor_bottom,
            &self.xtics_minor_top,
            &self.ytics_major_left,
            &self.ytics_major_right,
            &self.ytics_minor_left,
            &self.ytics_minor_right,
            &self.ztics_major,
            &self.ztics_minor,
            &self.rtics_major,
            &self.rtics_minor,
            &self.legend,
        ];
        for spec in setup {
            script.push_str(&spec.repr());
            script.push('\n');
        }
        script.push_str(&gnuplot::command_value_str("set boxwidth", &self.box_width));
        script.push_str(&gnuplot::command_value_str("set samples", &self.samples));

        if !self.custom_cmds.is_empty() {
            gnuplot::banner(&mut script, "CUSTOM EXPLICIT GNUPLOT COMMANDS");
            for cmd in &self.custom_cmds {
                script.push_str(cmd);
                script.push('\n');
            }
        }

        gnuplot::banner(&mut script, "PLOT COMMANDS");
        script.push_str("plot ");
        let reprs: Vec<String> = self.plot_specs.iter().map(|p| p.repr()).collect();
        script.push_str(&reprs.join(", "));
        script.push('\n');
        script
    }

    /// The full script written by `show`: palette, interactive
    /// terminal, plot commands, trailing blank line.
    fn show_script(&self) -> String {
        let mut script = String::new();
        let palette = if self.palette.is_empty() { DEFAULT_PALETTE } else { &self.palette };
        gnuplot::palette_cmd(&mut script, palette);
        let width = if self.width == 0 { DEFAULT_FIGURE_WIDTH } else { self.width };
        let height = if self.height == 0 { DEFAULT_FIGURE_HEIGHT } else { self.height };
        let size = gnuplot::size_str(width, height, false);
        gnuplot::show_terminal_cmd(&mut script, &size);
        script.push_str(&self.repr());
        // Trailing blank line; gnuplot chokes on an abrupt EOF.
        script.push('\n');
        script
    }

    /// The full script written by `save` for the given sanitized path
    /// and extension.
    fn save_script(&self, cleaned: &str, extension: &str) -> String {
        let mut script = String::new();
        let palette = if self.palette.is_empty() { DEFAULT_PALETTE } else { &self.palette };
        gnuplot::palette_cmd(&mut script, palette);
        let width = if self.width == 0 { DEFAULT_FIGURE_WIDTH } else { self.width };
        let height = if self.height == 0 { DEFAULT_FIGURE_HEIGHT } else { self.height };
        // The pdf terminal sizes in inches, all others in pixels.
        let size = gnuplot::size_str(width, height, extension == "pdf");
        gnuplot::save_terminal_cmd(&mut script, extension, &size);
        gnuplot::output_cmd(&mut script, cleaned);
        script.push_str(&self.repr());
        script.push('\n');
        script.push_str("set output\n");
        script.push('\n');
        script
    }

    /// Show the plot in a pop-up window, blocking until gnuplot exits.
    /// Removes the temporary files afterwards unless
    /// [`Figure::autoclean`] was disabled.
    pub fn show(&self) -> Result<(), Error> {
        fs::write(&self.script_filename, self.show_script())?;
        self.save_plot_data()?;
        gnuplot::run_script(&self.script_filename, true)?;
        if self.autoclean {
            self.cleanup();
        }
        Ok(())
    }

    /// Save the plot in a file whose extension selects the format:
    /// `pdf`, `eps`, `svg`, `png` and `jpeg` are recognized, anything
    /// else is handed to gnuplot verbatim.  Removes the temporary
    /// files afterwards unless [`Figure::autoclean`] was disabled.
    pub fn save(&self, filename: &str) -> Result<(), Error> {
        let cleaned = gnuplot::clean_path(filename);
        let extension = gnuplot::extension_of(&cleaned);
        fs::write(&self.script_filename, self.save_script(&cleaned, extension))?;
        self.save_plot_data()?;
        gnuplot::run_script(&self.script_filename, false)?;
        if self.autoclean {
            self.cleanup();
        }
        Ok(())
    }

    /// Write the accumulated plot data to the figure's data file.
    /// Writes nothing when no vector data was drawn.
    pub fn save_plot_data(&self) -> Result<(), Error> {
        if !self.data.is_empty() {
            fs::write(&self.data_filename, &self.data)?;
        }
        Ok(())
    }

    /// Toggle automatic removal of the temporary script and data files
    /// after `show`/`save` (enabled by default).  Call
    /// [`Figure::cleanup`] to remove them manually.
    pub fn autoclean(&mut self, enable: bool) {
        self.autoclean = enable;
    }

    /// Delete the script and data files.  Safe to call at any time;
    /// missing files are not an error.
    pub fn cleanup(&self) {
        let _ = fs::remove_file(&self.script_filename);
        let _ = fs::remove_file(&self.data_filename);
    }
}

impl Default for Figure {
    fn default() -> Self {
        Figure::new()
    }
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_script_structure() {
        let fig = Figure::new();
        let r = fig.repr();
        assert!(r.contains("# SETUP COMMANDS"));
        assert!(r.contains("# CUSTOM EXPLICIT GNUPLOT COMMANDS"));
        assert!(r.contains("# PLOT COMMANDS"));
        assert!(r.ends_with("plot \n"));
        // Benign defaults for the unconfigured slots.
        assert!(r.contains("set xlabel ''\n"));
        assert!(r.contains("set rlabel ''\n"));
        assert!(r.contains("set border 15 front\n"));
        assert!(r.contains("set style fill solid noborder\n"));
        assert!(r.contains("set xtics nomirror\n"));
        assert!(r.contains("unset x2tics\n"));
        assert!(r.contains("unset my2tics\n"));
        assert!(r.contains("unset ztics\n"));
        assert!(r.contains("set key inside top right vertical\n"));
        assert!(r.contains("set boxwidth 0.9 relative\n"));
    }

    #[test]
    fn setup_sections_keep_their_order() {
        let mut fig = Figure::new();
        fig.xrange(0.0, 1.0);
        fig.yrange(-1.0, 1.0);
        fig.samples(500);
        let r = fig.repr();
        let pos = |needle: &str| r.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
        let order = [
            pos("set xrange [0:1]"),
            pos("set yrange [-1:1]"),
            pos("set xlabel"),
            pos("set ylabel"),
            pos("set zlabel"),
            pos("set rlabel"),
            pos("set border"),
            pos("set style fill"),
            pos("set xtics nomirror"),
            pos("unset x2tics"),
            pos("set mxtics"),
            pos("unset mx2tics"),
            pos("set ytics nomirror"),
            pos("unset y2tics"),
            pos("set mytics"),
            pos("unset my2tics"),
            pos("unset ztics"),
            pos("unset mztics"),
            pos("unset rtics"),
            pos("unset mrtics"),
            pos("set key"),
            pos("set boxwidth"),
            pos("set samples 500"),
            pos("set style data histogram"),
            pos("plot "),
        ];
        for pair in order.windows(2) {
            assert!(pair[0] < pair[1], "section order violated");
        }
    }

    #[test]
    fn datasets_are_indexed_in_call_order() {
        let mut fig = Figure::new();
        fig.draw_curve(&[0.0, 1.0], &[1.0, 2.0]);
        fig.draw_points(&[0.0, 1.0], &[3.0, 4.0]);
        fig.draw_boxes(&[0.0, 1.0], &[5.0, 6.0]);
        for i in 0..3 {
            assert!(fig.data.contains(&format!("# DATASET #{}", i)));
        }
        let r = fig.repr();
        let i0 = r.find("index 0 with lines").unwrap();
        let i1 = r.find("index 1 with points").unwrap();
        let i2 = r.find("index 2 with boxes").unwrap();
        assert!(i0 < i1 && i1 < i2);
        // One double-blank separator per dataset block.
        assert_eq!(fig.data.matches("\n\n\n").count(), 3);
    }

    #[test]
    fn default_line_styles_follow_draw_order() {
        let mut fig = Figure::new();
        fig.draw_curve(&[0.0], &[0.0]);
        fig.draw_curve(&[0.0], &[0.0]);
        fig.draw_curve(&[0.0], &[0.0]);
        let r = fig.repr();
        assert!(r.contains("index 0 with lines linestyle 1"));
        assert!(r.contains("index 1 with lines linestyle 2"));
        assert!(r.contains("index 2 with lines linestyle 3"));
    }

    #[test]
    fn style_override_is_local_to_one_element() {
        let mut fig = Figure::new();
        fig.draw_curve(&[0.0], &[0.0]);
        fig.draw_curve(&[0.0], &[0.0]).line_width(5.0).label("wide");
        let r = fig.repr();
        assert!(r.contains("index 0 with lines linestyle 1,"));
        assert!(r.contains("index 1 with lines linestyle 2 linewidth 5 title 'wide'"));
    }

    #[test]
    fn expression_form_uses_no_data_file() {
        let mut fig = Figure::new();
        fig.draw("sin(x)", "lines");
        assert!(fig.data.is_empty());
        assert!(fig.repr().contains("plot sin(x) with lines linestyle 1\n"));
    }

    #[test]
    fn box_width_last_write_wins() {
        let mut fig = Figure::new();
        fig.box_width_absolute(2.0);
        fig.box_width_relative(0.5);
        let r = fig.repr();
        assert!(r.contains("set boxwidth 0.5 relative\n"));
        assert!(!r.contains("absolute"));
    }

    #[test]
    fn histogram_style_command_appears_once() {
        let mut fig = Figure::new();
        fig.draw_histogram(&[1.0, 2.0, 3.0]);
        fig.draw_histogram(&[4.0, 5.0, 6.0]);
        let r = fig.repr();
        assert_eq!(r.matches("set style data histogram").count(), 1);
        // Histogram elements carry no `with` clause.
        assert!(r.contains("index 0 linestyle 1"));
        assert!(r.contains("index 1 linestyle 2"));
    }

    #[test]
    fn repr_is_idempotent() {
        let mut fig = Figure::new();
        fig.draw_curve(&[0.0, 1.0], &[1.0, 0.0]);
        fig.grid().show();
        assert_eq!(fig.repr(), fig.repr());
    }

    #[test]
    fn show_script_has_palette_and_terminal() {
        let fig = Figure::new();
        let s = fig.show_script();
        assert!(s.contains("GNUPLOT-palette (dark2)"));
        assert!(s.contains("set terminal qt size 640,480"));
        assert!(s.ends_with("\n\n"));
        let palette = s.find("GNUPLOT-palette").unwrap();
        let terminal = s.find("set terminal").unwrap();
        let plot = s.find("plot ").unwrap();
        assert!(palette < terminal && terminal < plot);
    }

    #[test]
    fn save_script_png_redirects_output() {
        let mut fig = Figure::new();
        fig.size(800, 600);
        let s = fig.save_script("out.png", "png");
        assert!(s.contains("set terminal pngcairo size 800,600"));
        assert!(s.contains("set output 'out.png'\n"));
        // Output is unset after the plot commands.
        let plot = s.find("plot ").unwrap();
        let unset = s.rfind("set output\n").unwrap();
        assert!(plot < unset);
    }

    #[test]
    fn save_script_pdf_sizes_in_inches() {
        let mut fig = Figure::new();
        fig.size(720, 360);
        let s = fig.save_script("out.pdf", "pdf");
        assert!(s.contains("set terminal pdfcairo size 10in,5in"));
    }

    #[test]
    fn explicit_palette_is_used() {
        let mut fig = Figure::new();
        fig.palette("viridis");
        assert!(fig.show_script().contains("GNUPLOT-palette (viridis)"));
    }

    #[test]
    fn figure_ids_do_not_collide() {
        let a = Figure::new();
        let b = Figure::new();
        assert_ne!(a.id, b.id);
        assert_ne!(a.script_filename, b.script_filename);
        assert_ne!(a.data_filename, b.data_filename);
    }

    #[test]
    fn cleanup_is_idempotent() {
        let mut fig = Figure::new();
        fig.autoclean(false);
        fig.draw_curve(&[0.0, 1.0], &[1.0, 0.0]);
        fig.save_plot_data().unwrap();
        fs::write(&fig.script_filename, fig.show_script()).unwrap();
        assert!(Path::new(&fig.script_filename).exists());
        assert!(Path::new(&fig.data_filename).exists());
        fig.cleanup();
        assert!(!Path::new(&fig.script_filename).exists());
        assert!(!Path::new(&fig.data_filename).exists());
        // Deleting already-missing files is fine.
        fig.cleanup();
    }

    #[test]
    fn save_plot_data_skips_empty_buffer() {
        let fig = Figure::new();
        fig.save_plot_data().unwrap();
        assert!(!Path::new(&fig.data_filename).exists());
    }

    #[test]
    fn labels_reach_the_script() {
        let mut fig = Figure::new();
        fig.xlabel("time (s)");
        fig.ylabel("amplitude").rotate_by(90.0);
        let r = fig.repr();
        assert!(r.contains("set xlabel 'time (s)'\n"));
        assert!(r.contains("set ylabel 'amplitude' rotate by 90\n"));
    }

    #[test]
    fn custom_commands_keep_call_order() {
        let mut fig = Figure::new();
        fig.gnuplot("set logscale y");
        fig.gnuplot("set angles degrees");
        let r = fig.repr();
        let a = r.find("set logscale y").unwrap();
        let b = r.find("set angles degrees").unwrap();
        assert!(a < b);
    }
}
