//! The family of per-feature configuration objects.  Each one is a
//! plain attribute bag that renders itself to a single gnuplot command
//! line (or to an empty string when nothing was configured), never to
//! a malformed fragment.

use crate::gnuplot::num;

/// Render a configuration object to its gnuplot command line.
pub trait Spec {
    /// The gnuplot command for this spec, or an empty string when there
    /// is nothing to emit.
    fn repr(&self) -> String;
}

/// Optional line attributes shared by the specs that stroke something.
/// Renders as a leading-space-separated fragment, e.g.
/// ` linecolor rgb '#1B9E77' linewidth 2 dashtype 3`.
#[derive(Clone, Debug, Default)]
pub(crate) struct LineOptions {
    color: Option<String>,
    width: Option<f64>,
    dash: Option<u32>,
}

impl LineOptions {
    pub(crate) fn color(&mut self, color: &str) {
        self.color = Some(color.to_string());
    }

    pub(crate) fn width(&mut self, width: f64) {
        self.width = Some(width);
    }

    pub(crate) fn dash(&mut self, dash: u32) {
        self.dash = Some(dash);
    }

    pub(crate) fn repr(&self) -> String {
        let mut s = String::new();
        if let Some(c) = &self.color {
            s.push_str(&format!(" linecolor rgb '{}'", c));
        }
        if let Some(w) = self.width {
            s.push_str(&format!(" linewidth {}", num(w)));
        }
        if let Some(d) = self.dash {
            s.push_str(&format!(" dashtype {}", d));
        }
        s
    }
}

// ---------------------------------------------------------------------
// Axis labels
// ---------------------------------------------------------------------

/// Label of one axis (`x`, `y`, `z` or `r`).  Always renders, with an
/// empty text acting as a benign reset of the label.
#[derive(Clone, Debug)]
pub struct AxisLabelSpec {
    axis: &'static str,
    text: String,
    text_color: Option<String>,
    rotate_by: Option<f64>,
}

impl AxisLabelSpec {
    pub(crate) fn new(axis: &'static str) -> Self {
        Self { axis, text: String::new(), text_color: None, rotate_by: None }
    }

    /// Set the label text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.text = text.to_string();
        self
    }

    /// Set the color of the label text.
    pub fn text_color(&mut self, color: &str) -> &mut Self {
        self.text_color = Some(color.to_string());
        self
    }

    /// Rotate the label by the given angle in degrees.
    pub fn rotate_by(&mut self, degrees: f64) -> &mut Self {
        self.rotate_by = Some(degrees);
        self
    }
}

impl Spec for AxisLabelSpec {
    fn repr(&self) -> String {
        let mut s = format!("set {}label '{}'", self.axis, self.text);
        if let Some(c) = &self.text_color {
            s.push_str(&format!(" textcolor rgb '{}'", c));
        }
        if let Some(d) = self.rotate_by {
            s.push_str(&format!(" rotate by {}", num(d)));
        }
        s
    }
}

// ---------------------------------------------------------------------
// Border
// ---------------------------------------------------------------------

/// The frame drawn around the plot area, encoded the gnuplot way as a
/// bit sum of the visible edges.
#[derive(Clone, Debug)]
pub struct BorderSpec {
    bottom: bool,
    left: bool,
    top: bool,
    right: bool,
    front: bool,
    line: LineOptions,
}

impl BorderSpec {
    pub(crate) fn new() -> Self {
        Self {
            bottom: true,
            left: true,
            top: true,
            right: true,
            front: true,
            line: LineOptions::default(),
        }
    }

    /// Remove all edges; the border renders as `unset border` until
    /// edges are added back.
    pub fn none(&mut self) -> &mut Self {
        self.bottom = false;
        self.left = false;
        self.top = false;
        self.right = false;
        self
    }

    pub fn bottom(&mut self) -> &mut Self {
        self.bottom = true;
        self
    }

    pub fn left(&mut self) -> &mut Self {
        self.left = true;
        self
    }

    pub fn top(&mut self) -> &mut Self {
        self.top = true;
        self
    }

    pub fn right(&mut self) -> &mut Self {
        self.right = true;
        self
    }

    /// Draw the border in front of the plot elements.
    pub fn front(&mut self) -> &mut Self {
        self.front = true;
        self
    }

    /// Draw the border behind the plot elements.
    pub fn back(&mut self) -> &mut Self {
        self.front = false;
        self
    }

    pub fn line_color(&mut self, color: &str) -> &mut Self {
        self.line.color(color);
        self
    }

    pub fn line_width(&mut self, width: f64) -> &mut Self {
        self.line.width(width);
        self
    }

    pub fn line_dash(&mut self, dash: u32) -> &mut Self {
        self.line.dash(dash);
        self
    }
}

impl Spec for BorderSpec {
    fn repr(&self) -> String {
        let code = (self.bottom as u32)
            | (self.left as u32) << 1
            | (self.top as u32) << 2
            | (self.right as u32) << 3;
        if code == 0 {
            return "unset border".to_string();
        }
        format!(
            "set border {} {}{}",
            code,
            if self.front { "front" } else { "back" },
            self.line.repr()
        )
    }
}

// ---------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------

/// Grid lines across the plot area.  Hidden by default, rendering to
/// nothing until shown.
#[derive(Clone, Debug)]
pub struct GridSpec {
    shown: bool,
    front: bool,
    minor: bool,
    line: LineOptions,
}

impl GridSpec {
    pub(crate) fn new() -> Self {
        Self { shown: false, front: false, minor: false, line: LineOptions::default() }
    }

    pub fn show(&mut self) -> &mut Self {
        self.shown = true;
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.shown = false;
        self
    }

    pub fn front(&mut self) -> &mut Self {
        self.front = true;
        self
    }

    pub fn back(&mut self) -> &mut Self {
        self.front = false;
        self
    }

    /// Also draw grid lines at the minor tics.
    pub fn minor(&mut self) -> &mut Self {
        self.minor = true;
        self
    }

    pub fn line_color(&mut self, color: &str) -> &mut Self {
        self.line.color(color);
        self
    }

    pub fn line_width(&mut self, width: f64) -> &mut Self {
        self.line.width(width);
        self
    }

    pub fn line_dash(&mut self, dash: u32) -> &mut Self {
        self.line.dash(dash);
        self
    }
}

impl Spec for GridSpec {
    fn repr(&self) -> String {
        if !self.shown {
            return String::new();
        }
        let mut s = String::from("set grid xtics ytics");
        if self.minor {
            s.push_str(" mxtics mytics");
        }
        s.push_str(if self.front { " front" } else { " back" });
        s.push_str(&self.line.repr());
        s
    }
}

// ---------------------------------------------------------------------
// Fill style
// ---------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
enum FillMode {
    Empty,
    Solid,
    Pattern(u32),
}

/// Fill style of paintable plot elements (boxes, filled steps, ...).
#[derive(Clone, Debug)]
pub struct FillStyleSpec {
    mode: Option<FillMode>,
    intensity: Option<f64>,
    transparent: bool,
    border_shown: Option<bool>,
    border_color: Option<String>,
}

impl FillStyleSpec {
    pub(crate) fn new() -> Self {
        Self {
            mode: None,
            intensity: None,
            transparent: false,
            border_shown: None,
            border_color: None,
        }
    }

    pub fn empty(&mut self) -> &mut Self {
        self.mode = Some(FillMode::Empty);
        self
    }

    pub fn solid(&mut self) -> &mut Self {
        self.mode = Some(FillMode::Solid);
        self
    }

    /// Fill with the numbered gnuplot pattern.
    pub fn pattern(&mut self, number: u32) -> &mut Self {
        self.mode = Some(FillMode::Pattern(number));
        self
    }

    /// Solid fill density between 0 (background) and 1 (opaque).
    pub fn intensity(&mut self, value: f64) -> &mut Self {
        self.intensity = Some(value);
        self
    }

    pub fn transparent(&mut self) -> &mut Self {
        self.transparent = true;
        self
    }

    pub fn border_show(&mut self) -> &mut Self {
        self.border_shown = Some(true);
        self
    }

    pub fn border_hide(&mut self) -> &mut Self {
        self.border_shown = Some(false);
        self
    }

    pub fn border_color(&mut self, color: &str) -> &mut Self {
        self.border_shown = Some(true);
        self.border_color = Some(color.to_string());
        self
    }
}

impl Spec for FillStyleSpec {
    fn repr(&self) -> String {
        if self.mode.is_none() && self.border_shown.is_none() {
            return String::new();
        }
        let mut s = String::from("set style fill");
        if self.transparent {
            s.push_str(" transparent");
        }
        match self.mode {
            Some(FillMode::Empty) => s.push_str(" empty"),
            Some(FillMode::Solid) => {
                s.push_str(" solid");
                if let Some(i) = self.intensity {
                    s.push_str(&format!(" {}", num(i)));
                }
            }
            Some(FillMode::Pattern(n)) => s.push_str(&format!(" pattern {}", n)),
            None => {}
        }
        match self.border_shown {
            Some(true) => match &self.border_color {
                Some(c) => s.push_str(&format!(" border rgb '{}'", c)),
                None => s.push_str(" border"),
            },
            Some(false) => s.push_str(" noborder"),
            None => {}
        }
        s
    }
}

// ---------------------------------------------------------------------
// Histogram style
// ---------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
enum HistogramMode {
    Clustered,
    ClusteredGap(f64),
    ErrorBars,
    RowStacked,
    ColumnStacked,
}

/// Figure-level histogram layout, driving how `draw_histogram` series
/// are arranged.
#[derive(Clone, Debug)]
pub struct HistogramStyleSpec {
    mode: Option<HistogramMode>,
}

impl HistogramStyleSpec {
    pub(crate) fn new() -> Self {
        Self { mode: None }
    }

    pub fn clustered(&mut self) -> &mut Self {
        self.mode = Some(HistogramMode::Clustered);
        self
    }

    /// Clustered layout with the given gap width between clusters.
    pub fn clustered_with_gap(&mut self, gap: f64) -> &mut Self {
        self.mode = Some(HistogramMode::ClusteredGap(gap));
        self
    }

    pub fn error_bars(&mut self) -> &mut Self {
        self.mode = Some(HistogramMode::ErrorBars);
        self
    }

    pub fn row_stacked(&mut self) -> &mut Self {
        self.mode = Some(HistogramMode::RowStacked);
        self
    }

    pub fn column_stacked(&mut self) -> &mut Self {
        self.mode = Some(HistogramMode::ColumnStacked);
        self
    }
}

impl Spec for HistogramStyleSpec {
    fn repr(&self) -> String {
        match self.mode {
            None => String::new(),
            Some(HistogramMode::Clustered) => "set style histogram clustered".to_string(),
            Some(HistogramMode::ClusteredGap(g)) => {
                format!("set style histogram clustered gap {}", num(g))
            }
            Some(HistogramMode::ErrorBars) => "set style histogram errorbars".to_string(),
            Some(HistogramMode::RowStacked) => "set style histogram rowstacked".to_string(),
            Some(HistogramMode::ColumnStacked) => "set style histogram columnstacked".to_string(),
        }
    }
}

// ---------------------------------------------------------------------
// Tics
// ---------------------------------------------------------------------

/// Options applied to the tics of all axes at once.  Renders to
/// nothing until configured.
#[derive(Clone, Debug)]
pub struct TicsSpec {
    shown: Option<bool>,
    inside: Option<bool>,
    mirror: Option<bool>,
    rotate_by: Option<f64>,
    scale_major: Option<f64>,
    format: Option<String>,
}

impl TicsSpec {
    pub(crate) fn new() -> Self {
        Self {
            shown: None,
            inside: None,
            mirror: None,
            rotate_by: None,
            scale_major: None,
            format: None,
        }
    }

    pub fn show(&mut self) -> &mut Self {
        self.shown = Some(true);
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.shown = Some(false);
        self
    }

    pub fn inside(&mut self) -> &mut Self {
        self.inside = Some(true);
        self
    }

    pub fn outside(&mut self) -> &mut Self {
        self.inside = Some(false);
        self
    }

    pub fn mirror(&mut self, enable: bool) -> &mut Self {
        self.mirror = Some(enable);
        self
    }

    pub fn rotate_by(&mut self, degrees: f64) -> &mut Self {
        self.rotate_by = Some(degrees);
        self
    }

    /// Scale factor of the major tic marks relative to the default size.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.scale_major = Some(factor);
        self
    }

    /// Number format of the tic labels (gnuplot `format` syntax, e.g.
    /// `%.2f`).
    pub fn format(&mut self, fmt: &str) -> &mut Self {
        self.format = Some(fmt.to_string());
        self
    }
}

impl Spec for TicsSpec {
    fn repr(&self) -> String {
        if self.shown == Some(false) {
            return "unset tics".to_string();
        }
        let mut opts = String::new();
        if let Some(inside) = self.inside {
            opts.push_str(if inside { " in" } else { " out" });
        }
        if let Some(mirror) = self.mirror {
            opts.push_str(if mirror { " mirror" } else { " nomirror" });
        }
        if let Some(d) = self.rotate_by {
            opts.push_str(&format!(" rotate by {}", num(d)));
        }
        if let Some(f) = self.scale_major {
            opts.push_str(&format!(" scale {}", num(f)));
        }
        if let Some(f) = &self.format {
            opts.push_str(&format!(" format '{}'", f));
        }
        if opts.is_empty() && self.shown.is_none() {
            return String::new();
        }
        format!("set tics{}", opts)
    }
}

/// Major tics of one concrete axis (`x`, `x2`, `y`, `y2`, `z`, `r`).
#[derive(Clone, Debug)]
pub struct TicsSpecMajor {
    axis: &'static str,
    shown: bool,
    mirror: bool,
    inside: Option<bool>,
    rotate_by: Option<f64>,
    increment: Option<f64>,
    format: Option<String>,
}

impl TicsSpecMajor {
    pub(crate) fn new(axis: &'static str) -> Self {
        Self {
            axis,
            shown: true,
            mirror: false,
            inside: None,
            rotate_by: None,
            increment: None,
            format: None,
        }
    }

    pub fn show(&mut self) -> &mut Self {
        self.shown = true;
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.shown = false;
        self
    }

    /// Also draw these tics on the opposite side of the plot.
    pub fn mirror(&mut self, enable: bool) -> &mut Self {
        self.mirror = enable;
        self
    }

    pub fn inside(&mut self) -> &mut Self {
        self.inside = Some(true);
        self
    }

    pub fn outside(&mut self) -> &mut Self {
        self.inside = Some(false);
        self
    }

    pub fn rotate_by(&mut self, degrees: f64) -> &mut Self {
        self.rotate_by = Some(degrees);
        self
    }

    /// Distance between successive tics, instead of the automatic one.
    pub fn increment(&mut self, step: f64) -> &mut Self {
        self.increment = Some(step);
        self
    }

    pub fn format(&mut self, fmt: &str) -> &mut Self {
        self.format = Some(fmt.to_string());
        self
    }
}

impl Spec for TicsSpecMajor {
    fn repr(&self) -> String {
        if !self.shown {
            return format!("unset {}tics", self.axis);
        }
        let mut s = format!("set {}tics", self.axis);
        s.push_str(if self.mirror { " mirror" } else { " nomirror" });
        if let Some(inside) = self.inside {
            s.push_str(if inside { " in" } else { " out" });
        }
        if let Some(d) = self.rotate_by {
            s.push_str(&format!(" rotate by {}", num(d)));
        }
        if let Some(i) = self.increment {
            s.push_str(&format!(" {}", num(i)));
        }
        if let Some(f) = &self.format {
            s.push_str(&format!(" format '{}'", f));
        }
        s
    }
}

/// Minor tics of one concrete axis.
#[derive(Clone, Debug)]
pub struct TicsSpecMinor {
    axis: &'static str,
    shown: bool,
    frequency: Option<usize>,
}

impl TicsSpecMinor {
    pub(crate) fn new(axis: &'static str) -> Self {
        Self { axis, shown: true, frequency: None }
    }

    pub fn show(&mut self) -> &mut Self {
        self.shown = true;
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.shown = false;
        self
    }

    /// Number of sub-intervals between major tics, instead of the
    /// automatic choice.
    pub fn frequency(&mut self, intervals: usize) -> &mut Self {
        self.frequency = Some(intervals);
        self
    }
}

impl Spec for TicsSpecMinor {
    fn repr(&self) -> String {
        if !self.shown {
            return format!("unset m{}tics", self.axis);
        }
        match self.frequency {
            Some(n) => format!("set m{}tics {}", self.axis, n),
            None => format!("set m{}tics", self.axis),
        }
    }
}

// ---------------------------------------------------------------------
// Legend
// ---------------------------------------------------------------------

/// The key listing the plotted series.  Shown inside the top-right
/// corner by default.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    shown: bool,
    inside: bool,
    vertical_anchor: &'static str,
    horizontal_anchor: &'static str,
    horizontal_layout: bool,
    frame: Option<bool>,
    opaque: Option<bool>,
    title: Option<String>,
}

impl LegendSpec {
    pub(crate) fn new() -> Self {
        Self {
            shown: true,
            inside: true,
            vertical_anchor: "top",
            horizontal_anchor: "right",
            horizontal_layout: false,
            frame: None,
            opaque: None,
            title: None,
        }
    }

    pub fn show(&mut self) -> &mut Self {
        self.shown = true;
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.shown = false;
        self
    }

    /// Place the legend outside the plot area.
    pub fn outside(&mut self) -> &mut Self {
        self.inside = false;
        self
    }

    pub fn at_top_left(&mut self) -> &mut Self {
        self.vertical_anchor = "top";
        self.horizontal_anchor = "left";
        self
    }

    pub fn at_top_right(&mut self) -> &mut Self {
        self.vertical_anchor = "top";
        self.horizontal_anchor = "right";
        self
    }

    pub fn at_bottom_left(&mut self) -> &mut Self {
        self.vertical_anchor = "bottom";
        self.horizontal_anchor = "left";
        self
    }

    pub fn at_bottom_right(&mut self) -> &mut Self {
        self.vertical_anchor = "bottom";
        self.horizontal_anchor = "right";
        self
    }

    pub fn at_center(&mut self) -> &mut Self {
        self.vertical_anchor = "center";
        self.horizontal_anchor = "center";
        self
    }

    /// Lay the entries out in a row instead of a column.
    pub fn horizontal(&mut self) -> &mut Self {
        self.horizontal_layout = true;
        self
    }

    pub fn vertical(&mut self) -> &mut Self {
        self.horizontal_layout = false;
        self
    }

    pub fn frame_show(&mut self) -> &mut Self {
        self.frame = Some(true);
        self
    }

    pub fn frame_hide(&mut self) -> &mut Self {
        self.frame = Some(false);
        self
    }

    /// Draw the legend over the plot elements instead of behind them.
    pub fn opaque(&mut self) -> &mut Self {
        self.opaque = Some(true);
        self
    }

    pub fn transparent(&mut self) -> &mut Self {
        self.opaque = Some(false);
        self
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.title = Some(text.to_string());
        self
    }
}

impl Spec for LegendSpec {
    fn repr(&self) -> String {
        if !self.shown {
            return "unset key".to_string();
        }
        let mut s = format!(
            "set key {} {} {} {}",
            if self.inside { "inside" } else { "outside" },
            self.vertical_anchor,
            self.horizontal_anchor,
            if self.horizontal_layout { "horizontal" } else { "vertical" },
        );
        match self.frame {
            Some(true) => s.push_str(" box"),
            Some(false) => s.push_str(" nobox"),
            None => {}
        }
        match self.opaque {
            Some(true) => s.push_str(" opaque"),
            Some(false) => s.push_str(" noopaque"),
            None => {}
        }
        if let Some(t) = &self.title {
            s.push_str(&format!(" title '{}'", t));
        }
        s
    }
}

// ---------------------------------------------------------------------
// Plot elements
// ---------------------------------------------------------------------

/// One drawable series or expression bound to a rendering style.
/// Created by the `draw` family on [`crate::Figure`]; the returned
/// mutable reference lets the caller override the defaults.
#[derive(Clone, Debug)]
pub struct PlotSpec {
    what: String,
    with: String,
    line_style: Option<usize>,
    line: LineOptions,
    point_type: Option<u32>,
    point_size: Option<f64>,
    label: Option<String>,
}

impl PlotSpec {
    pub(crate) fn new(what: &str, with: &str) -> Self {
        Self {
            what: what.to_string(),
            with: with.to_string(),
            line_style: None,
            line: LineOptions::default(),
            point_type: None,
            point_size: None,
            label: None,
        }
    }

    /// Select one of the palette line styles (1-based).  Every drawn
    /// element gets its position as the default, so successive series
    /// are visually distinct without caller intervention.
    pub fn line_style(&mut self, index: usize) -> &mut Self {
        self.line_style = Some(index);
        self
    }

    pub fn line_color(&mut self, color: &str) -> &mut Self {
        self.line.color(color);
        self
    }

    pub fn line_width(&mut self, width: f64) -> &mut Self {
        self.line.width(width);
        self
    }

    pub fn dash_type(&mut self, dash: u32) -> &mut Self {
        self.line.dash(dash);
        self
    }

    pub fn point_type(&mut self, point: u32) -> &mut Self {
        self.point_type = Some(point);
        self
    }

    pub fn point_size(&mut self, size: f64) -> &mut Self {
        self.point_size = Some(size);
        self
    }

    /// Text shown for this series in the legend.
    pub fn label(&mut self, text: &str) -> &mut Self {
        self.label = Some(text.to_string());
        self
    }
}

impl Spec for PlotSpec {
    fn repr(&self) -> String {
        let mut s = self.what.clone();
        if !self.with.is_empty() {
            s.push_str(&format!(" with {}", self.with));
        }
        if let Some(i) = self.line_style {
            s.push_str(&format!(" linestyle {}", i));
        }
        s.push_str(&self.line.repr());
        if let Some(p) = self.point_type {
            s.push_str(&format!(" pointtype {}", p));
        }
        if let Some(p) = self.point_size {
            s.push_str(&format!(" pointsize {}", num(p)));
        }
        if let Some(l) = &self.label {
            s.push_str(&format!(" title '{}'", l));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_label_always_renders() {
        let mut label = AxisLabelSpec::new("x");
        assert_eq!(label.repr(), "set xlabel ''");
        label.text("time (s)").rotate_by(45.0);
        assert_eq!(label.repr(), "set xlabel 'time (s)' rotate by 45");
    }

    #[test]
    fn border_edge_encoding() {
        let mut border = BorderSpec::new();
        assert_eq!(border.repr(), "set border 15 front");
        border.none().bottom().left();
        assert_eq!(border.repr(), "set border 3 front");
        border.none();
        assert_eq!(border.repr(), "unset border");
    }

    #[test]
    fn border_line_options() {
        let mut border = BorderSpec::new();
        border.back().line_color("#404040").line_width(2.0);
        assert_eq!(
            border.repr(),
            "set border 15 back linecolor rgb '#404040' linewidth 2"
        );
    }

    #[test]
    fn grid_hidden_by_default() {
        let mut grid = GridSpec::new();
        assert_eq!(grid.repr(), "");
        grid.show().minor().front();
        assert_eq!(grid.repr(), "set grid xtics ytics mxtics mytics front");
    }

    #[test]
    fn fill_style_variants() {
        let mut fill = FillStyleSpec::new();
        assert_eq!(fill.repr(), "");
        fill.solid().border_hide();
        assert_eq!(fill.repr(), "set style fill solid noborder");
        fill.intensity(0.5);
        assert_eq!(fill.repr(), "set style fill solid 0.5 noborder");
        let mut fill = FillStyleSpec::new();
        fill.transparent().pattern(4).border_color("#000000");
        assert_eq!(
            fill.repr(),
            "set style fill transparent pattern 4 border rgb '#000000'"
        );
    }

    #[test]
    fn histogram_style_variants() {
        let mut h = HistogramStyleSpec::new();
        assert_eq!(h.repr(), "");
        h.clustered_with_gap(2.0);
        assert_eq!(h.repr(), "set style histogram clustered gap 2");
        h.row_stacked();
        assert_eq!(h.repr(), "set style histogram rowstacked");
    }

    #[test]
    fn general_tics() {
        let mut tics = TicsSpec::new();
        assert_eq!(tics.repr(), "");
        tics.show();
        assert_eq!(tics.repr(), "set tics");
        tics.outside().rotate_by(-30.0).format("%.2f");
        assert_eq!(tics.repr(), "set tics out rotate by -30 format '%.2f'");
        tics.hide();
        assert_eq!(tics.repr(), "unset tics");
    }

    #[test]
    fn major_and_minor_tics() {
        let mut xtics = TicsSpecMajor::new("x");
        assert_eq!(xtics.repr(), "set xtics nomirror");
        xtics.increment(0.5).format("%g");
        assert_eq!(xtics.repr(), "set xtics nomirror 0.5 format '%g'");
        xtics.hide();
        assert_eq!(xtics.repr(), "unset xtics");

        let mut mytics = TicsSpecMinor::new("y2");
        assert_eq!(mytics.repr(), "set my2tics");
        mytics.frequency(5);
        assert_eq!(mytics.repr(), "set my2tics 5");
        mytics.hide();
        assert_eq!(mytics.repr(), "unset my2tics");
    }

    #[test]
    fn legend_defaults_and_overrides() {
        let mut legend = LegendSpec::new();
        assert_eq!(legend.repr(), "set key inside top right vertical");
        legend.outside().at_bottom_left().horizontal().frame_show().title("runs");
        assert_eq!(
            legend.repr(),
            "set key outside bottom left horizontal box title 'runs'"
        );
        legend.hide();
        assert_eq!(legend.repr(), "unset key");
    }

    #[test]
    fn plot_spec_rendering() {
        let mut spec = PlotSpec::new("'plot0.dat' index 0", "lines");
        spec.line_style(1);
        assert_eq!(spec.repr(), "'plot0.dat' index 0 with lines linestyle 1");
        spec.line_width(3.0).label("speed");
        assert_eq!(
            spec.repr(),
            "'plot0.dat' index 0 with lines linestyle 1 linewidth 3 title 'speed'"
        );
    }

    #[test]
    fn plot_spec_empty_with_keyword() {
        // Histogram series carry no `with` clause; the figure-level
        // data style takes over.
        let mut spec = PlotSpec::new("'plot0.dat' index 0", "");
        spec.line_style(2);
        assert_eq!(spec.repr(), "'plot0.dat' index 0 linestyle 2");
    }
}
