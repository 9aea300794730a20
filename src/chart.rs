//! Horizontal bar chart drawing on top of `printpdf` primitives.
//!
//! Charts are drawn straight onto a page layer with vector shapes and the
//! builtin Helvetica fonts, so no external font assets are required.  The
//! styling is fixed: black page background, bright accent bars and axis
//! labels, white title and tick text, light dashed gridlines along the value
//! axis.

use printpdf::{Color, IndirectFontRef, Line, LineDashPattern, Mm, PdfLayerReference, Point, Rgb};

use crate::aggregate::Aggregate;

/// Landscape page width (11 in).
pub const PAGE_WIDTH_MM: f64 = 279.4;
/// Landscape page height (8.5 in).
pub const PAGE_HEIGHT_MM: f64 = 215.9;

const MM_PER_PT: f64 = 0.352_778;

// Plot area margins, in millimetres.
const MARGIN_LEFT: f64 = 55.0;
const MARGIN_RIGHT: f64 = 15.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 26.0;

const TITLE_SIZE: f64 = 16.0;
const AXIS_LABEL_SIZE: f64 = 12.0;
const TICK_SIZE: f64 = 9.0;
const GROUP_LABEL_SIZE: f64 = 10.0;

/// How the value-axis tick labels are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Plain integers, e.g. `15`.
    Plain,
    /// Dollar amounts with thousands separators and no decimals, e.g.
    /// `$1,200`.
    Currency,
}

/// The fixed description of one chart page.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    /// Title drawn across the top of the page.
    pub title: &'static str,
    /// Label under the value axis.
    pub value_axis_label: &'static str,
    /// Label above the group labels.
    pub key_axis_label: &'static str,
    /// Distance between gridlines/ticks on the value axis.
    pub tick_step: f64,
    /// Tick label formatting.
    pub tick_format: TickFormat,
}

impl ChartSpec {
    /// Chart 1: record count per state.
    pub fn products_sold() -> Self {
        Self {
            title: "Top 10 States by Products Sold",
            value_axis_label: "Number of Products Sold",
            key_axis_label: "State",
            tick_step: 5.0,
            tick_format: TickFormat::Plain,
        }
    }

    /// Chart 2: earnings sum per state.
    pub fn sales_earnings() -> Self {
        Self {
            title: "Top 10 States by Sales Earnings",
            value_axis_label: "Total Earnings ($)",
            key_axis_label: "State",
            tick_step: 25.0,
            tick_format: TickFormat::Currency,
        }
    }

    fn format_tick(&self, value: f64) -> String {
        match self.tick_format {
            TickFormat::Plain => format!("{}", value.round() as i64),
            TickFormat::Currency => format!("${}", thousands(value.round() as i64)),
        }
    }
}

/// Builtin fonts registered once per document and shared by every page.
pub struct ChartFonts {
    /// Helvetica, used for labels and tick text.
    pub regular: IndirectFontRef,
    /// Helvetica-Bold, used for the title.
    pub bold: IndirectFontRef,
}

/// Draws one chart onto `layer`, covering the full page.
///
/// The caller guarantees `aggregate` is non-empty; empty aggregates never get
/// a page in the first place.
pub fn draw_chart(
    layer: &PdfLayerReference,
    fonts: &ChartFonts,
    spec: &ChartSpec,
    aggregate: &Aggregate,
) {
    let plot_x = MARGIN_LEFT;
    let plot_y = MARGIN_BOTTOM;
    let plot_w = PAGE_WIDTH_MM - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = PAGE_HEIGHT_MM - MARGIN_TOP - MARGIN_BOTTOM;

    let axis_max = axis_maximum(aggregate.max_value(), spec.tick_step);

    // Page background.
    layer.set_fill_color(black());
    layer.add_shape(filled_rect(0.0, 0.0, PAGE_WIDTH_MM, PAGE_HEIGHT_MM));

    // Dashed gridlines along the value axis.
    layer.set_outline_color(grid_gray());
    layer.set_outline_thickness(0.4);
    layer.set_line_dash_pattern(LineDashPattern {
        dash_1: Some(2),
        gap_1: Some(2),
        ..LineDashPattern::default()
    });
    let steps = (axis_max / spec.tick_step).round() as usize;
    for step in 0..=steps {
        let value = step as f64 * spec.tick_step;
        let x = plot_x + plot_w * value / axis_max;
        layer.add_shape(stroke_line(x, plot_y, x, plot_y + plot_h));
    }
    layer.set_line_dash_pattern(LineDashPattern::default());

    // Tick labels under the gridlines.
    layer.set_fill_color(white());
    for step in 0..=steps {
        let value = step as f64 * spec.tick_step;
        let x = plot_x + plot_w * value / axis_max;
        let label = spec.format_tick(value);
        let width = text_width_mm(&label, TICK_SIZE);
        layer.use_text(
            label,
            TICK_SIZE,
            Mm(x - width / 2.0),
            Mm(plot_y - 6.0),
            &fonts.regular,
        );
    }

    // Bars, smallest value at the bottom so the largest renders on top.
    layer.set_fill_color(accent_green());
    let entries = aggregate.entries();
    let slot = plot_h / entries.len() as f64;
    let bar_h = slot * 0.65;
    for (index, (_, value)) in entries.iter().enumerate() {
        let y = plot_y + index as f64 * slot + (slot - bar_h) / 2.0;
        let width = plot_w * value / axis_max;
        layer.add_shape(filled_rect(plot_x, y, width, bar_h));
    }

    // Group labels, right-aligned against the plot area.
    layer.set_fill_color(white());
    for (index, (group, _)) in entries.iter().enumerate() {
        let y = plot_y + index as f64 * slot + slot / 2.0 - GROUP_LABEL_SIZE * MM_PER_PT / 2.0;
        let width = text_width_mm(group, GROUP_LABEL_SIZE);
        layer.use_text(
            group.as_str(),
            GROUP_LABEL_SIZE,
            Mm(plot_x - 3.0 - width),
            Mm(y),
            &fonts.regular,
        );
    }

    // Title, centered across the page.
    let title_width = text_width_mm(spec.title, TITLE_SIZE);
    layer.use_text(
        spec.title,
        TITLE_SIZE,
        Mm((PAGE_WIDTH_MM - title_width) / 2.0),
        Mm(PAGE_HEIGHT_MM - 14.0),
        &fonts.bold,
    );

    // Axis labels in the accent color.
    layer.set_fill_color(accent_green());
    let value_label_width = text_width_mm(spec.value_axis_label, AXIS_LABEL_SIZE);
    layer.use_text(
        spec.value_axis_label,
        AXIS_LABEL_SIZE,
        Mm(plot_x + (plot_w - value_label_width) / 2.0),
        Mm(plot_y - 15.0),
        &fonts.regular,
    );
    layer.use_text(
        spec.key_axis_label,
        AXIS_LABEL_SIZE,
        Mm(8.0),
        Mm(plot_y + plot_h + 3.0),
        &fonts.regular,
    );
}

/// Rounds `max_value` up to the next multiple of `step`, with a floor of one
/// step so a degenerate axis still has room for a bar.
pub fn axis_maximum(max_value: f64, step: f64) -> f64 {
    if max_value <= 0.0 {
        return step;
    }
    (max_value / step).ceil().max(1.0) * step
}

/// Formats an integer with `,` thousands separators.
pub fn thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// Helvetica has no fixed advance width; half an em per character is close
// enough for centering and right-alignment at these sizes.
fn text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    text.chars().count() as f64 * font_size_pt * 0.5 * MM_PER_PT
}

fn filled_rect(x: f64, y: f64, w: f64, h: f64) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x), Mm(y + h)), false),
        ],
        is_closed: true,
        has_fill: true,
        has_stroke: false,
        is_clipping_path: false,
    }
}

fn stroke_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    }
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

/// Neon green `#39FF14`.
fn accent_green() -> Color {
    Color::Rgb(Rgb::new(0.224, 1.0, 0.078, None))
}

fn grid_gray() -> Color {
    Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None))
}
