//! Rendering of a [`ChartSpec`] to standalone SVG markup.
//!
//! A 1000x600 canvas by default, margins top 50 / right 50 / bottom 70 /
//! left 80, a band x-axis with tick labels rotated by 45 degrees and a
//! linear y-axis starting at zero.

use crate::spec::{unit_point, wedge_mid_angle, ChartKind, ChartSpec, Mark};
use crate::svg::{self, Tag};

pub const DEFAULT_WIDTH: u64 = 1000;
pub const DEFAULT_HEIGHT: u64 = 600;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_RIGHT: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;
const MARGIN_LEFT: f64 = 80.0;

const SERIES_COLORS: [&str; 2] = ["steelblue", "orange"];

// The classic d3 category palette, cycled per wedge.
const WEDGE_COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const NUM_Y_TICKS: usize = 5;

struct Surface {
    height: f64,
    inner_width: f64,
    inner_height: f64,
    num_bands: usize,
    y_max: f64,
}

impl Surface {
    fn new(spec: &ChartSpec, width: u64, height: u64) -> Self {
        Self {
            height: height as f64,
            inner_width: width as f64 - MARGIN_LEFT - MARGIN_RIGHT,
            inner_height: height as f64 - MARGIN_TOP - MARGIN_BOTTOM,
            num_bands: spec.categories.len(),
            // Guard against a degenerate domain so a chart of all-zero
            // values still has a drawable axis.
            y_max: spec.y_max.max(1.0),
        }
    }

    /// Band coordinate to pixel x.
    fn sx(&self, band: f64) -> f64 {
        MARGIN_LEFT + band * self.inner_width / self.num_bands.max(1) as f64
    }

    /// Value to pixel y (zero sits on the x-axis).
    fn sy(&self, value: f64) -> f64 {
        MARGIN_TOP + self.inner_height - value / self.y_max * self.inner_height
    }
}

/// Render one chart to a complete SVG document.
pub fn render_svg(spec: &ChartSpec, width: u64, height: u64) -> String {
    let surface = Surface::new(spec, width, height);
    let mut root = svg::root(width, height);

    for mark in &spec.marks {
        draw_mark(&mut root, mark, &surface);
    }

    // The pie variant draws neither axis.
    if spec.kind != ChartKind::Pie {
        draw_x_axis(&mut root, spec, &surface);
        draw_y_axis(&mut root, &surface);
    }
    draw_titles(&mut root, spec, &surface);

    svg::render(&root)
}

fn draw_mark(root: &mut Tag, mark: &Mark, surface: &Surface) {
    match mark {
        Mark::Bar {
            center,
            width,
            value,
            series,
            label,
            ..
        } => {
            let x = surface.sx(center - width / 2.0);
            let y = surface.sy(*value);
            let width_px = surface.sx(center + width / 2.0) - x;
            let height_px = surface.sy(0.0) - y;
            let fill = SERIES_COLORS[series % SERIES_COLORS.len()];
            root.add_child(svg::rect(x, y, width_px, height_px, fill));
            root.add_child(svg::text(surface.sx(*center), y - 5.0, "middle", 12, label));
        }
        Mark::Wedge {
            slot,
            start_angle,
            end_angle,
            label,
            value_labels,
            tooltip,
        } => {
            let (cx, cy, radius) = pie_geometry(surface);
            let fill = WEDGE_COLORS[slot % WEDGE_COLORS.len()];
            let mut wedge = svg::path(wedge_path(cx, cy, radius, *start_angle, *end_angle), fill, "none");
            wedge.add_child(svg::title(tooltip));
            root.add_child(wedge);

            let mid = wedge_mid_angle(*start_angle, *end_angle);
            let [ux, uy] = unit_point(mid);
            // Category name near the rim, values stacked at the centroid.
            let rim = radius - 40.0;
            root.add_child(svg::text(cx + rim * ux, cy - rim * uy, "middle", 10, label));
            let (lx, ly) = (cx + radius / 2.0 * ux, cy - radius / 2.0 * uy);
            root.add_child(svg::text(lx, ly + 4.0, "middle", 12, &value_labels[0]));
            root.add_child(svg::text(lx, ly + 18.0, "middle", 12, &value_labels[1]));
        }
        Mark::Polyline { points } => {
            let mut d = String::new();
            for (i, [x, y]) in points.iter().enumerate() {
                let command = if i == 0 { 'M' } else { 'L' };
                d.push_str(&format!(
                    "{} {} {} ",
                    command,
                    svg::fmt_coord(surface.sx(*x)),
                    svg::fmt_coord(surface.sy(*y))
                ));
            }
            root.add_child(svg::path(d.trim_end().to_string(), "none", "steelblue"));
        }
        Mark::Point { x, y } => {
            root.add_child(svg::circle(surface.sx(*x), surface.sy(*y), 5.0, "steelblue"));
        }
    }
}

fn pie_geometry(surface: &Surface) -> (f64, f64, f64) {
    let cx = MARGIN_LEFT + surface.inner_width / 2.0;
    let cy = MARGIN_TOP + surface.inner_height / 2.0;
    let radius = surface.inner_width.min(surface.inner_height) / 2.0;
    (cx, cy, radius)
}

// Arc path for a wedge, angles clockwise from 12 o'clock.
fn wedge_path(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let point = |angle: f64| {
        let [ux, uy] = unit_point(angle);
        (cx + radius * ux, cy - radius * uy)
    };
    let (x0, y0) = point(start_angle);
    let (x1, y1) = point(end_angle);
    let large_arc = if end_angle - start_angle > std::f64::consts::PI {
        1
    } else {
        0
    };
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        svg::fmt_coord(cx),
        svg::fmt_coord(cy),
        svg::fmt_coord(x0),
        svg::fmt_coord(y0),
        svg::fmt_coord(radius),
        svg::fmt_coord(radius),
        large_arc,
        svg::fmt_coord(x1),
        svg::fmt_coord(y1),
    )
}

fn draw_x_axis(root: &mut Tag, spec: &ChartSpec, surface: &Surface) {
    let y = MARGIN_TOP + surface.inner_height;
    root.add_child(svg::line(
        MARGIN_LEFT,
        y,
        MARGIN_LEFT + surface.inner_width,
        y,
        "black",
    ));
    for (slot, category) in spec.categories.iter().enumerate() {
        let x = surface.sx(ChartSpec::band_center(slot));
        root.add_child(svg::line(x, y, x, y + 6.0, "black"));
        // Tick labels are rotated by 45 degrees and anchored at their end.
        let (lx, ly) = (x, y + 16.0);
        let mut label = svg::text(lx, ly, "end", 11, category);
        label.add_param("transform", format!("rotate(-45, {}, {})", svg::fmt_coord(lx), svg::fmt_coord(ly)));
        root.add_child(label);
    }
}

fn draw_y_axis(root: &mut Tag, surface: &Surface) {
    let x = MARGIN_LEFT;
    root.add_child(svg::line(
        x,
        MARGIN_TOP,
        x,
        MARGIN_TOP + surface.inner_height,
        "black",
    ));
    for i in 0..=NUM_Y_TICKS {
        let value = surface.y_max * (i as f64) / (NUM_Y_TICKS as f64);
        let y = surface.sy(value);
        root.add_child(svg::line(x - 6.0, y, x, y, "black"));
        root.add_child(svg::text(
            x - 10.0,
            y + 4.0,
            "end",
            11,
            &svg::fmt_coord(value),
        ));
    }
}

fn draw_titles(root: &mut Tag, spec: &ChartSpec, surface: &Surface) {
    let center_x = MARGIN_LEFT + surface.inner_width / 2.0;
    root.add_child(svg::text(
        center_x,
        MARGIN_TOP / 2.0 + 6.0,
        "middle",
        18,
        &spec.title,
    ));
    if spec.kind == ChartKind::Pie {
        return;
    }
    root.add_child(svg::text(
        center_x,
        surface.height - 8.0,
        "middle",
        14,
        &spec.x_title,
    ));
    let (x, y) = (22.0, MARGIN_TOP + surface.inner_height / 2.0);
    let mut y_title = svg::text(x, y, "middle", 14, &spec.y_title);
    y_title.add_param("transform", format!("rotate(-90, {}, {})", svg::fmt_coord(x), svg::fmt_coord(y)));
    root.add_child(y_title);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{CategoryRow, ChartStyle};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample_rows() -> Vec<CategoryRow> {
        vec![
            CategoryRow::new("Aeroflot", 15.0, 20.0),
            CategoryRow::new("PanAm", 20.0, 20.0),
        ]
    }

    fn render(kind: ChartKind, rows: &[CategoryRow]) -> String {
        let spec = ChartSpec::build(rows, kind, &ChartStyle::default());
        render_svg(&spec, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    #[test]
    fn test_bar_chart_markup() {
        init();
        let markup = render(ChartKind::Bar, &sample_rows());
        assert_eq!(markup.matches("<rect").count(), 4);
        assert!(markup.contains("Fatalities: 15"));
        assert!(markup.contains("rotate(-45,"));
        assert!(markup.contains(">Operator</text>"));
        assert!(markup.contains(">Count</text>"));
        assert!(markup.contains("Airplane Crashes by Operator and Count"));
    }

    #[test]
    fn test_pie_chart_markup() {
        init();
        let markup = render(ChartKind::Pie, &sample_rows());
        assert_eq!(markup.matches("<path").count(), 2);
        // Hover tooltips are plain svg titles.
        assert_eq!(markup.matches("<title>").count(), 2);
        assert!(markup.contains("Operator: Aeroflot"));
        // No axes on the pie variant.
        assert!(!markup.contains("rotate(-45,"));
    }

    #[test]
    fn test_line_and_scatter_markup() {
        init();
        let markup = render(ChartKind::Line, &sample_rows());
        assert_eq!(markup.matches("<path").count(), 1);
        assert!(markup.contains("stroke=\"steelblue\""));

        let markup = render(ChartKind::Scatter, &sample_rows());
        assert_eq!(markup.matches("<circle").count(), 2);
    }

    #[test]
    fn test_empty_rows_render_axes_only() {
        init();
        let markup = render(ChartKind::Bar, &[]);
        assert_eq!(markup.matches("<rect").count(), 0);
        // Axis lines and titles are still present.
        assert!(markup.contains("<line"));
        assert!(markup.contains(">Operator</text>"));
    }

    #[test]
    fn test_zero_values_produce_zero_height_bars() {
        init();
        let rows = vec![CategoryRow::new("Aeroflot", 0.0, 0.0)];
        let markup = render(ChartKind::Bar, &rows);
        assert_eq!(markup.matches("<rect").count(), 2);
        assert!(markup.contains("height=\"0\""));
    }
}
