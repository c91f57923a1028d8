use std::f64::consts::TAU;

/// The four supported visual encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
    Line,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Line,
        ChartKind::Scatter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == name)
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One aggregated input row: a category label and two summed values.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub label: String,
    pub primary: f64,
    pub secondary: f64,
}

impl CategoryRow {
    pub fn new(label: impl Into<String>, primary: f64, secondary: f64) -> Self {
        Self {
            label: label.into(),
            primary,
            secondary,
        }
    }
}

/// Titles and series names, independent of the data.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series_names: [String; 2],
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Airplane Crashes by Operator and Count".to_string(),
            x_title: "Operator".to_string(),
            y_title: "Count".to_string(),
            series_names: ["Fatalities".to_string(), "Aboard".to_string()],
        }
    }
}

/// A single drawing command.
///
/// Bar, line and scatter marks live in band/value coordinates: category `i`
/// occupies the band `[i, i + 1)` on the x-axis, the y-axis is linear in
/// `[0, y_max]`. Wedge angles are radians measured clockwise from 12
/// o'clock on a unit disc centered in the drawing area.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Bar {
        slot: usize,
        series: usize,
        /// Band coordinate of the bar center.
        center: f64,
        /// Bar width in band coordinates.
        width: f64,
        value: f64,
        /// Drawn right above the bar.
        label: String,
    },
    Wedge {
        slot: usize,
        start_angle: f64,
        end_angle: f64,
        /// Category name, drawn near the rim.
        label: String,
        /// Drawn at the wedge centroid, stacked.
        value_labels: [String; 2],
        /// Hover text summarizing the wedge.
        tooltip: String,
    },
    Polyline {
        points: Vec<[f64; 2]>,
    },
    Point {
        x: f64,
        y: f64,
    },
}

/// The complete, display-independent description of one chart.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series_names: [String; 2],
    /// Band axis domain, one entry per input row.
    pub categories: Vec<String>,
    /// Linear axis domain is `[0, y_max]`.
    pub y_max: f64,
    pub marks: Vec<Mark>,
}

// Band padding, as a fraction of the band width on each side.
const BAND_PADDING: f64 = 0.05;

impl ChartSpec {
    /// The pure rendering front half: aggregated rows plus a chart kind in,
    /// drawing commands out. Zero rows produce a spec with axes metadata
    /// but no marks.
    pub fn build(rows: &[CategoryRow], kind: ChartKind, style: &ChartStyle) -> Self {
        let categories: Vec<String> = rows.iter().map(|row| row.label.clone()).collect();
        let y_max = rows
            .iter()
            .map(|row| row.primary.max(row.secondary))
            .fold(0.0_f64, f64::max);

        let marks = match kind {
            ChartKind::Bar => bar_marks(rows, &style.series_names),
            ChartKind::Pie => wedge_marks(rows, &style.series_names),
            ChartKind::Line => line_marks(rows),
            ChartKind::Scatter => point_marks(rows),
        };

        Self {
            kind,
            title: style.title.clone(),
            x_title: style.x_title.clone(),
            y_title: style.y_title.clone(),
            series_names: style.series_names.clone(),
            categories,
            y_max,
            marks,
        }
    }

    /// Center of category `slot` on the band axis.
    pub fn band_center(slot: usize) -> f64 {
        slot as f64 + 0.5
    }
}

fn bar_marks(rows: &[CategoryRow], series_names: &[String; 2]) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(rows.len() * 2);
    // Band [i, i + 1) with padding on each side, split into two bars.
    let inner = 1.0 - 2.0 * BAND_PADDING;
    let width = inner / 2.0;
    for (slot, row) in rows.iter().enumerate() {
        for (series, value) in [row.primary, row.secondary].into_iter().enumerate() {
            let center = slot as f64 + BAND_PADDING + width * (series as f64 + 0.5);
            marks.push(Mark::Bar {
                slot,
                series,
                center,
                width,
                value,
                label: format!("{}: {}", series_names[series], value),
            });
        }
    }
    marks
}

fn wedge_marks(rows: &[CategoryRow], series_names: &[String; 2]) -> Vec<Mark> {
    let total: f64 = rows.iter().map(|row| row.primary + row.secondary).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut marks = Vec::with_capacity(rows.len());
    let mut angle = 0.0;
    for (slot, row) in rows.iter().enumerate() {
        let share = (row.primary + row.secondary) / total;
        let start_angle = angle;
        angle += share * TAU;
        marks.push(Mark::Wedge {
            slot,
            start_angle,
            end_angle: angle,
            label: row.label.clone(),
            value_labels: [
                format!("{}: {}", series_names[0], row.primary),
                format!("{}: {}", series_names[1], row.secondary),
            ],
            tooltip: format!(
                "Operator: {}\n{}: {}\n{}: {}",
                row.label, series_names[0], row.primary, series_names[1], row.secondary
            ),
        });
    }
    marks
}

// Only the primary series is drawn as a line.
fn line_marks(rows: &[CategoryRow]) -> Vec<Mark> {
    if rows.is_empty() {
        return Vec::new();
    }
    let points = rows
        .iter()
        .enumerate()
        .map(|(slot, row)| [ChartSpec::band_center(slot), row.primary])
        .collect();
    vec![Mark::Polyline { points }]
}

fn point_marks(rows: &[CategoryRow]) -> Vec<Mark> {
    rows.iter()
        .enumerate()
        .map(|(slot, row)| Mark::Point {
            x: ChartSpec::band_center(slot),
            y: row.primary,
        })
        .collect()
}

/// Point on the unit circle for an angle measured clockwise from 12
/// o'clock, y pointing up.
pub fn unit_point(angle: f64) -> [f64; 2] {
    [angle.sin(), angle.cos()]
}

pub fn wedge_mid_angle(start_angle: f64, end_angle: f64) -> f64 {
    (start_angle + end_angle) / 2.0
}

/// Approximate a wedge outline on the unit disc: center, then arc points
/// from start to end angle. Suitable for polygon-based renderers.
pub fn wedge_arc_points(start_angle: f64, end_angle: f64) -> Vec<[f64; 2]> {
    // One arc point about every 2 degrees, at least two.
    let span = (end_angle - start_angle).abs();
    let steps = ((span / TAU * 180.0).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start_angle + span * (i as f64) / (steps as f64);
        points.push(unit_point(angle));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample_rows() -> Vec<CategoryRow> {
        vec![
            CategoryRow::new("Aeroflot", 15.0, 20.0),
            CategoryRow::new("PanAm", 20.0, 20.0),
            CategoryRow::new("Lufthansa", 0.0, 5.0),
        ]
    }

    #[test]
    fn test_bar_spec_has_two_bars_per_row() {
        init();
        let spec = ChartSpec::build(&sample_rows(), ChartKind::Bar, &ChartStyle::default());
        assert_eq!(spec.marks.len(), 6);
        assert_eq!(spec.y_max, 20.0);
        assert_eq!(spec.categories.len(), 3);
        let labels: Vec<_> = spec
            .marks
            .iter()
            .map(|mark| match mark {
                Mark::Bar { label, .. } => label.clone(),
                other => panic!("unexpected mark {:?}", other),
            })
            .collect();
        assert_eq!(labels[0], "Fatalities: 15");
        assert_eq!(labels[1], "Aboard: 20");
        // The two bars share their band without overlapping.
        let (Mark::Bar {
            center: c0,
            width: w0,
            ..
        }, Mark::Bar { center: c1, .. }) = (&spec.marks[0], &spec.marks[1])
        else {
            panic!("expected bar marks");
        };
        assert!(c0 + w0 / 2.0 <= *c1);
        assert!(*c1 < 1.0);
    }

    #[test]
    fn test_wedge_angles_cover_full_circle() {
        init();
        let spec = ChartSpec::build(&sample_rows(), ChartKind::Pie, &ChartStyle::default());
        assert_eq!(spec.marks.len(), 3);
        let mut previous_end = 0.0;
        let mut last = 0.0;
        for mark in &spec.marks {
            let Mark::Wedge {
                start_angle,
                end_angle,
                ..
            } = mark
            else {
                panic!("expected wedge mark, got {:?}", mark);
            };
            assert!((start_angle - previous_end).abs() < 1e-12);
            previous_end = *end_angle;
            last = *end_angle;
        }
        assert!((last - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_wedge_share_proportional_to_sum() {
        init();
        // 35 + 40 + 5 = 80 in total.
        let spec = ChartSpec::build(&sample_rows(), ChartKind::Pie, &ChartStyle::default());
        let Mark::Wedge {
            start_angle,
            end_angle,
            ..
        } = &spec.marks[0]
        else {
            panic!("expected wedge mark");
        };
        assert!((end_angle - start_angle - 35.0 / 80.0 * TAU).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_pie_has_no_wedges() {
        init();
        let rows = vec![CategoryRow::new("Aeroflot", 0.0, 0.0)];
        let spec = ChartSpec::build(&rows, ChartKind::Pie, &ChartStyle::default());
        assert!(spec.marks.is_empty());
    }

    #[test]
    fn test_line_uses_primary_series_only() {
        init();
        let spec = ChartSpec::build(&sample_rows(), ChartKind::Line, &ChartStyle::default());
        let [Mark::Polyline { points }] = &spec.marks[..] else {
            panic!("expected a single polyline");
        };
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], [0.5, 15.0]);
        assert_eq!(points[2], [2.5, 0.0]);
    }

    #[test]
    fn test_scatter_one_point_per_row() {
        init();
        let spec = ChartSpec::build(&sample_rows(), ChartKind::Scatter, &ChartStyle::default());
        assert_eq!(spec.marks.len(), 3);
        assert_eq!(spec.marks[1], Mark::Point { x: 1.5, y: 20.0 });
    }

    #[test]
    fn test_empty_rows_build_axes_only() {
        init();
        for kind in ChartKind::ALL {
            let spec = ChartSpec::build(&[], kind, &ChartStyle::default());
            assert!(spec.marks.is_empty());
            assert!(spec.categories.is_empty());
            assert_eq!(spec.y_max, 0.0);
        }
    }

    #[test]
    fn test_kind_names_roundtrip() {
        init();
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_name(kind.label()), Some(kind));
        }
        assert_eq!(ChartKind::from_name("sunburst"), None);
    }

    #[test]
    fn test_wedge_geometry_helpers() {
        init();
        // Quarter wedge from 12 to 3 o'clock.
        let points = wedge_arc_points(0.0, TAU / 4.0);
        assert_eq!(points[0], [0.0, 0.0]);
        let [x, y] = points[1];
        assert!((x - 0.0).abs() < 1e-12 && (y - 1.0).abs() < 1e-12);
        let [x, y] = *points.last().unwrap();
        assert!((x - 1.0).abs() < 1e-12 && y.abs() < 1e-12);
        let mid = wedge_mid_angle(0.0, TAU / 4.0);
        let [mx, my] = unit_point(mid);
        assert!(mx > 0.0 && my > 0.0);
    }
}
