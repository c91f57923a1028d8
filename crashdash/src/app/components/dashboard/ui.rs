use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoint, Points, Polygon, Text};

use chart_export::{unit_point, wedge_mid_angle, ChartKind, ChartSpec, Mark};

use crate::app::components::DatasetHandle;
use crate::app::config::Config;
use crate::query::Selection;

const STEELBLUE: egui::Color32 = egui::Color32::from_rgb(70, 130, 180);
const ORANGE: egui::Color32 = egui::Color32::from_rgb(255, 165, 0);

impl super::Dashboard {
    pub fn render(
        &mut self,
        dataset: &DatasetHandle,
        selection: &Selection,
        config: &Config,
        ui: &mut egui::Ui,
    ) {
        self.refresh(dataset, selection, config);
        let Some(spec) = self.spec.as_ref() else {
            ui.label("No chart to show yet.");
            return;
        };

        ui.vertical_centered(|ui| {
            ui.heading(&spec.title);
        });
        match spec.kind {
            ChartKind::Pie => render_pie(spec, ui),
            _ => render_cartesian(spec, ui),
        }
    }
}

/// Bar, line and scatter share the band/value coordinate system, with the
/// category labels rendered as x-axis ticks at the band centers.
fn render_cartesian(spec: &ChartSpec, ui: &mut egui::Ui) {
    let num_bands = spec.categories.len();
    let tick_labels = spec.categories.clone();

    let plot = Plot::new("dashboard")
        .legend(Legend::default())
        .x_axis_label(spec.x_title.clone())
        .y_axis_label(spec.y_title.clone())
        .x_grid_spacer(move |_input| {
            (0..num_bands)
                .map(|slot| GridMark {
                    value: ChartSpec::band_center(slot),
                    step_size: 1.0,
                })
                .collect()
        })
        .x_axis_formatter(move |mark: GridMark, _range| {
            let slot = (mark.value - 0.5).round();
            if slot < 0.0 {
                return String::new();
            }
            tick_labels
                .get(slot as usize)
                .cloned()
                .unwrap_or_default()
        })
        .include_x(0.0)
        .include_x(num_bands.max(1) as f64)
        .include_y(0.0)
        .include_y(spec.y_max * 1.1);

    plot.show(ui, |plot_ui| {
        let mut series_bars: [Vec<Bar>; 2] = [Vec::new(), Vec::new()];
        let mut scatter_points: Vec<[f64; 2]> = Vec::new();

        for mark in &spec.marks {
            match mark {
                Mark::Bar {
                    series,
                    center,
                    width,
                    value,
                    label,
                    ..
                } => {
                    series_bars[*series].push(Bar::new(*center, *value).width(*width));
                    if *value > 0.0 {
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(*center, *value),
                                egui::RichText::new(label.clone()).size(10.0),
                            )
                            .anchor(egui::Align2::CENTER_BOTTOM),
                        );
                    }
                }
                Mark::Polyline { points } => {
                    plot_ui.line(
                        Line::new(points.clone())
                            .color(STEELBLUE)
                            .width(2.0)
                            .name(&spec.series_names[0]),
                    );
                }
                Mark::Point { x, y } => scatter_points.push([*x, *y]),
                Mark::Wedge { .. } => (),
            }
        }

        for (series, bars) in series_bars.into_iter().enumerate() {
            if bars.is_empty() {
                continue;
            }
            let color = if series == 0 { STEELBLUE } else { ORANGE };
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(color)
                    .name(&spec.series_names[series]),
            );
        }

        if !scatter_points.is_empty() {
            plot_ui.points(
                Points::new(scatter_points)
                    .radius(5.0)
                    .color(STEELBLUE)
                    .name(&spec.series_names[0]),
            );
        }
    });
}

/// The pie lives on a unit disc, drawn with a fixed aspect ratio and no
/// axes. Hovering a wedge shows its summary via the legend name.
fn render_pie(spec: &ChartSpec, ui: &mut egui::Ui) {
    let plot = Plot::new("dashboard")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.3)
        .include_y(1.3);

    plot.show(ui, |plot_ui| {
        for mark in &spec.marks {
            let Mark::Wedge {
                slot,
                start_angle,
                end_angle,
                label,
                value_labels,
                tooltip,
            } = mark
            else {
                continue;
            };
            let points = chart_export::wedge_arc_points(*start_angle, *end_angle);
            plot_ui.polygon(
                Polygon::new(points)
                    .fill_color(auto_color(*slot as i32))
                    .name(tooltip),
            );

            let mid = wedge_mid_angle(*start_angle, *end_angle);
            let [cx, cy] = unit_point(mid);
            plot_ui.text(
                Text::new(
                    PlotPoint::new(cx * 0.5, cy * 0.5),
                    egui::RichText::new(format!(
                        "{}\n{}\n{}",
                        label, value_labels[0], value_labels[1]
                    ))
                    .size(11.0),
                )
                .anchor(egui::Align2::CENTER_CENTER),
            );
        }
    });
}

pub fn auto_color(color_idx: i32) -> egui::Color32 {
    // analog to egui_plot
    let golden_ratio = (5.0_f32.sqrt() - 1.0) / 2.0; // 0.61803398875
    let h = color_idx as f32 * golden_ratio;
    egui::epaint::Hsva::new(h, 0.85, 0.5, 1.0).into()
}
