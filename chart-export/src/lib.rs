#![warn(clippy::all, rust_2018_idioms)]

//! Chart model and SVG rendering.
//!
//! Building a chart is split into two steps: [`ChartSpec::build`] turns
//! aggregated rows into a flat list of drawing marks (pure, no display
//! required), and [`render_svg`] turns such a spec into standalone SVG
//! markup. The GUI renders the same spec through its own plot widget, so
//! both outputs always agree on geometry.

mod render;
mod spec;
mod svg;

pub use render::{render_svg, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use spec::{
    unit_point, wedge_arc_points, wedge_mid_angle, CategoryRow, ChartKind, ChartSpec, ChartStyle,
    Mark,
};
