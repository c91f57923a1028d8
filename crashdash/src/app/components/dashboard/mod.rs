mod logic;
mod ui;

pub use logic::save_svg;

use chart_export::ChartSpec;

use crate::query::Selection;

/// Holds the chart model built from the current selection. The model is
/// rebuilt lazily, only when the selection or the dataset changed.
#[derive(Debug, Default)]
pub struct Dashboard {
    spec: Option<ChartSpec>,
    last_selection: Option<Selection>,
    dirty: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            spec: None,
            last_selection: None,
            dirty: true,
        }
    }
}
