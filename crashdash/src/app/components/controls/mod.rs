mod logic;
mod ui;

use crate::query::Selection;

/// The three selectors driving the current render: year, operator
/// substring and chart kind. Option lists are derived from the dataset
/// when it arrives.
#[derive(Debug, Default)]
pub struct Controls {
    pub selection: Selection,
    years: Vec<u16>,
    operators: Vec<String>,
}

impl Controls {
    pub fn new() -> Self {
        Default::default()
    }
}
