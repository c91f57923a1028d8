mod logic;
mod ui;

use std::path::PathBuf;

use dash_core::frontend::UIParameter;
use incident_csv::Dataset;

/// The current dataset as seen by the UI thread. Loading happens on the
/// backend thread; until the result arrives the parameter reports itself
/// as not up to date.
pub struct DatasetHandle {
    pub data: UIParameter<Result<Dataset, String>>,
    path: PathBuf,
}

impl DatasetHandle {
    pub fn new() -> Self {
        Self {
            data: UIParameter::new(Err("no dataset loaded yet".to_string())),
            path: PathBuf::new(),
        }
    }
}

impl Default for DatasetHandle {
    fn default() -> Self {
        Self::new()
    }
}
