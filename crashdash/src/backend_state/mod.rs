use std::path::{Path, PathBuf};

use dash_core::backend::BackendState;
use incident_csv::Dataset;

/// State living on the backend thread: the location of the incident
/// dataset and the means to load it without blocking the UI.
pub struct BackendAppState {
    data_path: PathBuf,
}

impl BackendState for BackendAppState {}

impl BackendAppState {
    pub fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }

    pub fn set_data_path(&mut self, path: &Path) {
        self.data_path = path.to_owned();
    }

    pub fn data_path(&self) -> PathBuf {
        self.data_path.clone()
    }

    /// Blocking read and parse of the dataset, run via a backend request.
    pub fn load_dataset(&self) -> Result<Dataset, String> {
        log::debug!("loading incident dataset from {:?}", self.data_path);
        Dataset::from_path(&self.data_path)
    }
}
