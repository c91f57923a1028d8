use std::path::{Path, PathBuf};

use dash_core::backend::{BackendEventLoop, BackendLink};

use crate::{app::DynRequestSender, BackendAppState};

impl super::DatasetHandle {
    /// Dispatch a load of the dataset at `path` to the backend thread.
    /// The previous dataset stays visible until the new one arrives.
    pub fn load(&mut self, path: PathBuf, request_tx: &mut DynRequestSender) {
        log::debug!("requesting dataset load from {:?}", path);
        self.path = path.clone();
        BackendLink::request_parameter_update(
            &mut self.data,
            "load incident dataset",
            move |b: &mut BackendEventLoop<BackendAppState>| {
                b.state.set_data_path(&path);
                b.state.load_dataset()
            },
            request_tx,
        );
    }

    pub fn try_update(&mut self) -> bool {
        self.data.try_update()
    }

    pub fn dataset(&self) -> Option<&incident_csv::Dataset> {
        self.data.value().as_ref().ok()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loading(&self) -> bool {
        !self.data.is_up_to_date()
    }
}
