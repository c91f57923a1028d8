use std::path::{Path, PathBuf};

use dash_core::storage::Storage;
use serde::{Deserialize, Serialize};

use crate::EguiApp;
use chart_export::ChartKind;

#[derive(Clone, Serialize, Deserialize)]
struct BackendStorage {
    data_path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct FrontendStorage {
    year: Option<u16>,
    operator: String,
    /// Stored as the chart label so saved sessions stay readable.
    chart_kind: String,
}

pub fn save_json(app: &EguiApp, path: Option<&Path>) -> Result<(), String> {
    let backend_storage = BackendStorage {
        data_path: app.dataset.path().to_path_buf(),
    };

    let frontend_storage = FrontendStorage {
        year: app.controls.selection.year,
        operator: app.controls.selection.operator.clone(),
        chart_kind: app.controls.selection.chart_kind.label().to_string(),
    };
    let storage = Storage::new(backend_storage, frontend_storage);
    storage.save_json(path)
}

pub fn load_json(app: &mut EguiApp, path: Option<&Path>) -> Result<(), String> {
    let Storage::<BackendStorage, FrontendStorage> {
        backend_storage,
        frontend_storage,
    } = Storage::load_json(path)?;

    app.controls.selection.year = frontend_storage.year;
    app.controls.selection.operator = frontend_storage.operator;
    app.controls.selection.chart_kind = ChartKind::from_name(&frontend_storage.chart_kind)
        .unwrap_or_else(|| {
            log::warn!(
                "unknown chart kind '{}' in session file, falling back to bar",
                frontend_storage.chart_kind
            );
            ChartKind::default()
        });

    // Reload the dataset the session was saved with. The selection is
    // revalidated once the data arrives.
    app.dataset
        .load(backend_storage.data_path, &mut app.request_tx);
    app.dashboard.invalidate();
    app.request_redraw();
    Ok(())
}
