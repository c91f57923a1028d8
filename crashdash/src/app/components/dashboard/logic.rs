use std::io::Write;

use chart_export::{CategoryRow, ChartSpec};

use crate::app::EguiApp;
use crate::query::{aggregate_by_operator, filter_records, Selection};

use super::super::DatasetHandle;
use crate::app::config::Config;

impl super::Dashboard {
    /// Force a rebuild of the chart model on the next frame.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        self.spec.as_ref()
    }

    /// Rebuild the chart model if the selection changed or an invalidation
    /// was requested. A no-op otherwise, so rendering stays cheap.
    pub(crate) fn refresh(
        &mut self,
        dataset: &DatasetHandle,
        selection: &Selection,
        config: &Config,
    ) {
        let selection_changed = self.last_selection.as_ref() != Some(selection);
        if !self.dirty && !selection_changed {
            return;
        }
        self.dirty = false;
        self.last_selection = Some(selection.clone());

        let Some(data) = dataset.dataset() else {
            log::debug!("chart update requested before dataset arrived");
            self.spec = None;
            return;
        };
        let Some(year) = selection.year else {
            log::debug!("chart update requested before a year was selected");
            self.spec = None;
            return;
        };

        let records = filter_records(data, year, &selection.operator);
        let rows: Vec<CategoryRow> = aggregate_by_operator(&records)
            .into_iter()
            .map(|totals| {
                CategoryRow::new(
                    totals.operator,
                    totals.fatalities as f64,
                    totals.aboard as f64,
                )
            })
            .collect();
        log::debug!(
            "rebuilding {} chart for year {year} with {} operators",
            selection.chart_kind,
            rows.len()
        );
        self.spec = Some(ChartSpec::build(
            &rows,
            selection.chart_kind,
            &config.chart_style(),
        ));
    }
}

pub fn save_svg(app: &EguiApp, path: &std::path::Path) {
    log::debug!("requested to save svg at '{:?}'", path);

    let Some(spec) = app.dashboard.spec() else {
        log::warn!("no chart to export yet");
        return;
    };

    let mut file = match std::fs::File::create(path) {
        Ok(file) => file,
        Err(err) => {
            log::error!("unable to create file for saving svg: {:?}", err);
            return;
        }
    };

    let svg = chart_export::render_svg(spec, app.config.svg_width, app.config.svg_height);
    if let Err(err) = file.write_all(svg.as_bytes()) {
        log::error!("unable to write svg file: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use chart_export::ChartKind;
    use incident_csv::Dataset;

    use crate::app::components::{Dashboard, DatasetHandle};
    use crate::app::config::Config;
    use crate::query::Selection;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn loaded_handle(raw: &str) -> DatasetHandle {
        let mut handle = DatasetHandle::new();
        *handle.data.value_mut() = Dataset::from_string(raw);
        handle
    }

    #[test]
    fn test_refresh_builds_spec_once() {
        init();
        let raw = "Date,Operator,Fatalities,Aboard\n\
                   01/01/1985,Aeroflot,10,12\n\
                   02/01/1985,Aeroflot,5,8\n";
        let handle = loaded_handle(raw);
        let selection = Selection {
            year: Some(1985),
            operator: String::new(),
            chart_kind: ChartKind::Bar,
        };
        let config = Config::default();

        let mut dashboard = Dashboard::new();
        dashboard.refresh(&handle, &selection, &config);
        let spec = dashboard.spec().expect("spec should be built");
        assert_eq!(spec.categories, vec!["Aeroflot".to_string()]);
        // Same selection again must not rebuild.
        dashboard.refresh(&handle, &selection, &config);
        assert!(dashboard.spec().is_some());
    }

    #[test]
    fn test_refresh_without_year_clears_spec() {
        init();
        let raw = "Date,Operator,Fatalities,Aboard\n01/01/1985,Aeroflot,10,12\n";
        let handle = loaded_handle(raw);
        let selection = Selection::default();
        let config = Config::default();

        let mut dashboard = Dashboard::new();
        dashboard.refresh(&handle, &selection, &config);
        assert!(dashboard.spec().is_none());
    }
}
