impl super::DatasetHandle {
    /// One status line above the chart: progress, error or record count.
    pub fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.is_loading() {
                ui.spinner();
                ui.label("Loading data...");
                return;
            }
            match self.data.value() {
                Ok(data) => {
                    ui.label(format!(
                        "{} incident records from {:?}",
                        data.len(),
                        self.path
                    ));
                }
                Err(err) => {
                    ui.colored_label(
                        egui::Color32::RED,
                        format!("Failed to load dataset: {err}"),
                    );
                }
            }
        });
    }
}
