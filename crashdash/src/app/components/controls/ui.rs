use chart_export::ChartKind;

impl super::Controls {
    /// Render the three selectors. Returns true if the selection changed
    /// this frame, so the dashboard knows to recompute.
    pub fn render(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            let year_text = self
                .selection
                .year
                .map(|year| year.to_string())
                .unwrap_or_else(|| "-".to_string());
            egui::ComboBox::from_label("Year")
                .selected_text(year_text)
                .show_ui(ui, |ui| {
                    for year in &self.years {
                        changed |= ui
                            .selectable_value(
                                &mut self.selection.year,
                                Some(*year),
                                year.to_string(),
                            )
                            .changed();
                    }
                });

            let operator_text = if self.selection.operator.is_empty() {
                "(all)".to_string()
            } else {
                self.selection.operator.clone()
            };
            egui::ComboBox::from_label("Operator")
                .selected_text(operator_text)
                .show_ui(ui, |ui| {
                    changed |= ui
                        .selectable_value(&mut self.selection.operator, String::new(), "(all)")
                        .changed();
                    for operator in &self.operators {
                        changed |= ui
                            .selectable_value(
                                &mut self.selection.operator,
                                operator.clone(),
                                operator,
                            )
                            .changed();
                    }
                });

            egui::ComboBox::from_label("Chart")
                .selected_text(self.selection.chart_kind.label())
                .show_ui(ui, |ui| {
                    for kind in ChartKind::ALL {
                        changed |= ui
                            .selectable_value(&mut self.selection.chart_kind, kind, kind.label())
                            .changed();
                    }
                });
        });
        changed
    }
}
