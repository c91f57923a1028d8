use incident_csv::Dataset;

impl super::Controls {
    /// Repopulate the option lists from a freshly loaded dataset. Values
    /// appear in first-appearance order, exactly as found in the data.
    pub fn sync_options(&mut self, dataset: &Dataset) {
        self.years = dataset.distinct_years();
        self.operators = dataset.distinct_operators();
        log::debug!(
            "selector options: {} years, {} operators",
            self.years.len(),
            self.operators.len()
        );
        // Keep a still-valid year selection, otherwise fall back to the
        // first option so the initial render has something to show.
        match self.selection.year {
            Some(year) if self.years.contains(&year) => (),
            _ => self.selection.year = self.years.first().copied(),
        }
    }

    pub fn years(&self) -> &[u16] {
        &self.years
    }

    pub fn operators(&self) -> &[String] {
        &self.operators
    }
}
