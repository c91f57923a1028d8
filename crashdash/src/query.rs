//! Filtering and aggregation of the incident dataset.
//!
//! Both steps are pure functions over the loaded dataset; the dashboard
//! recomputes them from scratch whenever the selection changes.

use chart_export::ChartKind;
use incident_csv::{Dataset, IncidentRecord};

/// The user-controlled triple driving the current render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Exact year to match; `None` until the dataset populated the control.
    pub year: Option<u16>,
    /// Operator substring, case-sensitive; empty matches everything.
    pub operator: String,
    pub chart_kind: ChartKind,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            year: None,
            operator: String::new(),
            chart_kind: ChartKind::Bar,
        }
    }
}

/// One operator's summed counts within the current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTotals {
    pub operator: String,
    pub fatalities: u32,
    pub aboard: u32,
}

/// Records whose year matches exactly and whose operator contains the
/// given substring (every operator contains the empty string).
pub fn filter_records<'a>(
    dataset: &'a Dataset,
    year: u16,
    operator: &str,
) -> Vec<&'a IncidentRecord> {
    dataset
        .records()
        .iter()
        .filter(|rec| rec.year == Some(year))
        .filter(|rec| operator.is_empty() || rec.operator.contains(operator))
        .collect()
}

/// Group by exact operator name and sum both counts. Output order is the
/// first-appearance order of the operator in the input.
pub fn aggregate_by_operator(records: &[&IncidentRecord]) -> Vec<OperatorTotals> {
    let mut totals: Vec<OperatorTotals> = Vec::new();
    let mut index = std::collections::HashMap::new();
    for rec in records {
        let i = *index.entry(rec.operator.clone()).or_insert_with(|| {
            totals.push(OperatorTotals {
                operator: rec.operator.clone(),
                fatalities: 0,
                aboard: 0,
            });
            totals.len() - 1
        });
        totals[i].fatalities += rec.fatalities;
        totals[i].aboard += rec.aboard;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const SAMPLE: &str = "\
Date,Operator,Fatalities,Aboard
09/17/1985,Aeroflot,10,12
10/02/1985,Aeroflot,5,8
12/21/1990,PanAm,20,20
";

    fn sample_dataset() -> Dataset {
        Dataset::from_string(SAMPLE).unwrap()
    }

    #[test]
    fn test_year_filter_is_exact() {
        init();
        let dataset = sample_dataset();
        let rows = filter_records(&dataset, 1985, "");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|rec| rec.year == Some(1985)));
        assert!(filter_records(&dataset, 1986, "").is_empty());
    }

    #[test]
    fn test_operator_filter_is_case_sensitive_substring() {
        init();
        let dataset = sample_dataset();
        let rows = filter_records(&dataset, 1990, "Pan");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].operator, "PanAm");
        // Case matters.
        assert!(filter_records(&dataset, 1990, "pan").is_empty());
        // Substring from another year matches nothing.
        assert!(filter_records(&dataset, 1985, "Pan").is_empty());
    }

    #[test]
    fn test_aggregate_sums_per_operator() {
        init();
        let dataset = sample_dataset();
        let rows = filter_records(&dataset, 1985, "");
        let totals = aggregate_by_operator(&rows);
        assert_eq!(
            totals,
            vec![OperatorTotals {
                operator: "Aeroflot".to_string(),
                fatalities: 15,
                aboard: 20,
            }]
        );
    }

    #[test]
    fn test_aggregate_values_are_order_independent() {
        init();
        // Same rows as SAMPLE plus a 1985 PanAm record, in shuffled order.
        let shuffled = "\
Date,Operator,Fatalities,Aboard
12/21/1990,PanAm,20,20
10/02/1985,Aeroflot,5,8
01/05/1985,PanAm,3,4
09/17/1985,Aeroflot,10,12
";
        let dataset = Dataset::from_string(shuffled).unwrap();
        let rows = filter_records(&dataset, 1985, "");
        let mut totals = aggregate_by_operator(&rows);
        totals.sort_by(|a, b| a.operator.cmp(&b.operator));
        assert_eq!(totals.len(), 2);
        assert_eq!((totals[0].fatalities, totals[0].aboard), (15, 20));
        assert_eq!((totals[1].fatalities, totals[1].aboard), (3, 4));
    }

    #[test]
    fn test_aggregate_preserves_first_appearance_order() {
        init();
        let raw = "\
Date,Operator,Fatalities,Aboard
01/01/1985,PanAm,1,1
02/01/1985,Aeroflot,1,1
03/01/1985,PanAm,1,1
";
        let dataset = Dataset::from_string(raw).unwrap();
        let rows = filter_records(&dataset, 1985, "");
        let totals = aggregate_by_operator(&rows);
        assert_eq!(totals[0].operator, "PanAm");
        assert_eq!(totals[1].operator, "Aeroflot");
    }

    #[test]
    fn test_aggregate_totals_match_raw_sums() {
        init();
        let dataset = sample_dataset();
        let rows = filter_records(&dataset, 1985, "");
        let totals = aggregate_by_operator(&rows);
        let raw_fatalities: u32 = rows.iter().map(|rec| rec.fatalities).sum();
        let raw_aboard: u32 = rows.iter().map(|rec| rec.aboard).sum();
        let agg_fatalities: u32 = totals.iter().map(|t| t.fatalities).sum();
        let agg_aboard: u32 = totals.iter().map(|t| t.aboard).sum();
        assert_eq!(raw_fatalities, agg_fatalities);
        assert_eq!(raw_aboard, agg_aboard);
    }

    #[test]
    fn test_empty_filter_yields_empty_aggregate() {
        init();
        let dataset = sample_dataset();
        let rows = filter_records(&dataset, 1985, "Pan");
        assert!(rows.is_empty());
        assert!(aggregate_by_operator(&rows).is_empty());
    }

    #[test]
    fn test_non_numeric_fatalities_count_as_zero() {
        init();
        let raw = "\
Date,Operator,Fatalities,Aboard
09/17/1985,Aeroflot,N/A,12
10/02/1985,Aeroflot,5,8
";
        let dataset = Dataset::from_string(raw).unwrap();
        let rows = filter_records(&dataset, 1985, "");
        let totals = aggregate_by_operator(&rows);
        assert_eq!(totals[0].fatalities, 5);
        assert_eq!(totals[0].aboard, 20);
    }
}
