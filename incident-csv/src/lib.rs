#![warn(clippy::all, rust_2018_idioms)]

//! Reader for the aviation incident dataset.
//!
//! The source file is a comma separated table whose interesting columns are
//! `Date`, `Operator`, `Fatalities` and `Aboard`. All fields are text; the
//! two count columns are parsed with [`parse_count`], which maps anything
//! non-numeric to zero, and the year is extracted from the date string at
//! load time. Rows that cannot be split into enough fields are skipped with
//! a warning, they never abort the load.

use std::path::Path;

/// One row of the source dataset. Fields the dashboard does not use are
/// dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentRecord {
    pub date: String,
    pub year: Option<u16>,
    pub operator: String,
    pub fatalities: u32,
    pub aboard: u32,
}

/// The full, unfiltered set of incident records. Immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<IncidentRecord>,
}

// Column indices resolved from the header line.
#[derive(Debug)]
struct HeaderMap {
    date: usize,
    operator: usize,
    fatalities: usize,
    aboard: usize,
}

impl Dataset {
    pub fn from_path(path: &Path) -> Result<Dataset, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| format!("could not read dataset file {:?}: {}", path, err))?;
        Self::from_string(&raw)
    }

    pub fn from_string(raw: &str) -> Result<Dataset, String> {
        let mut lines = raw.lines().enumerate();
        let header = loop {
            match lines.next() {
                Some((_, line)) if line.trim().is_empty() => continue,
                Some((_, line)) => break HeaderMap::from_header_line(line)?,
                None => return Err("dataset file is empty".to_string()),
            }
        };

        let mut records = Vec::new();
        for (line_no, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_record(line);
            let Some(record) = header.record_from_fields(&fields) else {
                log::warn!(
                    "line {}: expected at least {} fields, found {}, skipping",
                    line_no + 1,
                    header.min_fields(),
                    fields.len()
                );
                continue;
            };
            records.push(record);
        }
        log::debug!("loaded {} incident records", records.len());
        Ok(Dataset { records })
    }

    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years in first-appearance order. Records without a
    /// recognizable year do not contribute an entry.
    pub fn distinct_years(&self) -> Vec<u16> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .filter_map(|rec| rec.year)
            .filter(|year| seen.insert(*year))
            .collect()
    }

    /// Distinct operator names in first-appearance order.
    pub fn distinct_operators(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .filter(|rec| seen.insert(rec.operator.clone()))
            .map(|rec| rec.operator.clone())
            .collect()
    }
}

impl HeaderMap {
    fn from_header_line(line: &str) -> Result<Self, String> {
        let fields = split_record(line);
        let find = |name: &str| {
            fields
                .iter()
                .position(|field| field.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| format!("dataset header is missing a '{}' column", name))
        };
        Ok(Self {
            date: find("Date")?,
            operator: find("Operator")?,
            fatalities: find("Fatalities")?,
            aboard: find("Aboard")?,
        })
    }

    // A row is usable if it reaches up to the right-most column we need.
    fn min_fields(&self) -> usize {
        [self.date, self.operator, self.fatalities, self.aboard]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }

    fn record_from_fields(&self, fields: &[String]) -> Option<IncidentRecord> {
        if fields.len() < self.min_fields() {
            return None;
        }
        let date = fields[self.date].trim().to_owned();
        Some(IncidentRecord {
            year: extract_year(&date),
            date,
            operator: fields[self.operator].trim().to_owned(),
            fatalities: parse_count(&fields[self.fatalities]),
            aboard: parse_count(&fields[self.aboard]),
        })
    }
}

/// Parse a count column. Total: any text that is not a non-negative number
/// contributes zero, so a record with e.g. `Fatalities = "N/A"` still sums.
pub fn parse_count(text: &str) -> u32 {
    let text = text.trim();
    if let Ok(count) = text.parse::<u32>() {
        return count;
    }
    // Some exports write counts as floats ("12.0").
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.round() as u32,
        _ => 0,
    }
}

/// Extract a four-digit year from a date string like "09/17/1908" or a bare
/// "1908". The last plausible four-digit run wins, since the common formats
/// put the year at the end.
pub fn extract_year(date: &str) -> Option<u16> {
    let mut year = None;
    let mut run_start = None;
    let bytes = date.as_bytes();
    for i in 0..=bytes.len() {
        let is_digit = i < bytes.len() && bytes[i].is_ascii_digit();
        match (run_start, is_digit) {
            (None, true) => run_start = Some(i),
            (Some(start), false) => {
                if i - start == 4 {
                    if let Ok(candidate) = date[start..i].parse::<u16>() {
                        if (1700..=2199).contains(&candidate) {
                            year = Some(candidate);
                        }
                    }
                }
                run_start = None;
            }
            _ => (),
        }
    }
    year
}

// Split one line into fields, honoring double-quoted fields with doubled
// quotes as escapes (operator names may contain commas).
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(chr) = chars.next() {
        match chr {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(chr),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const SAMPLE: &str = "\
Date,Location,Operator,Fatalities,Aboard
09/17/1985,Moscow,Aeroflot,10,12
10/02/1985,Kiev,Aeroflot,5,8
12/21/1990,Lockerbie,PanAm,20,20
";

    #[test]
    fn test_parse_sample() {
        init();
        let dataset = Dataset::from_string(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 3);
        let first = &dataset.records()[0];
        assert_eq!(first.year, Some(1985));
        assert_eq!(first.operator, "Aeroflot");
        assert_eq!(first.fatalities, 10);
        assert_eq!(first.aboard, 12);
    }

    #[test]
    fn test_header_is_required() {
        init();
        assert!(Dataset::from_string("").is_err());
        assert!(Dataset::from_string("Date,Operator,Fatalities\n").is_err());
    }

    #[test]
    fn test_quoted_operator_with_comma() {
        init();
        let raw = "Date,Operator,Fatalities,Aboard\n\
                   03/05/1966,\"BOAC, Ltd.\",124,124\n";
        let dataset = Dataset::from_string(raw).unwrap();
        assert_eq!(dataset.records()[0].operator, "BOAC, Ltd.");
    }

    #[test]
    fn test_escaped_quotes() {
        init();
        let fields = split_record("a,\"say \"\"hi\"\"\",b");
        assert_eq!(fields, vec!["a", "say \"hi\"", "b"]);
    }

    #[test]
    fn test_short_row_is_skipped() {
        init();
        let raw = "Date,Operator,Fatalities,Aboard\n\
                   09/17/1985,Aeroflot,10,12\n\
                   brokenline\n\
                   12/21/1990,PanAm,20,20\n";
        let dataset = Dataset::from_string(raw).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_parse_count_total() {
        init();
        assert_eq!(parse_count("10"), 10);
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count("12.0"), 12);
        assert_eq!(parse_count("N/A"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count("NaN"), 0);
    }

    #[test]
    fn test_extract_year() {
        init();
        assert_eq!(extract_year("09/17/1908"), Some(1908));
        assert_eq!(extract_year("1985"), Some(1985));
        assert_eq!(extract_year("17.09.1985 13:30"), Some(1985));
        assert_eq!(extract_year("no date here"), None);
        // A five-digit run is not a year.
        assert_eq!(extract_year("12345"), None);
        assert_eq!(extract_year("0123"), None);
    }

    #[test]
    fn test_distinct_values_keep_first_appearance_order() {
        init();
        let raw = "Date,Operator,Fatalities,Aboard\n\
                   01/01/1990,PanAm,1,1\n\
                   01/01/1985,Aeroflot,1,1\n\
                   02/02/1990,PanAm,2,2\n\
                   02/02/1985,Lufthansa,0,3\n";
        let dataset = Dataset::from_string(raw).unwrap();
        assert_eq!(dataset.distinct_years(), vec![1990, 1985]);
        assert_eq!(
            dataset.distinct_operators(),
            vec!["PanAm", "Aeroflot", "Lufthansa"]
        );
    }

    #[test]
    fn test_non_numeric_counts_become_zero() {
        init();
        let raw = "Date,Operator,Fatalities,Aboard\n\
                   09/17/1985,Aeroflot,N/A,12\n";
        let dataset = Dataset::from_string(raw).unwrap();
        assert_eq!(dataset.records()[0].fatalities, 0);
        assert_eq!(dataset.records()[0].aboard, 12);
    }
}
