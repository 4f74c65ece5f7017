//! Spreadsheet-style import and export of contribution records
//!
//! Files are CSV with one header row and one row per year, columns in the order
//! year, socialAverageSalary, paymentMonths, monthlySalary, yearlyPayment,
//! paymentIndex. Import is permissive: columns are matched by header, and any
//! missing or unreadable cell becomes 0.

use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, Writer};

use crate::error::Result;
use crate::profile::UserInfo;

use super::ContributionRecord;

pub const RECORD_HEADERS: [&str; 6] = [
    "year",
    "socialAverageSalary",
    "paymentMonths",
    "monthlySalary",
    "yearlyPayment",
    "paymentIndex",
];

/// Raw CSV row; every cell is optional
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    social_average_salary: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    payment_months: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    monthly_salary: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    yearly_payment: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    payment_index: Option<f64>,
}

impl CsvRow {
    fn into_record(self) -> ContributionRecord {
        ContributionRecord {
            year: self.year.unwrap_or(0.0).round() as i32,
            social_average_salary: self.social_average_salary.unwrap_or(0.0),
            payment_months: self.payment_months.unwrap_or(0.0).max(0.0).round() as u32,
            monthly_salary: self.monthly_salary.unwrap_or(0.0),
            yearly_payment: self.yearly_payment.unwrap_or(0.0),
            payment_index: self.payment_index.unwrap_or(0.0),
        }
    }
}

/// Write records to any writer
pub fn write_records<W: Write>(writer: W, records: &[ContributionRecord]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(RECORD_HEADERS)?;

    for r in records {
        csv_writer.write_record([
            r.year.to_string(),
            format_amount(r.social_average_salary),
            r.payment_months.to_string(),
            format_amount(r.monthly_salary),
            format_amount(r.yearly_payment),
            format_amount(r.payment_index),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write records to a file
pub fn export_records<P: AsRef<Path>>(path: P, records: &[ContributionRecord]) -> Result<()> {
    write_records(File::create(path)?, records)
}

/// Read records from any reader, in file order
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ContributionRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        records.push(row.into_record());
    }

    Ok(records)
}

/// Read records from a file
pub fn import_records<P: AsRef<Path>>(path: P) -> Result<Vec<ContributionRecord>> {
    read_records(File::open(path)?)
}

/// Non-blocking diagnostics for an imported sequence
///
/// Reports years outside the career span of `info` and repeated years.
pub fn import_warnings(info: &UserInfo, records: &[ContributionRecord]) -> Vec<String> {
    let start = info.work_start_year();
    let end = info.retirement_year();
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for r in records {
        if r.year < start || r.year > end {
            warnings.push(format!("year {} is outside the career span {}-{}", r.year, start, end));
        }
        if !seen.insert(r.year) {
            warnings.push(format!("year {} appears more than once", r.year));
        }
    }

    warnings
}

/// Whole amounts without a trailing ".0"
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::records::{build_records, update_record, RecordEdit};
    use approx::assert_relative_eq;

    #[test]
    fn test_export_layout() {
        let records = build_records(&UserInfo::default(), &Assumptions::default_tables());
        let records = update_record(&records, 0, RecordEdit::PaymentMonths(12)).unwrap();
        let records = update_record(&records, 0, RecordEdit::MonthlySalary(2_500.0)).unwrap();

        let mut buf = Vec::new();
        write_records(&mut buf, &records[..2]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "year,socialAverageSalary,paymentMonths,monthlySalary,yearlyPayment,paymentIndex\n\
             2004,2033,12,2500,2400,1.23\n\
             2005,2235,0,0,0,0\n"
        );
    }

    #[test]
    fn test_export_then_import() {
        let records = build_records(&UserInfo::default(), &Assumptions::default_tables());
        let records = update_record(&records, 2, RecordEdit::PaymentMonths(7)).unwrap();
        let records = update_record(&records, 2, RecordEdit::MonthlySalary(3_333.0)).unwrap();

        let mut buf = Vec::new();
        write_records(&mut buf, &records).unwrap();
        let imported = read_records(buf.as_slice()).unwrap();

        assert_eq!(imported, records);
    }

    #[test]
    fn test_permissive_import() {
        let data = "\
year,paymentMonths,monthlySalary,socialAverageSalary,yearlyPayment,paymentIndex
2010,12,abc,3896,,0.5
2011,6
,,,,,
2012, 3 ,4000,4692,960,0.85,extra
";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].year, 2010);
        assert_eq!(records[0].payment_months, 12);
        assert_relative_eq!(records[0].monthly_salary, 0.0);
        assert_relative_eq!(records[0].social_average_salary, 3896.0);
        assert_relative_eq!(records[0].yearly_payment, 0.0);
        assert_relative_eq!(records[0].payment_index, 0.5);

        assert_eq!(records[1].payment_months, 6);
        assert_relative_eq!(records[1].social_average_salary, 0.0);

        assert_eq!(records[2], ContributionRecord::new(0, 0.0));

        assert_eq!(records[3].payment_months, 3);
        assert_relative_eq!(records[3].monthly_salary, 4000.0);
    }

    #[test]
    fn test_import_keeps_rows_verbatim() {
        let data = "\
year,socialAverageSalary,paymentMonths,monthlySalary,yearlyPayment,paymentIndex
2030,1,30,100,5,9
2001,1480,12,1000,960,0.68
2001,1480,12,1000,960,0.68
";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].year, 2030);
        assert_eq!(records[0].payment_months, 30);
        assert_relative_eq!(records[0].payment_index, 9.0);

        let info = UserInfo::default();
        let warnings = import_warnings(&info, &records);
        assert_eq!(
            warnings,
            vec![
                "year 2001 is outside the career span 2004-2044".to_string(),
                "year 2001 is outside the career span 2004-2044".to_string(),
                "year 2001 appears more than once".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_warnings_for_built_records() {
        let info = UserInfo::default();
        let records = build_records(&info, &Assumptions::default_tables());
        assert!(import_warnings(&info, &records).is_empty());
    }
}
