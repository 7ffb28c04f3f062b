use super::register::{IncomeRecord, IncomeRegister, RegisterError};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum IncomeImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Register(RegisterError),
}

impl std::fmt::Display for IncomeImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncomeImportError::Io(err) => write!(f, "failed to read income file: {}", err),
            IncomeImportError::Csv(err) => write!(f, "invalid income CSV data: {}", err),
            IncomeImportError::Register(err) => {
                write!(f, "could not add income to register: {}", err)
            }
        }
    }
}

impl std::error::Error for IncomeImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IncomeImportError::Io(err) => Some(err),
            IncomeImportError::Csv(err) => Some(err),
            IncomeImportError::Register(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for IncomeImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IncomeImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<RegisterError> for IncomeImportError {
    fn from(err: RegisterError) -> Self {
        Self::Register(err)
    }
}

/// Loads an [`IncomeRegister`] from a `year,amount` CSV export.
pub struct IncomeImporter;

impl IncomeImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<IncomeRegister, IncomeImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<IncomeRegister, IncomeImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut register = IncomeRegister::new();

        for row in csv_reader.deserialize::<IncomeRow>() {
            let row = row?;
            register.add(IncomeRecord::new(row.year, row.amount))?;
        }

        Ok(register)
    }
}

#[derive(Debug, Deserialize)]
struct IncomeRow {
    #[serde(alias = "Year", alias = "YEAR")]
    year: i32,
    #[serde(
        alias = "Amount",
        alias = "AMOUNT",
        default,
        deserialize_with = "empty_string_as_zero"
    )]
    amount: f64,
}

fn empty_string_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(0.0),
        Some(value) => value
            .replace(['_', ' '], "")
            .parse::<f64>()
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn imports_rows_newest_first() {
        let csv = "year,amount\n2022,445000\n2024,465000\n2023,300000\n";

        let register = IncomeImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(register.len(), 3);
        assert_eq!(register.latest().expect("non-empty").year(), 2024);
        assert_eq!(register.sum_recent(3), Ok(1_210_000.0));
    }

    #[test]
    fn blank_amount_counts_as_zero() {
        let csv = "Year, Amount\n2023,\n2024, 467 000\n";

        let register = IncomeImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        let amounts: Vec<f64> = register.iter().map(IncomeRecord::amount).collect();
        assert_eq!(amounts, vec![467000.0, 0.0]);
    }

    #[test]
    fn negative_amount_surfaces_register_error() {
        let csv = "year,amount\n2024,-5\n";

        let err = IncomeImporter::from_reader(Cursor::new(csv)).expect_err("negative rejected");

        assert!(matches!(
            err,
            IncomeImportError::Register(RegisterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn malformed_amount_surfaces_csv_error() {
        let csv = "year,amount\n2024,lots\n";

        let err = IncomeImporter::from_reader(Cursor::new(csv)).expect_err("garbage rejected");

        assert!(matches!(err, IncomeImportError::Csv(_)));
    }
}
