use serde::Serialize;
use tracing::debug;

/// A person's income for one calendar year.
///
/// Records only enter a register through [`IncomeRegister::add`], which validates
/// the amount, so they cannot be deserialized directly:
///
/// ```compile_fail
/// let record: dagpenger::IncomeRecord =
///     serde_json::from_str(r#"{"year":2024,"amount":-1.0}"#).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncomeRecord {
    year: i32,
    amount: f64,
}

impl IncomeRecord {
    pub fn new(year: i32, amount: f64) -> Self {
        Self { year, amount }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Misuse of the register by the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {index} is out of range for a register of {len} record(s)")]
    OutOfRange { index: usize, len: usize },
}

/// Income records kept sorted newest year first.
///
/// Records sharing a year stay in insertion order, so index 0 is always the
/// earliest-added record of the most recent year on file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IncomeRegister {
    records: Vec<IncomeRecord>,
}

impl IncomeRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a register from any sequence of records, failing on the first invalid one.
    pub fn from_records<I>(records: I) -> Result<Self, RegisterError>
    where
        I: IntoIterator<Item = IncomeRecord>,
    {
        let mut register = Self::new();
        for record in records {
            register.add(record)?;
        }
        Ok(register)
    }

    pub fn add(&mut self, record: IncomeRecord) -> Result<(), RegisterError> {
        if !record.amount.is_finite() || record.amount < 0.0 {
            return Err(RegisterError::InvalidArgument(format!(
                "income for {} must be a non-negative amount, got {}",
                record.year, record.amount
            )));
        }

        let position = self
            .records
            .partition_point(|existing| existing.year >= record.year);
        self.records.insert(position, record);

        debug!(
            year = record.year,
            amount = record.amount,
            position,
            "income record added"
        );
        Ok(())
    }

    pub fn at(&self, index: usize) -> Result<&IncomeRecord, RegisterError> {
        self.records.get(index).ok_or(RegisterError::OutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// The record for the most recent year on file.
    pub fn latest(&self) -> Result<&IncomeRecord, RegisterError> {
        self.at(0)
    }

    /// Sums the `count` most recent incomes. A shorter history sums whatever is on file.
    pub fn sum_recent(&self, count: usize) -> Result<f64, RegisterError> {
        if count == 0 {
            return Err(RegisterError::InvalidArgument(
                "number of years to sum must be positive".to_string(),
            ));
        }

        Ok(self
            .records
            .iter()
            .take(count)
            .map(IncomeRecord::amount)
            .sum())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IncomeRecord> {
        self.records.iter()
    }
}
