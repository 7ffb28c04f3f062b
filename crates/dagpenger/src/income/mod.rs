//! Annual income history for one person.

mod import;
mod register;

pub use import::{IncomeImportError, IncomeImporter};
pub use register::{IncomeRecord, IncomeRegister, RegisterError};
