//! Parse personal-finance transaction records from CSV text.
//!
//! ```rust,ignore
//! use transaction_csv_rs::ParserBuilder;
//!
//! let transactions = ParserBuilder::new()
//!     .content(&csv_content)
//!     .parse()?;
//! ```
//!
//! The first CSV line names the columns; `date`, `title`, `amount`,
//! `type` and `category` are required, in any order. Rows that fail
//! validation are skipped with a warning, never returned half-filled.

mod builder;
mod types;

pub mod diagnostics;
pub mod errors;
pub mod parser;

pub use builder::ParserBuilder;
pub use diagnostics::{CollectingDiagnostics, Diagnostics, LogDiagnostics};
pub use errors::{CsvParseError, CsvResult};
pub use parser::{parse, parse_with};
pub use types::{Transaction, TransactionKind};
