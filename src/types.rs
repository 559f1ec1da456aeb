use crate::errors::CsvParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single validated financial record extracted from one CSV data line.
///
/// `date` is kept as an opaque string: the surrounding application decides
/// how (and whether) to interpret it as a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
}

/// Direction of a transaction. The CSV `type` column must match one of the
/// two lowercase names exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl FromStr for TransactionKind {
    type Err = CsvParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(CsvParseError::InvalidKind(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("income", Some(TransactionKind::Income))]
    #[case("expense", Some(TransactionKind::Expense))]
    #[case("Income", None)] // case-sensitive
    #[case("EXPENSE", None)]
    #[case("refund", None)]
    #[case("", None)]
    #[case(" income", None)] // caller trims before parsing
    fn test_kind_from_str(#[case] input: &str, #[case] expected: Option<TransactionKind>) {
        assert_eq!(input.parse::<TransactionKind>().ok(), expected);
    }

    #[rstest]
    #[case(TransactionKind::Income, "income")]
    #[case(TransactionKind::Expense, "expense")]
    fn test_kind_display(#[case] kind: TransactionKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn test_transaction_serialization() {
        let transaction = Transaction {
            date: "2024-01-01".to_string(),
            title: "Salary".to_string(),
            amount: 5000.0,
            kind: TransactionKind::Income,
            category: "Work".to_string(),
        };

        let json = serde_json::to_string(&transaction).unwrap();
        assert!(json.contains("\"type\":\"income\""));
        assert!(json.contains("Salary"));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, transaction);
    }

    #[test]
    fn test_transaction_deserializes_csv_field_names() {
        let json = r#"{
            "date": "2024-01-02",
            "title": "Coffee",
            "amount": 3.5,
            "type": "expense",
            "category": "Food"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.kind, TransactionKind::Expense);
        assert_eq!(transaction.amount, 3.5);
    }
}
