use crate::diagnostics::Diagnostics;
use crate::errors::{CsvParseError, CsvResult};
use crate::parser;
use crate::types::Transaction;

/// Builder-style front door for the parser.
///
/// Wraps [`parser::parse`] and [`parser::parse_with`] behind a chainable
/// API; the free functions remain available for direct use.
#[derive(Debug, Default)]
pub struct ParserBuilder {
    content: Option<String>,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Parse the configured content, sending row warnings to the `log`
    /// facade.
    pub fn parse(self) -> CsvResult<Vec<Transaction>> {
        let content = self.content.ok_or(CsvParseError::MissingContent)?;
        parser::parse(&content)
    }

    /// Parse the configured content, reporting row warnings through the
    /// given diagnostics sink.
    pub fn parse_with<D: Diagnostics>(self, diagnostics: &mut D) -> CsvResult<Vec<Transaction>> {
        let content = self.content.ok_or(CsvParseError::MissingContent)?;
        parser::parse_with(&content, diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingDiagnostics;
    use crate::types::TransactionKind;

    const SAMPLE_CSV: &str = "\
date,title,amount,type,category
2024-01-01,Salary,5000,income,Work
2024-01-02,\"Coffee, tea\",3.5,expense,Food";

    #[test]
    fn test_builder_new() {
        let builder = ParserBuilder::new();
        assert!(builder.content.is_none());
    }

    #[test]
    fn test_builder_content() {
        let builder = ParserBuilder::new().content("test content");
        assert_eq!(builder.content.unwrap(), "test content");
    }

    #[test]
    fn test_builder_missing_content() {
        let result = ParserBuilder::new().parse();
        assert!(matches!(result, Err(CsvParseError::MissingContent)));
    }

    #[test]
    fn test_builder_parse() {
        let transactions = ParserBuilder::new().content(SAMPLE_CSV).parse().unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].kind, TransactionKind::Income);
        assert_eq!(transactions[1].title, "Coffee, tea");
    }

    #[test]
    fn test_builder_parse_with_sink() {
        let csv = format!("{SAMPLE_CSV}\n2024-01-03,Bad,notanumber,expense,Food");
        let mut sink = CollectingDiagnostics::new();

        let transactions = ParserBuilder::new()
            .content(&csv)
            .parse_with(&mut sink)
            .unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(sink.warnings().len(), 1);
    }

    #[test]
    fn test_builder_missing_header_is_fatal() {
        let result = ParserBuilder::new()
            .content("title,amount\nSalary,5000")
            .parse();

        assert!(matches!(result, Err(CsvParseError::MissingColumns(_))));
    }
}
