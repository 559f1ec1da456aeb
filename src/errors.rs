use thiserror::Error;

/// Erros possíveis durante o parsing de transações CSV
#[derive(Error, Debug)]
pub enum CsvParseError {
    /// Uma ou mais colunas obrigatórias ausentes na linha de cabeçalho
    #[error("Required columns not found in CSV header: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// O builder foi chamado sem fornecer conteúdo
    #[error("Content is required")]
    MissingContent,

    /// Valor da coluna `type` que não é `income` nem `expense`.
    /// Absorvido pelo parser como diagnóstico de linha, nunca fatal.
    #[error("Invalid transaction type: {0}")]
    InvalidKind(String),
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type CsvResult<T> = Result<T, CsvParseError>;
