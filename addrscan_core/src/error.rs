use thiserror::Error;

/// Errors raised while assembling the address grammar.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),

    #[error("token list `{0}` is empty")]
    EmptyTokenList(&'static str),

    #[error("invalid token {token:?} in `{list}`: expected ASCII letters only")]
    InvalidToken { list: &'static str, token: String },
}

/// Errors raised when a tabular column cannot be handed to the matcher.
///
/// No-match is never an error; these only cover cells that are not text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    #[error("row {row}: column `{column}` is missing")]
    MissingColumn { row: usize, column: String },

    #[error("row {row}: column `{column}` holds {found}, expected text")]
    NotText {
        row: usize,
        column: String,
        found: &'static str,
    },
}
