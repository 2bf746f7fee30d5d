use std::fmt;

/// The single error produced by cronex.
///
/// Every parse failure reports as this sentinel: wrong token count,
/// malformed field syntax, a bad range, or an unparseable step. It carries
/// no positional detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidExpression;

impl fmt::Display for InvalidExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid cron expression")
    }
}

impl std::error::Error for InvalidExpression {}
