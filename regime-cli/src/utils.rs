use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a command-line amount cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Strips whitespace, a leading rupee sign and any digit grouping commas.
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed
        .strip_prefix('₹')
        .or_else(|| trimmed.strip_prefix("Rs."))
        .unwrap_or(trimmed);
    trimmed.trim().replace(',', "")
}

/// Parses a rupee amount typed by a user.
///
/// Both western (`1,200,000`) and Indian (`12,00,000`) grouping are accepted,
/// as is a leading `₹`. Empty input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}
