use cosmwasm_std::Uint128;
use thiserror::Error;

/// Minor units per display unit (cents per yuan/dollar/etc).
pub const MINOR_PER_UNIT: u128 = 100;

#[derive(Error, Debug, PartialEq)]
pub enum MoneyError {
    #[error("invalid amount '{input}': not a decimal number")]
    InvalidDecimal { input: String },

    #[error("invalid amount '{input}': at most two fractional digits allowed")]
    TooManyFractionDigits { input: String },

    #[error("amount '{input}' is too large")]
    Overflow { input: String },
}

/// Parse a decimal string like "100", "100.5" or "100.50" into minor units.
///
/// At most two fractional digits; missing digits are padded ("0.5" == 50
/// minor units). Signs are not accepted.
pub fn parse_decimal(input: &str) -> Result<Uint128, MoneyError> {
    let invalid = || MoneyError::InvalidDecimal {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac.len() > 2 {
        return Err(MoneyError::TooManyFractionDigits {
            input: input.to_string(),
        });
    }

    let units: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| MoneyError::Overflow {
            input: input.to_string(),
        })?
    };

    // Pad "5" -> 50, "05" -> 5
    let cents: u128 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u128>().map_err(|_| invalid())? * 10,
        _ => frac.parse::<u128>().map_err(|_| invalid())?,
    };

    units
        .checked_mul(MINOR_PER_UNIT)
        .and_then(|m| m.checked_add(cents))
        .map(Uint128::from)
        .ok_or(MoneyError::Overflow {
            input: input.to_string(),
        })
}

/// Render minor units as a two-decimal string: 12345 -> "123.45".
pub fn format_decimal(amount: Uint128) -> String {
    let raw = amount.u128();
    format!("{}.{:02}", raw / MINOR_PER_UNIT, raw % MINOR_PER_UNIT)
}
