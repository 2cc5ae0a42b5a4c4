/**
 * Exact decimal <-> fixed-point integer arithmetic.
 * - `Scale` converts decimals into integers at a fixed number of decimals
 * - `truncate` bounds the number of significant digits of an integer
 */
mod scale;
mod truncate;

pub use scale::{DEFAULT_DECIMALS, MAX_DECIMALS, Scale};
pub use truncate::{significant_digits, truncate_significant, truncate_significant_signed};

use rust_decimal::Decimal;

pub type Result<T> = std::result::Result<T, FixedPointError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixedPointError {
    #[error("cannot represent negative value {0} as a fixed-point amount")]
    NegativeValue(Decimal),

    #[error("invalid decimal string {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("unsupported number of decimals: {0} (max {max})", max = MAX_DECIMALS)]
    UnsupportedDecimals(u32),

    #[error("fixed-point overflow")]
    Overflow,
}
