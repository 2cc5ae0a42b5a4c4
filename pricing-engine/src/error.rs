use core_types::Wei;
use fixed_point::FixedPointError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid quantityWei {quantity}: must be at least {minimum}")]
    InvalidQuantity { quantity: Wei, minimum: Wei },

    #[error("invalid valueWei {value}: must be at least {minimum}")]
    InvalidValue { value: Wei, minimum: Wei },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    FixedPoint(#[from] FixedPointError),
}

impl Error {
    /// True for both flavours of "order too small": the caller must trade a larger size.
    pub fn is_invalid_quantity(&self) -> bool {
        matches!(self, Error::InvalidQuantity { .. } | Error::InvalidValue { .. })
    }
}
