use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{FixedPointError, Result};

pub const DEFAULT_DECIMALS: u32 = 18;

/// Keeps `mantissa * 10^decimals` of any `Decimal` well inside 256 bits.
pub const MAX_DECIMALS: u32 = 36;

pub(crate) fn pow10(exponent: u32) -> U256 {
    U256::from(10u8).pow(U256::from(exponent))
}

/// Integer scale factor `10^decimals` used to represent fractional values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Scale {
    decimals: u32,
    one: U256,
}

impl Scale {
    pub fn new(decimals: u32) -> Result<Self> {
        if decimals > MAX_DECIMALS {
            return Err(FixedPointError::UnsupportedDecimals(decimals));
        }

        Ok(Scale {
            decimals,
            one: pow10(decimals),
        })
    }

    /// 18 decimals, the precision of the exchange's collateral and share tokens.
    pub fn wei() -> Self {
        Scale {
            decimals: DEFAULT_DECIMALS,
            one: pow10(DEFAULT_DECIMALS),
        }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// The fixed-point representation of 1.
    pub fn one(&self) -> U256 {
        self.one
    }

    /// `units * 10^decimals`
    pub fn units(&self, units: u64) -> U256 {
        U256::from(units) * self.one
    }

    /// Converts a decimal into its fixed-point integer.
    ///
    /// The conversion works on the decimal's mantissa and exponent, so `0.777`
    /// is exactly `777 * 10^(decimals - 3)`. Digits finer than the scale are
    /// truncated toward zero.
    pub fn to_fixed(&self, value: Decimal) -> Result<U256> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(FixedPointError::NegativeValue(value));
        }

        let mantissa = U256::from(value.mantissa().unsigned_abs());
        let exponent = value.scale();

        if exponent <= self.decimals {
            Ok(mantissa * pow10(self.decimals - exponent))
        } else {
            Ok(mantissa / pow10(exponent - self.decimals))
        }
    }

    /// Parses an exact decimal string such as `"0.777"` into a fixed-point integer.
    pub fn parse_fixed(&self, input: &str) -> Result<U256> {
        let value = Decimal::from_str_exact(input.trim()).map_err(|e| FixedPointError::Parse {
            input: input.to_string(),
            reason: e.to_string(),
        })?;

        self.to_fixed(value)
    }

    /// `a * b / one`, i.e. the product of two fixed-point values.
    pub fn mul(&self, a: U256, b: U256) -> Result<U256> {
        mul_div(a, b, self.one)
    }

    /// `a * one / b`, i.e. the quotient of two fixed-point values. Zero when `b` is zero.
    pub fn div(&self, a: U256, b: U256) -> Result<U256> {
        if b.is_zero() {
            return Ok(U256::ZERO);
        }

        mul_div(a, self.one, b)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::wei()
    }
}

impl TryFrom<u32> for Scale {
    type Error = FixedPointError;

    fn try_from(decimals: u32) -> Result<Self> {
        Scale::new(decimals)
    }
}

impl From<Scale> for u32 {
    fn from(scale: Scale) -> u32 {
        scale.decimals
    }
}

fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256> {
    a.checked_mul(b)
        .map(|product| product / denominator)
        .ok_or(FixedPointError::Overflow)
}
