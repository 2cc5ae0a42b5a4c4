use core_types::{OrderAmounts, Wei};
use fixed_point::truncate_significant;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TruncatedField {
    Price,
    Quantity,
    // Share count estimated from a market buy budget
    Shares,
}

/// Non-fatal conditions noticed while computing amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Advisory {
    #[serde(rename_all = "camelCase")]
    StaleBook { age_ms: u64, window_ms: u64 },
    #[serde(rename_all = "camelCase")]
    PrecisionTruncated {
        field: TruncatedField,
        original: Wei,
        truncated: Wei,
    },
}

impl Advisory {
    pub fn log(&self) {
        match self {
            Advisory::StaleBook { age_ms, window_ms } => {
                tracing::warn!(
                    age_ms,
                    window_ms,
                    "order book is potentially stale, consider using a more recent one"
                );
            }
            Advisory::PrecisionTruncated {
                field,
                original,
                truncated,
            } => {
                tracing::debug!(
                    ?field,
                    %original,
                    %truncated,
                    "truncated to significant digits"
                );
            }
        }
    }
}

/// Amounts plus whatever advisories were raised on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub amounts: OrderAmounts,
    pub advisories: Vec<Advisory>,
}

impl Calculation {
    pub fn new(amounts: OrderAmounts, advisories: Vec<Advisory>) -> Self {
        Calculation {
            amounts,
            advisories,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.advisories
            .iter()
            .any(|a| matches!(a, Advisory::StaleBook { .. }))
    }

    pub fn was_truncated(&self, field: TruncatedField) -> bool {
        self.advisories.iter().any(|a| {
            matches!(a, Advisory::PrecisionTruncated { field: f, .. } if *f == field)
        })
    }

    /// Hands every advisory to `tracing`: stale books at warn, truncations at debug.
    pub fn log_advisories(&self) {
        for advisory in &self.advisories {
            advisory.log();
        }
    }

    pub fn into_amounts(self) -> OrderAmounts {
        self.amounts
    }
}

/// Truncates `value` to `digits` significant digits, recording an advisory if anything was cut.
pub(crate) fn truncate_noting(
    field: TruncatedField,
    value: Wei,
    digits: u32,
    advisories: &mut Vec<Advisory>,
) -> Wei {
    let truncated = truncate_significant(value, digits);

    if truncated != value {
        advisories.push(Advisory::PrecisionTruncated {
            field,
            original: value,
            truncated,
        });
    }

    truncated
}
