use core_types::{DepthLevel, Wei};
use fixed_point::{Result, Scale};
/**
 * - walk a book side up to a target share quantity
 * - walk the asks up to a currency budget
 * - flag snapshots that are too old to trust
 */
mod staleness;

pub use staleness::{Clock, DEFAULT_STALE_AFTER_MS, FixedClock, StalenessGuard, SystemClock};

// Result of walking a book side for a target quantity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessedBook {
    // Shares consumed, at most the target
    pub quantity: Wei,
    // Sum of price * consumed per level, not yet divided into an average
    pub weighted_price: Wei,
    // Price of the last (worst) level reached
    pub last_price: Wei,
}

// Result of walking the asks for a currency budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetFill {
    pub shares: Wei,
    pub spent: Wei,
}

/// Sweeps depth levels in the order given. Callers pass each side best price
/// first: asks ascending, bids descending.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthBookWalker {
    scale: Scale,
}

impl DepthBookWalker {
    pub fn new(scale: Scale) -> Self {
        DepthBookWalker { scale }
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Consumes levels until `target` shares are filled or the levels run out.
    ///
    /// A thin book is not an error: the returned quantity is simply below the target.
    pub fn process_book(&self, levels: &[DepthLevel], target: Wei) -> Result<ProcessedBook> {
        let mut processed = ProcessedBook::default();

        for level in levels {
            let remaining = target.saturating_sub(processed.quantity);
            if remaining.is_zero() {
                break; // Target filled, later levels are never reached
            }

            let price = self.scale.to_fixed(level.price())?;
            let quantity = self.scale.to_fixed(level.quantity())?;

            // Partially consume the terminal level, otherwise take all of it
            let filled = if remaining < quantity { remaining } else { quantity };

            processed.quantity += filled;
            processed.weighted_price += self.scale.mul(price, filled)?;
            processed.last_price = price;
        }

        Ok(processed)
    }

    /// Number of shares `budget` buys when sweeping `asks`.
    ///
    /// Whole tiers are bought while they fit in the remaining budget; the first
    /// tier that does not fit is bought fractionally and ends the sweep.
    pub fn shares_for_budget(&self, asks: &[DepthLevel], budget: Wei) -> Result<BudgetFill> {
        let mut fill = BudgetFill::default();

        for level in asks {
            let remaining = budget.saturating_sub(fill.spent);
            if remaining.is_zero() {
                break;
            }

            let price = self.scale.to_fixed(level.price())?;
            let quantity = self.scale.to_fixed(level.quantity())?;
            let tier_cost = self.scale.mul(price, quantity)?;

            if tier_cost <= remaining {
                fill.shares += quantity;
                fill.spent += tier_cost;
                continue;
            }

            // Zero when the price is zero
            let fractional = self.scale.div(remaining, price)?;

            fill.shares += fractional;
            fill.spent += self.scale.mul(price, fractional)?;
            break;
        }

        Ok(fill)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use fixed_point::FixedPointError;
    use rust_decimal_macros::dec;

    use super::*;

    fn wei(value: u128) -> U256 {
        U256::from(value)
    }

    fn level(price: rust_decimal::Decimal, quantity: rust_decimal::Decimal) -> DepthLevel {
        DepthLevel::new(price, quantity)
    }

    fn asks() -> Vec<DepthLevel> {
        vec![level(dec!(0.5), dec!(3)), level(dec!(0.88), dec!(4))]
    }

    #[test]
    fn partially_consumes_terminal_level() {
        let walker = DepthBookWalker::default();

        let processed = walker
            .process_book(&asks(), wei(5_000_000_000_000_000_000))
            .unwrap();

        assert_eq!(processed.quantity, wei(5_000_000_000_000_000_000));
        // 0.5 * 3 + 0.88 * 2
        assert_eq!(processed.weighted_price, wei(3_260_000_000_000_000_000));
        assert_eq!(processed.last_price, wei(880_000_000_000_000_000));
    }

    #[test]
    fn stops_at_first_level_when_it_covers_target() {
        let walker = DepthBookWalker::default();

        let processed = walker
            .process_book(&asks(), wei(2_000_000_000_000_000_000))
            .unwrap();

        assert_eq!(processed.quantity, wei(2_000_000_000_000_000_000));
        assert_eq!(processed.weighted_price, wei(1_000_000_000_000_000_000));
        assert_eq!(processed.last_price, wei(500_000_000_000_000_000));
    }

    #[test]
    fn exact_level_boundary_keeps_that_level_as_last() {
        let walker = DepthBookWalker::default();

        let processed = walker
            .process_book(&asks(), wei(3_000_000_000_000_000_000))
            .unwrap();

        assert_eq!(processed.quantity, wei(3_000_000_000_000_000_000));
        assert_eq!(processed.last_price, wei(500_000_000_000_000_000));
    }

    #[test]
    fn thin_book_returns_less_than_target() {
        let walker = DepthBookWalker::default();

        let processed = walker
            .process_book(&asks(), wei(100_000_000_000_000_000_000))
            .unwrap();

        assert_eq!(processed.quantity, wei(7_000_000_000_000_000_000));
        assert_eq!(processed.weighted_price, wei(5_020_000_000_000_000_000));
        assert_eq!(processed.last_price, wei(880_000_000_000_000_000));
    }

    #[test]
    fn empty_side_yields_zeroes() {
        let processed = DepthBookWalker::default()
            .process_book(&[], wei(1_000_000_000_000_000_000))
            .unwrap();

        assert_eq!(processed, ProcessedBook::default());
    }

    #[test]
    fn negative_level_is_rejected() {
        let err = DepthBookWalker::default()
            .process_book(&[level(dec!(-0.5), dec!(3))], wei(1))
            .unwrap_err();

        assert_eq!(err, FixedPointError::NegativeValue(dec!(-0.5)));
    }

    #[test]
    fn budget_buys_fraction_of_first_tier() {
        let fill = DepthBookWalker::default()
            .shares_for_budget(&asks(), wei(1_000_000_000_000_000_000))
            .unwrap();

        assert_eq!(fill.shares, wei(2_000_000_000_000_000_000));
        assert_eq!(fill.spent, wei(1_000_000_000_000_000_000));
    }

    #[test]
    fn budget_sweeps_whole_tiers() {
        let asks = vec![level(dec!(0.25), dec!(2)), level(dec!(0.75), dec!(2))];

        let fill = DepthBookWalker::default()
            .shares_for_budget(&asks, wei(2_000_000_000_000_000_000))
            .unwrap();

        assert_eq!(fill.shares, wei(4_000_000_000_000_000_000));
        assert_eq!(fill.spent, wei(2_000_000_000_000_000_000));
    }

    #[test]
    fn budget_larger_than_book_buys_everything() {
        let fill = DepthBookWalker::default()
            .shares_for_budget(&asks(), wei(50_000_000_000_000_000_000))
            .unwrap();

        assert_eq!(fill.shares, wei(7_000_000_000_000_000_000));
        assert_eq!(fill.spent, wei(5_020_000_000_000_000_000));
    }

    #[test]
    fn walker_respects_alternate_scale() {
        let walker = DepthBookWalker::new(Scale::new(6).unwrap());

        let processed = walker
            .process_book(&asks(), wei(5_000_000))
            .unwrap();

        assert_eq!(processed.weighted_price, wei(3_260_000));
        assert_eq!(processed.last_price, wei(880_000));
    }
}
