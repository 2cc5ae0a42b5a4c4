use core_types::{Book, OrderAmounts, Side, Wei};
use order_book::{Clock, DepthBookWalker, ProcessedBook, StalenessGuard, SystemClock};

use crate::advisory::{Advisory, Calculation, TruncatedField, truncate_noting};
use crate::config::AmountsConfig;
use crate::error::{Error, Result};

/// Market order amounts for a target share quantity.
///
/// Orders are signed against the worst level the fill reaches rather than the
/// average price, so the collateral offered (buy) or asked (sell) always covers
/// the whole sweep when it settles.
#[derive(Debug, Clone)]
pub struct MarketByQuantityEngine<C = SystemClock> {
    config: AmountsConfig,
    walker: DepthBookWalker,
    guard: StalenessGuard,
    clock: C,
}

impl MarketByQuantityEngine<SystemClock> {
    pub fn new(config: AmountsConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> MarketByQuantityEngine<C> {
    pub fn with_clock(config: AmountsConfig, clock: C) -> Result<Self> {
        let scale = config.validate()?;

        Ok(MarketByQuantityEngine {
            config,
            walker: DepthBookWalker::new(scale),
            guard: StalenessGuard::new(config.stale_after_ms),
            clock,
        })
    }

    pub fn config(&self) -> &AmountsConfig {
        &self.config
    }

    pub fn walker(&self) -> &DepthBookWalker {
        &self.walker
    }

    pub fn amounts(&self, side: Side, quantity_wei: Wei, book: &Book) -> Result<Calculation> {
        let mut advisories = Vec::new();

        let quantity = truncate_noting(
            TruncatedField::Quantity,
            quantity_wei,
            self.config.quantity_significant_digits,
            &mut advisories,
        );

        if quantity < self.config.min_quantity_wei {
            return Err(Error::InvalidQuantity {
                quantity,
                minimum: self.config.min_quantity_wei,
            });
        }

        if let Some(age_ms) = self
            .guard
            .check(book.update_timestamp_ms, self.clock.now_ms())
        {
            advisories.push(Advisory::StaleBook {
                age_ms,
                window_ms: self.guard.window_ms(),
            });
        }

        let ProcessedBook {
            quantity: consumed,
            weighted_price,
            last_price,
        } = self.walker.process_book(book.levels_for(side), quantity)?;

        let scale = self.walker.scale();
        // Zero when nothing was consumed
        let price_per_share = scale.div(weighted_price, consumed)?;
        let notional = scale.mul(last_price, consumed)?;

        let (maker_amount, taker_amount) = match side {
            Side::Buy => (notional, consumed),
            Side::Sell => (consumed, notional),
        };

        Ok(Calculation::new(
            OrderAmounts {
                last_price,
                price_per_share,
                maker_amount,
                taker_amount,
            },
            advisories,
        ))
    }
}

/// Market buy amounts for a currency budget.
///
/// The budget is first turned into a share count by sweeping the asks, then the
/// share count goes through [`MarketByQuantityEngine`], so both kinds of market
/// buy share one pricing formula.
#[derive(Debug, Clone)]
pub struct MarketByValueEngine<C = SystemClock> {
    quantity: MarketByQuantityEngine<C>,
}

impl MarketByValueEngine<SystemClock> {
    pub fn new(config: AmountsConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> MarketByValueEngine<C> {
    pub fn with_clock(config: AmountsConfig, clock: C) -> Result<Self> {
        Ok(Self::from_quantity_engine(MarketByQuantityEngine::with_clock(
            config, clock,
        )?))
    }

    /// Shares an already configured by-quantity engine, clock included.
    pub fn from_quantity_engine(quantity: MarketByQuantityEngine<C>) -> Self {
        MarketByValueEngine { quantity }
    }

    pub fn quantity_engine(&self) -> &MarketByQuantityEngine<C> {
        &self.quantity
    }

    pub fn amounts(&self, value_wei: Wei, book: &Book) -> Result<Calculation> {
        let config = self.quantity.config();

        if value_wei < config.min_value_wei {
            return Err(Error::InvalidValue {
                value: value_wei,
                minimum: config.min_value_wei,
            });
        }

        let fill = self.quantity.walker().shares_for_budget(&book.asks, value_wei)?;

        let mut advisories = Vec::new();
        let shares = truncate_noting(
            TruncatedField::Shares,
            fill.shares,
            config.quantity_significant_digits,
            &mut advisories,
        );

        // A book too thin to buy the minimum size is rejected here
        let mut calculation = self.quantity.amounts(Side::Buy, shares, book)?;

        advisories.append(&mut calculation.advisories);
        calculation.advisories = advisories;

        Ok(calculation)
    }
}
