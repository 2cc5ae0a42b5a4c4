use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type Price = Decimal;
pub type Amount = Decimal;
/// Fixed-point integer at the configured scale (18 decimals unless configured otherwise).
pub type Wei = U256;
pub type MarketId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Side {
    Buy = 0,
    Sell = 1,
}

impl Side {
    /// Value used for the `side` field of a signed order.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// One resting price level, serialized as `[price, quantity]`.
///
/// Reads both `["0.5", "3"]` and `[0.5, 3]`. Numbers are taken from their
/// digits, never through a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel(
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")] pub Price,
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")] pub Amount,
);

impl DepthLevel {
    pub fn new(price: Price, quantity: Amount) -> Self {
        DepthLevel(price, quantity)
    }

    pub fn price(&self) -> Price {
        self.0
    }

    pub fn quantity(&self) -> Amount {
        self.1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_id: Option<MarketId>,
    pub update_timestamp_ms: i64,
    // Lowest ask first
    #[serde(default)]
    pub asks: Vec<DepthLevel>,
    // Highest bid first
    #[serde(default)]
    pub bids: Vec<DepthLevel>,
}

impl Book {
    pub fn new(update_timestamp_ms: i64, asks: Vec<DepthLevel>, bids: Vec<DepthLevel>) -> Self {
        Book {
            market_id: None,
            update_timestamp_ms,
            asks,
            bids,
        }
    }

    /// Levels a taker on `side` consumes: asks for a buy, bids for a sell.
    pub fn levels_for(&self, side: Side) -> &[DepthLevel] {
        match side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        }
    }

    /// Sorts both sides best price first (asks ascending, bids descending).
    ///
    /// Levels are consumed in the order they are stored, so a book coming from
    /// a source with unknown ordering should go through here first.
    pub fn normalized(mut self) -> Self {
        self.asks.sort_by(|a, b| a.price().cmp(&b.price()));
        self.bids.sort_by(|a, b| b.price().cmp(&a.price()));
        self
    }

    /// Price of the last ask level, the most expensive one in a sorted book.
    pub fn worst_ask(&self) -> Option<Price> {
        self.asks.last().map(DepthLevel::price)
    }

    /// Price of the last bid level, the cheapest one in a sorted book.
    pub fn worst_bid(&self) -> Option<Price> {
        self.bids.last().map(DepthLevel::price)
    }
}

/// Amounts to embed in a signed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAmounts {
    // Worst level touched for market orders, the limit price otherwise
    pub last_price: Wei,
    pub price_per_share: Wei,
    pub maker_amount: Wei,
    pub taker_amount: Wei,
}

/// Market order terms, keyed either by share quantity or by currency budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MarketOrder {
    #[serde(rename_all = "camelCase")]
    ByQuantity { side: Side, quantity_wei: Wei },
    // Budgets only make sense for buys, so there is no side to get wrong
    #[serde(rename_all = "camelCase")]
    ByValue { value_wei: Wei },
}

impl MarketOrder {
    pub fn side(&self) -> Side {
        match self {
            MarketOrder::ByQuantity { side, .. } => *side,
            MarketOrder::ByValue { .. } => Side::Buy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrder {
    pub side: Side,
    pub price_per_share_wei: Wei,
    pub quantity_wei: Wei,
}
