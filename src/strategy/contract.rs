use super::{Offer, PricingStrategy, Quote};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractError {
    #[error("No pricing strategy selected; call set_strategy before compute")]
    NoStrategySelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractState {
    Unconfigured,
    Configured,
}

// ============================================================================
// Runtime-swappable context (trait objects)
// ============================================================================

/// Holds the currently selected pricing strategy and delegates to it.
///
/// Starts `Unconfigured` unless built with [`Contract::with_strategy`]. Once a
/// strategy is installed it can be replaced but never removed.
#[derive(Default)]
pub struct Contract {
    strategy: Option<Box<dyn PricingStrategy>>,
}

impl Contract {
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn with_strategy(strategy: Box<dyn PricingStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PricingStrategy>) -> &mut Self {
        debug!(strategy = strategy.name(), "switching pricing strategy");
        self.strategy = Some(strategy);
        self
    }

    pub fn compute(&self, offer: &Offer) -> Result<f64, ContractError> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or(ContractError::NoStrategySelected)?;
        let price = strategy.compute(offer);
        debug!(strategy = strategy.name(), price, "computed price");
        Ok(price)
    }

    pub fn quote(&self, offer: &Offer) -> Result<Quote, ContractError> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or(ContractError::NoStrategySelected)?;
        Ok(Quote {
            provider: strategy.name().to_string(),
            price: strategy.compute(offer),
        })
    }

    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    pub fn state(&self) -> ContractState {
        match self.strategy {
            Some(_) => ContractState::Configured,
            None => ContractState::Unconfigured,
        }
    }
}

// ============================================================================
// Zero-cost context with generics
// ============================================================================

/// Strategy fixed at compile time: always configured, no allocation.
pub struct StaticContract<S> {
    strategy: S,
}

impl<S: PricingStrategy> StaticContract<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn compute(&self, offer: &Offer) -> f64 {
        self.strategy.compute(offer)
    }

    pub fn quote(&self, offer: &Offer) -> Quote {
        Quote {
            provider: self.strategy.name().to_string(),
            price: self.compute(offer),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
