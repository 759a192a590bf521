// Strategy Pattern: a family of pricing algorithms that can be swapped at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

mod contract;
mod providers;

pub use contract::{Contract, ContractError, ContractState, StaticContract};
pub use providers::{FnStrategy, OTwo, Provider, Telekom, UnknownProvider, WinSim};

// ============================================================================
// Shared domain types
// ============================================================================

/// A mobile plan offer. Pricing strategies treat it as opaque input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub tariff: String,
    pub calls: String,
    pub speed: String,
}

impl Offer {
    pub fn new(
        tariff: impl Into<String>,
        calls: impl Into<String>,
        speed: impl Into<String>,
    ) -> Self {
        Self {
            tariff: tariff.into(),
            calls: calls.into(),
            speed: speed.into(),
        }
    }
}

impl Default for Offer {
    fn default() -> Self {
        Offer::new("Unlimited", "All Free", "high")
    }
}

/// The common contract every pricing algorithm implements.
///
/// Implementations must be pure: same offer in, same price out, nothing
/// printed or mutated along the way.
pub trait PricingStrategy {
    fn name(&self) -> &str;
    fn compute(&self, offer: &Offer) -> f64;
}

impl<S: PricingStrategy + ?Sized> PricingStrategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compute(&self, offer: &Offer) -> f64 {
        (**self).compute(offer)
    }
}

/// A computed price together with the provider that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub provider: String,
    pub price: f64,
}

impl fmt::Display for Quote {
    // f64's Display drops a trailing ".0", so 20.0 renders as "20".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} Euro.", self.provider, self.price)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offer() {
        let offer = Offer::default();
        assert_eq!(offer.tariff, "Unlimited");
        assert_eq!(offer.calls, "All Free");
        assert_eq!(offer.speed, "high");
    }

    #[test]
    fn test_quote_display_drops_trailing_zero() {
        let quote = Quote {
            provider: "Telekom".to_string(),
            price: 20.0,
        };
        assert_eq!(quote.to_string(), "Telekom: 20 Euro.");
    }

    #[test]
    fn test_quote_display_keeps_fraction() {
        let quote = Quote {
            provider: "O2".to_string(),
            price: 24.99,
        };
        assert_eq!(quote.to_string(), "O2: 24.99 Euro.");
    }

    #[test]
    fn test_boxed_strategy_forwards() {
        let boxed: Box<dyn PricingStrategy> = Box::new(Telekom);
        assert_eq!(boxed.name(), "Telekom");
        assert_eq!(boxed.compute(&Offer::default()), 20.0);
    }
}
