use super::{Offer, PricingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Concrete strategies as unit structs (trait objects)
// ============================================================================

pub struct Telekom;

impl PricingStrategy for Telekom {
    fn name(&self) -> &str {
        "Telekom"
    }

    fn compute(&self, _offer: &Offer) -> f64 {
        20.0
    }
}

pub struct OTwo;

impl PricingStrategy for OTwo {
    fn name(&self) -> &str {
        "O2"
    }

    fn compute(&self, _offer: &Offer) -> f64 {
        25.0
    }
}

pub struct WinSim;

impl PricingStrategy for WinSim {
    fn name(&self) -> &str {
        "Winsim"
    }

    fn compute(&self, _offer: &Offer) -> f64 {
        18.0
    }
}

// ============================================================================
// Closed set of providers as an enum (no heap, no vtable)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Provider {
    Telekom,
    #[serde(rename = "o2")]
    OTwo,
    #[serde(rename = "winsim")]
    WinSim,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Telekom, Provider::OTwo, Provider::WinSim];

    /// Hands out the matching unit-struct strategy behind a trait object.
    pub fn boxed(self) -> Box<dyn PricingStrategy> {
        match self {
            Provider::Telekom => Box::new(Telekom),
            Provider::OTwo => Box::new(OTwo),
            Provider::WinSim => Box::new(WinSim),
        }
    }
}

impl PricingStrategy for Provider {
    fn name(&self) -> &str {
        match self {
            Provider::Telekom => "Telekom",
            Provider::OTwo => "O2",
            Provider::WinSim => "Winsim",
        }
    }

    fn compute(&self, offer: &Offer) -> f64 {
        match self {
            Provider::Telekom => Telekom.compute(offer),
            Provider::OTwo => OTwo.compute(offer),
            Provider::WinSim => WinSim.compute(offer),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PricingStrategy::name(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown provider '{0}' (expected one of: telekom, o2, winsim)")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "telekom" => Ok(Provider::Telekom),
            "o2" => Ok(Provider::OTwo),
            "winsim" => Ok(Provider::WinSim),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

// Config files go through the same parser as `str::parse`.
impl TryFrom<String> for Provider {
    type Error = UnknownProvider;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Functional strategy with closures
// ============================================================================

pub struct FnStrategy<F>
where
    F: Fn(&Offer) -> f64,
{
    name: String,
    compute_fn: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&Offer) -> f64,
{
    pub fn new(name: impl Into<String>, compute_fn: F) -> Self {
        Self {
            name: name.into(),
            compute_fn,
        }
    }
}

impl<F> PricingStrategy for FnStrategy<F>
where
    F: Fn(&Offer) -> f64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, offer: &Offer) -> f64 {
        (self.compute_fn)(offer)
    }
}

// ============================================================================
// Tests
// ============================================================================
