//! # Design Patterns: Strategy, Factory, Singleton
//!
//! Small, independent snippets showing three classic patterns in Rust:
//!
//! ## Strategy
//! - `PricingStrategy` trait with Telekom, O2 and Winsim variants
//! - `Contract` context that swaps strategies at runtime
//! - `Provider` enum (zero-cost, exhaustive match)
//! - `StaticContract<S>` (compile-time strategy) and `FnStrategy` (closures)
//!
//! ## Factory
//! - `create_user` with destructured parameters and struct-update defaults
//! - `UserKind` tags parsed into an enum instead of magic numbers
//!
//! ## Singleton
//! - `Singleton<T>` backed by `OnceLock`
//! - `ProcessManager::global()` next to plain dependency injection
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin strategy_contract
//! cargo run --bin strategy_contract -- demo.toml
//! cargo run --bin creational
//! ```

pub mod config;
pub mod demo;
pub mod factory;
pub mod logging;
pub mod singleton;
pub mod strategy;

pub use config::{ConfigError, DemoConfig, OutputFormat};
pub use strategy::{
    Contract, ContractError, ContractState, FnStrategy, Offer, PricingStrategy, Provider, Quote,
    StaticContract, UnknownProvider,
};
