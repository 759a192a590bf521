use crate::config::{DemoConfig, OutputFormat};
use crate::strategy::{Contract, ContractError, Quote};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("Failed to encode quote: {0}")]
    Json(#[from] serde_json::Error),
}

/// Walks the configured providers through one `Contract`, switching the
/// strategy before each computation.
pub fn collect_quotes(config: &DemoConfig) -> Result<Vec<Quote>, ContractError> {
    let mut contract = Contract::new();
    config
        .providers
        .iter()
        .map(|provider| {
            contract.set_strategy(provider.boxed());
            contract.quote(&config.offer)
        })
        .collect()
}

pub fn render_lines(config: &DemoConfig) -> Result<Vec<String>, DemoError> {
    info!(
        tariff = %config.offer.tariff,
        providers = config.providers.len(),
        "pricing offer"
    );

    let quotes = collect_quotes(config)?;
    let lines = match config.output {
        OutputFormat::Text => quotes.iter().map(Quote::to_string).collect(),
        OutputFormat::Json => quotes
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?,
    };
    Ok(lines)
}
