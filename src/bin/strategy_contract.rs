// Strategy Pattern demo: one contract, three providers, switched at runtime.
//
//   cargo run --bin strategy_contract              # built-in offer
//   cargo run --bin strategy_contract -- demo.toml # custom offer/providers

use design_patterns::demo::render_lines;
use design_patterns::logging::init_tracing;
use design_patterns::DemoConfig;
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };
    init_tracing(&config.log_level);

    for line in render_lines(&config)? {
        println!("{line}");
    }

    Ok(())
}
