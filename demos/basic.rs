//! Basic usage example
//!
//! Run with `RUST_LOG=envconf=trace` to see where each field was resolved from.

use envconf::{EnvConf, Loader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, EnvConf)]
struct Config {
    // Loaded from HOST
    #[env(name = "HOST")]
    pub host: String,

    // Loaded from PORT, derived from the field name. Zero when unset.
    pub port: u16,

    // Falls back to the default when DEBUG is not set
    #[env(name = "DEBUG", default = "true")]
    pub debug: bool,

    // Floating point with a default
    #[env(default = "0.5")]
    pub sample_ratio: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("HOST", "localhost");
    std::env::set_var("PORT", "8080");

    let mut config = Config::default();
    Loader::new().load(&mut config)?;

    println!("Configuration loaded:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);
    println!("  Sample Ratio: {}", config.sample_ratio);

    Ok(())
}
