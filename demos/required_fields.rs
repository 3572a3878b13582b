//! Example demonstrating required fields and error reporting

use envconf::{EnvConf, Error, Loader};

#[derive(Debug, Default, EnvConf)]
struct Config {
    #[env(required)]
    pub secret_key: String,

    #[env(default = 4)]
    pub max_workers: u8,
}

fn main() -> anyhow::Result<()> {
    std::env::remove_var("SECRET_KEY");

    let loader = Loader::new();
    let mut config = Config::default();

    match loader.load(&mut config) {
        Err(Error::MissingRequiredField { field, key }) => {
            println!("Missing '{field}', set {key} to continue");
        }
        other => anyhow::bail!("expected a missing field error, got {other:?}"),
    }

    std::env::set_var("SECRET_KEY", "s3cr3t");
    std::env::set_var("MAX_WORKERS", "99999");
    if let Err(e) = loader.load(&mut config) {
        println!("Rejected: {e}");
    }

    std::env::set_var("MAX_WORKERS", "16");
    loader.load(&mut config)?;
    println!("Loaded: {config:?}");

    Ok(())
}
