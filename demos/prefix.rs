//! Example demonstrating the loader prefix

use envconf::{EnvConf, Loader};

#[derive(Debug, Default, EnvConf)]
struct Config {
    // Read from MYAPP_DATABASE_URL once the prefix is set
    pub database_url: String,

    // Explicit names are prefixed as well: MYAPP_HOST
    #[env(name = "HOST")]
    pub host: String,

    #[env(default = 8080)]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_HOST", "192.168.0.1");
    // Ignored, the prefixed key is consulted instead
    std::env::set_var("HOST", "127.0.0.1");

    let mut loader = Loader::new();
    loader.set_prefix("myapp");

    let mut config = Config::default();
    loader.load(&mut config)?;

    println!("Configuration with prefix '{}':", loader.prefix());
    println!("  Database URL: {}", config.database_url);
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);

    Ok(())
}
