//! Example demonstrating custom environment variable names

use envconf::EnvConf;

#[derive(Debug, Default, EnvConf)]
struct Config {
    // Load from DB_CONNECTION_STRING instead of DATABASE_URL
    #[env(name = "DB_CONNECTION_STRING")]
    pub database_url: String,

    // Load from REDIS_URL instead of CACHE_URL
    #[env(name = "REDIS_URL")]
    pub cache_url: String,

    // Derived names split on case changes: HTTP_SERVER_ADDR
    #[allow(non_snake_case)]
    pub HTTPServerAddr: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DB_CONNECTION_STRING", "postgres://localhost/mydb");
    std::env::set_var("REDIS_URL", "redis://localhost:6379");
    std::env::set_var("HTTP_SERVER_ADDR", "0.0.0.0:3000");

    let config = Config::from_env()?;

    println!("Configuration with custom names:");
    println!("  Database URL: {}", config.database_url);
    println!("  Cache URL: {}", config.cache_url);
    println!("  HTTP Server: {}", config.HTTPServerAddr);

    for field in Config::fields() {
        println!("  {} <- {}", field.name(), field.env_key());
    }

    Ok(())
}
