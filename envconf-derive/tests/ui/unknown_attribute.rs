#![allow(dead_code)]

use envconf::EnvConf;

#[derive(EnvConf)]
struct Config {
    #[env(skip)]
    pub secret: String,
}

fn main() {}
