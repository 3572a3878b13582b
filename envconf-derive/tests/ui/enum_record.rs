#![allow(dead_code)]

use envconf::EnvConf;

#[derive(EnvConf)]
enum Mode {
    Development,
    Production,
}

fn main() {}
