#![allow(dead_code)]

use envconf::EnvConf;

#[derive(EnvConf)]
struct Port(pub u16);

fn main() {}
