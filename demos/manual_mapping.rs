//! Example implementing `EnvConf` by hand instead of deriving it
//!
//! Values come from an in-memory map instead of the process environment.

use std::collections::HashMap;

use envconf::{EnvConf, EnvValue, Error, FieldDescriptor, Loader, RawValue};

#[derive(Debug, Default)]
struct Config {
    host: String,
    port: u16,
    debug: bool,
}

impl EnvConf for Config {
    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("host", String::KIND).with_required_annotation("true"),
            FieldDescriptor::new("port", u16::KIND).with_default("8080"),
            FieldDescriptor::keyed("debug", Some("VERBOSE"), bool::KIND),
        ]
    }

    fn assign(&mut self, field: &FieldDescriptor, value: RawValue<'_>) -> Result<(), Error> {
        match field.name() {
            "host" => self.host = value.parse(field.name())?,
            "port" => self.port = value.parse(field.name())?,
            "debug" => self.debug = value.parse(field.name())?,
            _ => return Err(Error::unknown_field(field.name())),
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let env = HashMap::from([
        ("SVC_HOST".to_string(), "10.0.0.1".to_string()),
        ("SVC_VERBOSE".to_string(), "t".to_string()),
    ]);
    let loader = Loader::with_environment(env).with_prefix("svc");

    let mut config = Config::default();
    loader.load(&mut config)?;

    println!("Configuration from map: {config:?}");

    Ok(())
}
