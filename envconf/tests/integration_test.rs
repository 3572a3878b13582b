//! Integration tests

use envconf::{EnvConf, Error, FieldKind, Loader};
use serial_test::serial;
use std::env;

#[derive(Debug, Default, PartialEq, EnvConf)]
struct Config {
    #[env(name = "HOST")]
    pub host: String,

    pub port: i32,

    #[env(name = "DEBUG", default = "true")]
    pub debug: bool,
}

#[derive(Debug, Default, EnvConf)]
struct ConfigWithSecret {
    #[env(required = "true")]
    pub secret_key: String,
}

#[derive(Debug, Default, EnvConf)]
struct ConfigWithDefaults {
    #[env(default = "127.0.0.1")]
    pub server_addr: String,

    #[env(default = 10)]
    pub max_connections: u32,

    #[env(default = 0.25)]
    pub sample_ratio: f64,

    #[env(default)]
    pub motd: String,
}

#[derive(Debug, Default, EnvConf)]
struct ConfigWithWidths {
    pub procs: i8,
    pub max_workers: u16,
    pub mask: u32,
    pub ratio: f32,
}

#[derive(Debug, Default, EnvConf)]
#[allow(dead_code)]
struct ConfigWithPrivate {
    pub host: String,
    token: String,
    pub(self) session: String,
}

#[derive(Debug, Default, EnvConf)]
struct ConfigWithHosts {
    pub port: u16,
    pub hosts: Vec<String>,
}

#[derive(Debug, Default, EnvConf)]
#[allow(non_snake_case)]
struct GoStyleConfig {
    pub SecretKey: String,
    pub HTTPServer: String,
    pub Http2Port: u16,
}

type Port = u16;
type Hostname = String;

#[derive(Debug, Default, EnvConf)]
struct ConfigWithAliases {
    #[env(name = "HOST")]
    pub address: Hostname,
    pub port: Port,
}

#[derive(Debug, Default, EnvConf)]
struct Wrapper<T: Default> {
    pub name: String,
    pub extra: T,
}

const VARS: &[&str] = &[
    "HOST",
    "APP_HOST",
    "PORT",
    "APP_PORT",
    "DEBUG",
    "SECRET_KEY",
    "APP_SECRET_KEY",
    "SERVER_ADDR",
    "MAX_CONNECTIONS",
    "SAMPLE_RATIO",
    "MOTD",
    "PROCS",
    "MAX_WORKERS",
    "MASK",
    "RATIO",
    "TOKEN",
    "SESSION",
    "HOSTS",
    "HTTP_SERVER",
    "NAME",
    "EXTRA",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_success() {
    clear_env();
    env::set_var("HOST", "localhost");

    let mut config = Config::default();
    Loader::new().load(&mut config).unwrap();

    assert_eq!(
        config,
        Config {
            host: "localhost".to_string(),
            port: 0,
            debug: true,
        }
    );

    clear_env();
}

#[test]
#[serial]
fn test_load_with_prefix() {
    clear_env();
    env::set_var("HOST", "127.0.0.1");
    env::set_var("APP_HOST", "192.168.0.1");

    let mut loader = Loader::new();
    loader.set_prefix("app");
    assert_eq!(loader.prefix(), "APP");

    let mut config = Config::default();
    loader.load(&mut config).unwrap();
    assert_eq!(config.host, "192.168.0.1");

    clear_env();
}

#[test]
#[serial]
fn test_default_value() {
    clear_env();

    let config = Config::from_env().unwrap();
    assert!(config.debug);
}

#[test]
#[serial]
fn test_no_env_annotation_uses_derived_name() {
    clear_env();
    env::set_var("PORT", "1337");

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 1337);

    clear_env();
}

#[test]
#[serial]
fn test_missing_value_leaves_zero() {
    clear_env();

    let config = Config::from_env().unwrap();
    assert_eq!(config.host, "");
    assert_eq!(config.port, 0);
}

#[test]
#[serial]
fn test_required_field_is_missing() {
    clear_env();

    let err = ConfigWithSecret::from_env().unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { ref field, ref key }
            if field == "secret_key" && key == "SECRET_KEY"
    ));
}

#[test]
#[serial]
fn test_required_field_is_present() {
    clear_env();
    env::set_var("SECRET_KEY", "s3cr3t");

    let config = ConfigWithSecret::from_env().unwrap();
    assert_eq!(config.secret_key, "s3cr3t");

    clear_env();
}

#[test]
#[serial]
fn test_required_field_with_prefix() {
    clear_env();
    env::set_var("SECRET_KEY", "unprefixed");

    let mut config = ConfigWithSecret::default();
    let result = Loader::new().with_prefix("app").load(&mut config);
    assert!(matches!(result, Err(Error::MissingRequiredField { ref key, .. }) if key == "APP_SECRET_KEY"));

    env::set_var("APP_SECRET_KEY", "prefixed");
    Loader::new().with_prefix("app").load(&mut config).unwrap();
    assert_eq!(config.secret_key, "prefixed");

    clear_env();
}

#[test]
#[serial]
fn test_config_with_defaults() {
    clear_env();

    let config = ConfigWithDefaults::from_env().unwrap();
    assert_eq!(config.server_addr, "127.0.0.1");
    assert_eq!(config.max_connections, 10);
    assert_eq!(config.sample_ratio, 0.25);
    assert_eq!(config.motd, "");
}

#[test]
#[serial]
fn test_config_override_defaults() {
    clear_env();
    env::set_var("SERVER_ADDR", "0.0.0.0");
    env::set_var("MAX_CONNECTIONS", "20");
    env::set_var("SAMPLE_RATIO", "1");
    env::set_var("MOTD", "hello");

    let config = ConfigWithDefaults::from_env().unwrap();
    assert_eq!(config.server_addr, "0.0.0.0");
    assert_eq!(config.max_connections, 20);
    assert_eq!(config.sample_ratio, 1.0);
    assert_eq!(config.motd, "hello");

    clear_env();
}

#[test]
#[serial]
fn test_numeric_widths() {
    clear_env();
    env::set_var("PROCS", "3");
    env::set_var("MAX_WORKERS", "8");
    env::set_var("MASK", "0xff");
    env::set_var("RATIO", "50.23");

    let config = ConfigWithWidths::from_env().unwrap();
    assert_eq!(config.procs, 3);
    assert_eq!(config.max_workers, 8);
    assert_eq!(config.mask, 255);
    assert!((config.ratio - 50.23).abs() <= 1e-6);

    clear_env();
}

#[test]
#[serial]
fn test_numeric_empty_text_is_zero() {
    clear_env();
    env::set_var("PROCS", "");
    env::set_var("RATIO", "");

    let mut config = ConfigWithWidths {
        procs: 5,
        max_workers: 5,
        mask: 5,
        ratio: 5.0,
    };
    Loader::new().load(&mut config).unwrap();
    assert_eq!(config.procs, 0);
    assert_eq!(config.ratio, 0.0);

    clear_env();
}

#[test]
#[serial]
fn test_numeric_overflow() {
    clear_env();
    env::set_var("PROCS", "99999");

    let err = ConfigWithWidths::from_env().unwrap_err();
    match err {
        Error::Parse {
            field,
            value,
            type_name,
            ..
        } => {
            assert_eq!(field, "procs");
            assert_eq!(value, "99999");
            assert_eq!(type_name, "i8");
        }
        other => panic!("Expected Parse error, got {other:?}"),
    }

    clear_env();
}

#[test]
#[serial]
fn test_bool_coercion() {
    clear_env();
    env::set_var("DEBUG", "FALSE");

    let config = Config::from_env().unwrap();
    assert!(!config.debug);

    env::set_var("DEBUG", "True");
    let config = Config::from_env().unwrap();
    assert!(config.debug);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_bool_keeps_previous_value() {
    clear_env();
    env::set_var("HOST", "localhost");
    env::set_var("DEBUG", "invalid");

    let mut config = Config::default();
    let err = Loader::new().load(&mut config).unwrap_err();

    assert!(matches!(err, Error::Parse { ref field, .. } if field == "debug"));
    assert!(!config.debug);
    // Fields before the failure stay assigned
    assert_eq!(config.host, "localhost");

    clear_env();
}

#[test]
#[serial]
fn test_private_fields_are_skipped() {
    clear_env();
    env::set_var("HOST", "localhost");
    env::set_var("TOKEN", "ignored");
    env::set_var("SESSION", "ignored");

    let fields = ConfigWithPrivate::fields();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), "host");

    let mut config = ConfigWithPrivate {
        host: String::new(),
        token: "untouched".to_string(),
        session: "untouched".to_string(),
    };
    Loader::new().load(&mut config).unwrap();
    assert_eq!(config.host, "localhost");
    assert_eq!(config.token, "untouched");
    assert_eq!(config.session, "untouched");

    clear_env();
}

#[test]
#[serial]
fn test_unsupported_type() {
    clear_env();
    env::set_var("PORT", "8080");
    env::set_var("HOSTS", "192.168.0.1,192.168.0.2");

    let mut config = ConfigWithHosts::default();
    let err = Loader::new().load(&mut config).unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedType { ref field, ref type_name }
            if field == "hosts" && type_name.contains("Vec")
    ));
    assert_eq!(config.port, 8080);
    assert!(config.hosts.is_empty());

    clear_env();
}

#[test]
fn test_extracted_descriptors() {
    let fields = Config::fields();
    assert_eq!(fields.len(), 3);

    assert_eq!(fields[0].name(), "host");
    assert_eq!(fields[0].env_key(), "HOST");
    assert!(!fields[0].has_default());
    assert!(!fields[0].is_required());
    assert_eq!(fields[0].kind(), FieldKind::Text);

    assert_eq!(fields[1].name(), "port");
    assert_eq!(fields[1].env_key(), "PORT");
    assert_eq!(fields[1].kind(), FieldKind::SignedInt(32));

    assert_eq!(fields[2].name(), "debug");
    assert_eq!(fields[2].env_key(), "DEBUG");
    assert_eq!(fields[2].default_value(), Some("true"));
    assert_eq!(fields[2].kind(), FieldKind::Bool);

    let secret = ConfigWithSecret::fields();
    assert_eq!(secret[0].env_key(), "SECRET_KEY");
    assert!(secret[0].is_required());

    let defaults = ConfigWithDefaults::fields();
    assert_eq!(defaults[1].default_value(), Some("10"));
    assert_eq!(defaults[3].default_value(), Some(""));
    assert!(defaults[3].has_default());

    let hosts = ConfigWithHosts::fields();
    assert!(matches!(hosts[1].kind(), FieldKind::Unsupported(name) if name.contains("Vec")));
}

#[test]
fn test_camel_case_identifiers() {
    let fields = GoStyleConfig::fields();
    assert_eq!(fields[0].name(), "SecretKey");
    assert_eq!(fields[0].env_key(), "SECRET_KEY");
    assert_eq!(fields[1].env_key(), "HTTP_SERVER");
    assert_eq!(fields[2].env_key(), "HTTP_2_PORT");
}

#[test]
#[serial]
fn test_type_aliases_use_target_coercion() {
    clear_env();
    env::set_var("HOST", "localhost");
    env::set_var("PORT", "8080");

    let fields = ConfigWithAliases::fields();
    assert_eq!(fields[0].kind(), FieldKind::Text);
    assert_eq!(fields[1].kind(), FieldKind::UnsignedInt(16));

    let config = ConfigWithAliases::from_env().unwrap();
    assert_eq!(config.address, "localhost");
    assert_eq!(config.port, 8080);

    env::set_var("PORT", "70000");
    let err = ConfigWithAliases::from_env().unwrap_err();
    assert!(matches!(
        err,
        Error::Parse { ref field, ref type_name, .. } if field == "port" && type_name == "u16"
    ));

    clear_env();
}

#[test]
#[serial]
fn test_generic_record() {
    clear_env();
    env::set_var("NAME", "worker");
    env::set_var("EXTRA", "42");

    // Generic parameters have no static coercion rule
    assert!(matches!(
        Wrapper::<u64>::fields()[1].kind(),
        FieldKind::Unsupported("u64")
    ));

    let mut config = Wrapper::<u64>::default();
    let err = Loader::new().load(&mut config).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedType { ref field, ref type_name }
            if field == "extra" && type_name == "u64"
    ));
    assert_eq!(config.name, "worker");
    assert_eq!(config.extra, 0);

    clear_env();
}

#[test]
#[serial]
fn test_load_is_idempotent() {
    clear_env();
    env::set_var("HOST", "localhost");
    env::set_var("PORT", "8080");

    let loader = Loader::new();
    let mut config = Config::default();
    loader.load(&mut config).unwrap();
    let first = format!("{config:?}");
    loader.load(&mut config).unwrap();
    assert_eq!(format!("{config:?}"), first);

    clear_env();
}
