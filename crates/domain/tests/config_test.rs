use ferrous_lan_domain::config::{ConfigError, LogFormat, NeighborFormat};
use ferrous_lan_domain::{CliOverrides, Config};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.leases.path, "/var/db/dhcpd/dhcpd.leases");
    assert_eq!(config.neighbors.format, NeighborFormat::Ndp);
    assert_eq!(config.neighbors.program(), "ndp");
    assert_eq!(config.neighbors.arguments(), vec!["-an".to_string()]);
    assert_eq!(config.neighbors.timeout_ms, 5000);
    assert_eq!(config.leases.read_timeout_ms, 5000);
    assert_eq!(config.refresh.interval_secs, 30);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    let config = Config::from_toml(
        r#"
        [neighbors]
        format = "ip-neigh"

        [refresh]
        interval_secs = 10
        "#,
    )
    .unwrap();

    assert_eq!(config.neighbors.format, NeighborFormat::IpNeigh);
    assert_eq!(config.neighbors.program(), "ip");
    assert_eq!(
        config.neighbors.arguments(),
        vec!["-6".to_string(), "neigh".to_string(), "show".to_string()]
    );
    assert_eq!(config.refresh.interval_secs, 10);
    assert_eq!(config.server.web_port, 8080);
}

#[test]
fn test_explicit_command_overrides_format_default() {
    let config = Config::from_toml(
        r#"
        [neighbors]
        command = "/usr/sbin/ndp"
        args = ["-a", "-n"]
        timeout_ms = 250

        [logging]
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.neighbors.program(), "/usr/sbin/ndp");
    assert_eq!(config.neighbors.arguments(), vec!["-a".to_string(), "-n".to_string()]);
    assert_eq!(config.neighbors.timeout_ms, 250);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    assert!(Config::from_toml("[server\nweb_port = 1").is_err());
    assert!(Config::from_toml("[neighbors]\nformat = \"arp\"").is_err());
}

#[test]
fn test_validation_rejects_zero_values() {
    let mut config = Config::default();
    config.refresh.interval_secs = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.neighbors.timeout_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.leases.read_timeout_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.server.web_port = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.leases.path = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_neighbor_format_from_str() {
    assert_eq!("ndp".parse::<NeighborFormat>(), Ok(NeighborFormat::Ndp));
    assert_eq!("IP-NEIGH".parse::<NeighborFormat>(), Ok(NeighborFormat::IpNeigh));
    assert!("arp".parse::<NeighborFormat>().is_err());
}

#[test]
fn test_load_applies_cli_overrides_after_file() {
    let file = config_file("[server]\nweb_port = 9000\n\n[leases]\npath = \"/tmp/dhcpd.leases\"\n");

    let overrides = CliOverrides {
        bind_address: Some("127.0.0.1".to_string()),
        neighbor_format: Some(NeighborFormat::IpNeigh),
        refresh_interval_secs: Some(5),
        ..Default::default()
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.server.web_port, 9000);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.leases.path, "/tmp/dhcpd.leases");
    assert_eq!(config.neighbors.format, NeighborFormat::IpNeigh);
    assert_eq!(config.refresh.interval_secs, 5);
}

#[test]
fn test_load_rejects_invalid_override() {
    let file = config_file("");

    let overrides = CliOverrides {
        refresh_interval_secs: Some(0),
        ..Default::default()
    };
    let result = Config::load(file.path().to_str(), overrides);

    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_missing_explicit_file() {
    let result = Config::load(Some("/nonexistent/ferrous-lan.toml"), CliOverrides::default());

    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
