//! Tests for matcher configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        thread_count = { count = 8 }
        min_partition_size = 1000
    "#;

    let config = RideMatchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Count(8));
    assert_eq!(config.min_partition_size, 1000);
}

#[test]
fn test_toml_unit_variants() {
    let config = RideMatchConfig::from_toml_str(r#"thread_count = "sequential""#).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Sequential);

    let config = RideMatchConfig::from_toml_str(r#"thread_count = "auto""#).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Auto);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = RideMatchConfig::from_toml_str("").unwrap();
    assert_eq!(config, RideMatchConfig::default());
    assert_eq!(config.thread_count, ThreadCount::Auto);
    assert_eq!(config.min_partition_size, 1);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        thread_count: sequential
        min_partition_size: 64
    "#;

    let config = RideMatchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Sequential);
    assert_eq!(config.min_partition_size, 64);
}

#[test]
fn test_invalid_toml() {
    let err = RideMatchConfig::from_toml_str("thread_count = 3.5").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_validate() {
    assert!(RideMatchConfig::default().validate().is_ok());

    let zero_threads = RideMatchConfig::new().with_thread_count(ThreadCount::Count(0));
    assert!(matches!(zero_threads.validate(), Err(ConfigError::Invalid(_))));

    let zero_size = RideMatchConfig::new().with_min_partition_size(0);
    assert!(matches!(zero_size.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_load_missing_file() {
    let err = RideMatchConfig::load("/nonexistent/ridematch.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = RideMatchConfig::new()
        .with_thread_count(ThreadCount::Count(2))
        .with_min_partition_size(10);

    assert_eq!(config.thread_count, ThreadCount::Count(2));
    assert_eq!(config.min_partition_size, 10);
}

#[test]
fn test_thread_count_default() {
    assert_eq!(ThreadCount::default(), ThreadCount::Auto);
}

#[test]
fn test_thread_count_display() {
    assert_eq!(format!("{}", ThreadCount::Auto), "Auto");
    assert_eq!(format!("{}", ThreadCount::Sequential), "Sequential");
    assert_eq!(format!("{}", ThreadCount::Count(4)), "4");
}

#[test]
fn test_thread_count_resolve() {
    assert_eq!(ThreadCount::Count(4).resolve(), 4);
    assert_eq!(ThreadCount::Count(0).resolve(), 1);
    assert_eq!(ThreadCount::Sequential.resolve(), 1);
    assert!(ThreadCount::Auto.resolve() > 0);
}

#[test]
fn test_thread_count_from_cli() {
    assert_eq!(ThreadCount::from_cli(0), ThreadCount::Auto);
    assert_eq!(ThreadCount::from_cli(1), ThreadCount::Sequential);
    assert_eq!(ThreadCount::from_cli(12), ThreadCount::Count(12));
}
