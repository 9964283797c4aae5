//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use mlv_config::{ConfigError, MlvConfig};
use mlv_core::SearchType;
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[display]
json_indent = 4
no_value_marker = "n/a"

[registry]
default_search_type = "owner"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(MlvConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = MlvConfig::from_figment(&figment).expect("valid config");

        assert_eq!(config.display.json_indent, 4);
        assert_eq!(config.display.no_value_marker, "n/a");
        assert_eq!(config.registry.default_search_type, SearchType::Owner);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".mlv")).map_err(|e| e.to_string())?;
        jail.create_file(".mlv/config.toml", "[display]\njson_indent = 3\n")?;

        let config = MlvConfig::load().expect("valid config");
        assert_eq!(config.display.json_indent, 3);
        assert_eq!(config.display.no_value_marker, "-");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[display]\njson_indent = 4\n")?;
        jail.set_env("MLV_DISPLAY__JSON_INDENT", "6");
        jail.set_env("MLV_REGISTRY__DEFAULT_SEARCH_TYPE", "Owner");

        let figment = Figment::from(Serialized::defaults(MlvConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MLV_").split("__"));
        let config = MlvConfig::from_figment(&figment).expect("valid config");

        assert_eq!(config.display.json_indent, 6);
        assert_eq!(config.registry.default_search_type, SearchType::Owner);
        Ok(())
    });
}

#[test]
fn out_of_range_indent_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("MLV_DISPLAY__JSON_INDENT", "12");

        let err = MlvConfig::load().expect_err("indent 12 should be rejected");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("display.json_indent"));
        Ok(())
    });
}

#[test]
fn unknown_search_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("MLV_REGISTRY__DEFAULT_SEARCH_TYPE", "name");

        let err = MlvConfig::load().expect_err("unknown search type");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
