//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use verity_config::VerityConfig;

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://factcheck.example.com"
timeout_secs = 45

[history]
dir = "/var/lib/verity"
capacity = 10
quota_bytes = 0

[share]
page_url = "https://factcheck.example.com/app"
copy_to_clipboard = false
"#,
        )?;

        let config: VerityConfig = Figment::from(Serialized::defaults(VerityConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base(), "https://factcheck.example.com");
        assert_eq!(config.api.timeout().map(|t| t.as_secs()), Some(45));
        assert_eq!(config.history.dir, "/var/lib/verity");
        assert_eq!(config.history.capacity, 10);
        assert!(config.history.quota().is_none());
        assert_eq!(config.share.page_url, "https://factcheck.example.com/app");
        assert!(!config.share.copy_to_clipboard);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://10.0.0.5:8000"
"#,
        )?;

        let config: VerityConfig = Figment::from(Serialized::defaults(VerityConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        assert!(config.api.timeout_secs.is_none());
        assert_eq!(config.history.capacity, 50);
        assert_eq!(config.share.page_url, "http://localhost:8080/");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_from_dot_verity() {
    Jail::expect_with(|jail| {
        jail.create_dir(".verity")?;
        jail.create_file(
            ".verity/config.toml",
            r#"
[history]
capacity = 7
"#,
        )?;

        let config: VerityConfig = VerityConfig::figment().extract()?;
        assert_eq!(config.history.capacity, 7);
        Ok(())
    });
}

#[test]
fn invalid_toml_value_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[history]
capacity = "lots"
"#,
        )?;

        let result: Result<VerityConfig, _> =
            Figment::from(Serialized::defaults(VerityConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
