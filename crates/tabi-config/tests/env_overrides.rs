use figment::Jail;
use pretty_assertions::assert_eq;
use tabi_config::TabiConfig;

#[test]
fn credential_from_env_enables_places() {
    Jail::expect_with(|jail| {
        jail.set_env("TABI_PLACES__API_KEY", "env-key");

        let config = TabiConfig::load().expect("config loads");
        assert!(config.places.is_configured());
        assert_eq!(config.places.api_key(), Some("env-key"));
        Ok(())
    });
}

#[test]
fn missing_credential_degrades_without_error() {
    Jail::expect_with(|_jail| {
        let config = TabiConfig::load().expect("config loads");
        assert!(!config.places.is_configured());
        Ok(())
    });
}

#[test]
fn storage_dir_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("TABI_CHECKLIST__STORAGE_DIR", "/var/tmp/tabi");

        let config = TabiConfig::load().expect("config loads");
        assert_eq!(
            config.checklist.storage_dir(),
            Some(std::path::PathBuf::from("/var/tmp/tabi"))
        );
        Ok(())
    });
}
