use std::{env, path::PathBuf};

use super::schema::Settings;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Load(#[from] ::config::ConfigError),
    #[error("playback.initial_volume must be within 0.0..=1.0 (got {0})")]
    InitialVolumeOutOfRange(f32),
    #[error("playback.tick_ms must be >= 1")]
    ZeroTickInterval,
    #[error("controls.volume_step must be within 1..=100 (got {0})")]
    VolumeStepOutOfRange(u8),
}

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `DORATUNES__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, SettingsError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("DORATUNES")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let volume = self.playback.initial_volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(SettingsError::InitialVolumeOutOfRange(volume));
        }
        if self.playback.tick_ms == 0 {
            return Err(SettingsError::ZeroTickInterval);
        }
        if !(1..=100).contains(&self.controls.volume_step) {
            return Err(SettingsError::VolumeStepOutOfRange(self.controls.volume_step));
        }
        Ok(())
    }

    /// Render the settings as TOML, suitable as a starting `config.toml`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `DORATUNES_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("DORATUNES_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/doratunes/config.toml`
/// or `~/.config/doratunes/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("doratunes").join("config.toml"))
}
