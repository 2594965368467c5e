use anyhow::{Context, Result};
use derivative::Derivative;
use image_sketch::{
    SaveOptions,
    save::{DEFAULT_FILE_TYPE, DEFAULT_OUTPUT_NAME},
};
use log::debug;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const APP_NAME: &str = "sketchify";

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub save: Save,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Save {
    #[derivative(Default(value = "DEFAULT_OUTPUT_NAME.to_string()"))]
    pub output_name: String,

    #[derivative(Default(value = "DEFAULT_FILE_TYPE.to_string()"))]
    pub file_type: String,
}

impl Config {
    /// Load `path` if given, otherwise the per-user config file when it
    /// exists, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("read config file {} failed", path.display()))?;
        let mut config = Self::parse(&text)
            .with_context(|| format!("parse config file {} failed", path.display()))?;
        config.config_path = Some(path);

        debug!("{:?}", config);
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(text)?)
    }

    pub fn save_options(&self) -> SaveOptions {
        SaveOptions::new()
            .with_output_name(self.save.output_name.as_str())
            .with_file_type(self.save.file_type.as_str())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    AppDirs::new(Some(APP_NAME), true).map(|dirs| dirs.config_dir.join(format!("{APP_NAME}.toml")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            [save]
            output_name = "drawing"
            file_type = "jpg"
            "#,
        )
        .unwrap();

        assert_eq!(config.save.output_name, "drawing");
        assert_eq!(config.save.file_type, "jpg");
    }

    #[test]
    fn test_parse_missing_fields_use_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.save.output_name, DEFAULT_OUTPUT_NAME);
        assert_eq!(config.save.file_type, DEFAULT_FILE_TYPE);

        let config = Config::parse("[save]\nfile_type = \"webp\"\n").unwrap();
        assert_eq!(config.save.output_name, DEFAULT_OUTPUT_NAME);
        assert_eq!(config.save.file_type, "webp");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse("[save\noutput_name = ").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sketchify.toml");
        fs::write(&path, "[save]\noutput_name = \"pencil\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(
            config.save_options().output_path("/pics/a.png"),
            PathBuf::from("/pics/pencil.png")
        );
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(Some(dir.path().join("nope.toml").as_path())).is_err());
    }
}
